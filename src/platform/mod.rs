//! Platform abstraction layer
//!
//! The cart only needs a gamepad and two drawing primitives from its host.
//! `Headless` records draw calls for tests and the native harness; the
//! console bindings live in `w4` and are only built for wasm32.

#[cfg(target_arch = "wasm32")]
pub mod w4;

use core::fmt::{self, Write};

use arrayvec::ArrayString;

use crate::input::Buttons;
use crate::render::{Canvas, DrawColors};

/// One diagnostic line, formatted on the stack. The console's memory is
/// fixed at 64 KiB with no heap to grow into, so nothing on the cart path
/// may allocate.
pub type TraceLine = ArrayString<128>;

/// Writes what fits and drops the rest
struct Truncating<'a>(&'a mut TraceLine);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut end = s.len().min(self.0.remaining_capacity());
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.0.push_str(&s[..end]);
        Ok(())
    }
}

/// Format `args` into a [`TraceLine`], cutting at a char boundary if long
pub fn format_line(args: fmt::Arguments) -> TraceLine {
    let mut line = TraceLine::new();
    // Truncating never reports an error
    let _ = Truncating(&mut line).write_fmt(args);
    line
}

/// Everything the cart consumes from its host each frame
pub trait Host: Canvas {
    /// Current state of the first gamepad
    fn gamepad(&self) -> Buttons;
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        colors: DrawColors,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        colors: DrawColors,
    },
}

/// In-memory host with a scriptable gamepad
#[derive(Debug, Default)]
pub struct Headless {
    gamepad: Buttons,
    calls: Vec<DrawCall>,
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gamepad(&mut self, buttons: Buttons) {
        self.gamepad = buttons;
    }

    /// Draw calls since the last `clear_calls`
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Forget recorded calls (start of a new frame)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for Headless {
    fn rect(&mut self, x: i32, y: i32, width: u32, height: u32, colors: DrawColors) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            colors,
        });
    }

    fn text(&mut self, text: &str, x: i32, y: i32, colors: DrawColors) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            colors,
        });
    }
}

impl Host for Headless {
    fn gamepad(&self) -> Buttons {
        self.gamepad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_short() {
        let line = format_line(format_args!("[{}] {}", log::Level::Info, "hello"));
        assert_eq!(line.as_str(), "[INFO] hello");
    }

    #[test]
    fn test_format_line_truncates_long_messages() {
        let long = "x".repeat(300);
        let line = format_line(format_args!("[WARN] {long}"));
        assert_eq!(line.len(), line.capacity());
        assert!(line.starts_with("[WARN] xxx"));
    }

    #[test]
    fn test_format_line_cuts_on_char_boundary() {
        // 127 ASCII bytes leave one byte, too few for a two-byte char
        let head = "a".repeat(127);
        let line = format_line(format_args!("{head}\u{e9}tail"));
        assert_eq!(line.as_str(), head);
    }
}
