//! Fantasy console bindings
//!
//! The console calls the exported `start` once and `update` every frame. It
//! exposes the gamepad and draw palette as memory-mapped registers and draws
//! through imported functions.

use core::fmt;
use std::cell::RefCell;

use log::{LevelFilter, Log, Metadata, Record};

use super::{Host, format_line};
use crate::game::Game;
use crate::input::Buttons;
use crate::render::{Canvas, DrawColors};
use crate::tuning::Tuning;

const DRAW_COLORS: *mut u16 = 0x14 as *mut u16;
const GAMEPAD1: *const u8 = 0x16 as *const u8;

mod ffi {
    unsafe extern "C" {
        pub fn rect(x: i32, y: i32, width: u32, height: u32);
        #[link_name = "textUtf8"]
        pub fn text_utf8(text: *const u8, length: usize, x: i32, y: i32);
        #[link_name = "traceUtf8"]
        pub fn trace_utf8(text: *const u8, length: usize);
    }
}

/// Write a line to the console's debug output
pub fn trace(message: &str) {
    unsafe { ffi::trace_utf8(message.as_ptr(), message.len()) }
}

/// The real console as a [`Host`]
pub struct Console;

impl Console {
    fn set_colors(&mut self, colors: DrawColors) {
        unsafe { DRAW_COLORS.write_volatile(colors.0) }
    }
}

impl Canvas for Console {
    fn rect(&mut self, x: i32, y: i32, width: u32, height: u32, colors: DrawColors) {
        self.set_colors(colors);
        unsafe { ffi::rect(x, y, width, height) }
    }

    fn text(&mut self, text: &str, x: i32, y: i32, colors: DrawColors) {
        self.set_colors(colors);
        unsafe { ffi::text_utf8(text.as_ptr(), text.len(), x, y) }
    }
}

impl Host for Console {
    fn gamepad(&self) -> Buttons {
        Buttons::from_register(unsafe { GAMEPAD1.read_volatile() })
    }
}

fn trace_fmt(args: fmt::Arguments) {
    trace(&format_line(args));
}

/// `log` backend over `traceUtf8`
struct TraceLogger;

impl Log for TraceLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            trace_fmt(format_args!("[{}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: TraceLogger = TraceLogger;

thread_local! {
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
}

fn init_diagnostics() {
    // Zero-sized closure, so boxing it does not allocate
    std::panic::set_hook(Box::new(|info| trace_fmt(format_args!("panic: {info}"))));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn start() {
    init_diagnostics();
    let game = Game::on_start(Tuning::default());
    GAME.with(|slot| *slot.borrow_mut() = Some(game));
}

#[unsafe(no_mangle)]
pub extern "C" fn update() {
    GAME.with(|slot| {
        if let Some(game) = slot.borrow_mut().as_mut() {
            game.on_update(&mut Console);
        }
    });
}
