//! Gamepad state and press-edge detection
//!
//! Bit layout matches the console's `GAMEPAD1` register so a raw byte can be
//! wrapped without translation.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// One gamepad's button state
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Buttons: u8 {
        /// Confirm (X key)
        const BUTTON_1 = 1;
        /// Pause (Z key)
        const BUTTON_2 = 2;
        const LEFT = 16;
        const RIGHT = 32;
        const UP = 64;
        const DOWN = 128;
    }
}

impl Buttons {
    /// Wrap a raw register byte, dropping unused bits
    pub fn from_register(raw: u8) -> Self {
        Self::from_bits_truncate(raw)
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    /// Buttons currently down
    pub held: Buttons,
    /// Buttons that went from up to down since the previous frame
    pub pressed: Buttons,
}

impl InputFrame {
    pub fn new(current: Buttons, previous: Buttons) -> Self {
        Self {
            held: current,
            pressed: current & !previous,
        }
    }

    #[inline]
    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.pressed.contains(button)
    }

    #[inline]
    pub fn is_held(&self, button: Buttons) -> bool {
        self.held.contains(button)
    }
}
