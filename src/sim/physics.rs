//! Player entity and its integrator
//!
//! Velocity is fractional, position is whole pixels. Gravity only acts while
//! airborne so a grounded player never accumulates sub-pixel sink.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::input::{Buttons, InputFrame};
use crate::render::DrawColors;
use crate::tuning::PlayerTuning;

/// The player's square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: IVec2,
    pub size: i32,
    pub colors: DrawColors,
    pub vel: Vec2,
    pub on_ground: bool,
}

impl Player {
    /// Standing on the ground, centered, at rest
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            pos: tuning.spawn_position(),
            size: tuning.size,
            colors: tuning.colors,
            vel: Vec2::ZERO,
            on_ground: true,
        }
    }

    /// Put the player back at spawn without touching appearance
    pub fn respawn(&mut self, tuning: &PlayerTuning) {
        self.pos = tuning.spawn_position();
        self.vel = Vec2::ZERO;
        self.on_ground = true;
    }

    /// Horizontal steering and jump impulse
    pub fn apply_input(&mut self, input: &InputFrame, tuning: &PlayerTuning) {
        if input.is_held(Buttons::LEFT) {
            self.vel.x = -tuning.speed;
        } else if input.is_held(Buttons::RIGHT) {
            self.vel.x = tuning.speed;
        } else {
            self.vel.x *= tuning.friction;
        }

        if input.is_held(Buttons::UP) && self.on_ground {
            self.vel.y = -tuning.jump_power;
            self.on_ground = false;
        }
    }

    /// Pull an airborne player down, capped at terminal fall speed
    pub fn apply_gravity(&mut self, tuning: &PlayerTuning) {
        if self.on_ground {
            return;
        }
        self.vel.y = (self.vel.y + tuning.gravity).min(tuning.max_fall_speed);
    }
}
