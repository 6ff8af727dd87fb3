//! Depth Runner - a pseudo-3D dodge game for a 160x160 fantasy console
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game flow)
//! - `render`: Frame composition over an abstract canvas
//! - `platform`: Console host bindings and a headless host
//! - `tuning`: Data-driven game balance
//! - `input`: Gamepad register and press-edge detection

pub mod game;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use input::{Buttons, InputFrame};
pub use render::{Canvas, DrawColors};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Console framebuffer is square
    pub const SCREEN_SIZE: i32 = 160;
    pub const SCREEN_WIDTH: i32 = SCREEN_SIZE;
    pub const SCREEN_HEIGHT: i32 = SCREEN_SIZE;

    /// Player defaults
    pub const SQUARE_SIZE: i32 = 20;
    pub const PLAYER_SPEED: f32 = 2.0;
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_POWER: f32 = 8.0;
    pub const FRICTION: f32 = 0.8;
    /// Y of the player's top edge when standing (screen is 160 tall)
    pub const GROUND_LEVEL: i32 = 140;
    pub const MAX_VELOCITY_Y: f32 = 15.0;
    /// Where the player lands after hitting a side wall
    pub const WALL_INSET: i32 = 1;

    /// Fixed obstacle pool size
    pub const MAX_OBSTACLES: usize = 10;
    /// Vanishing point where obstacles appear
    pub const OBSTACLE_ANCHOR_X: i32 = 79;
    pub const OBSTACLE_ANCHOR_Y: i32 = 61;
    pub const OBSTACLE_BASE_SIZE: u32 = 2;
    pub const OBSTACLE_MAX_SIZE: u32 = 30;
    /// Progress gained per frame
    pub const OBSTACLE_SPEED: f32 = 0.004;
    /// Pixels travelled downward per unit of progress
    pub const OBSTACLE_VERTICAL_SPAN: f32 = 40.0;
    /// Frames between spawn attempts (2 seconds at 60fps)
    pub const OBSTACLE_SPAWN_RATE: u32 = 120;
    /// Obstacles only hurt once their bottom edge is at or below this row
    pub const FOREGROUND_THRESHOLD: i32 = 158;

    /// Frames between score increments
    pub const SCORE_INCREMENT_RATE: u32 = 50;

    /// Road border staircase
    pub const ROAD_BASE_Y: i32 = 139;
    pub const ROAD_STEPS: i32 = 80;
}
