//! Data-driven game balance
//!
//! Defaults reproduce the shipped cart. A JSON document may override any
//! subset of fields; missing fields fall back to the defaults.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::render::DrawColors;

/// Rejected tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Player movement constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub size: i32,
    /// Horizontal speed while a direction is held (px/frame)
    pub speed: f32,
    pub gravity: f32,
    pub jump_power: f32,
    /// Per-frame horizontal decay, in (0, 1)
    pub friction: f32,
    pub max_fall_speed: f32,
    pub ground_level: i32,
    pub wall_inset: i32,
    pub colors: DrawColors,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: SQUARE_SIZE,
            speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            friction: FRICTION,
            max_fall_speed: MAX_VELOCITY_Y,
            ground_level: GROUND_LEVEL,
            wall_inset: WALL_INSET,
            colors: DrawColors::PLAYER,
        }
    }
}

impl PlayerTuning {
    /// Standing position, centered horizontally on the ground
    pub fn spawn_position(&self) -> IVec2 {
        IVec2::new(SCREEN_WIDTH / 2 - self.size / 2, self.ground_level)
    }
}

/// Obstacle lifecycle and depth constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    pub anchor: IVec2,
    pub base_size: u32,
    pub max_size: u32,
    pub speed: f32,
    pub vertical_span: f32,
    pub spawn_interval: u32,
    pub foreground_threshold: i32,
    /// Retiring an obstacle restarts the spawn countdown
    pub retire_resets_spawn_timer: bool,
    pub colors: DrawColors,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            anchor: IVec2::new(OBSTACLE_ANCHOR_X, OBSTACLE_ANCHOR_Y),
            base_size: OBSTACLE_BASE_SIZE,
            max_size: OBSTACLE_MAX_SIZE,
            speed: OBSTACLE_SPEED,
            vertical_span: OBSTACLE_VERTICAL_SPAN,
            spawn_interval: OBSTACLE_SPAWN_RATE,
            foreground_threshold: FOREGROUND_THRESHOLD,
            retire_resets_spawn_timer: true,
            colors: DrawColors::OBSTACLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTuning {
    /// Frames survived per point
    pub interval: u32,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            interval: SCORE_INCREMENT_RATE,
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub obstacle: ObstacleTuning,
    pub score: ScoreTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with. Per-frame speeds stay
    /// below one screen so integer positions never overflow.
    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.player;
        let o = &self.obstacle;

        check(
            p.friction > 0.0 && p.friction < 1.0,
            "player.friction",
            "must be strictly between 0 and 1",
        )?;
        check(
            within_screen(p.speed, SCREEN_WIDTH),
            "player.speed",
            "must be positive and below the screen width",
        )?;
        check(
            within_screen(p.gravity, SCREEN_HEIGHT),
            "player.gravity",
            "must be positive and below the screen height",
        )?;
        check(
            within_screen(p.jump_power, SCREEN_HEIGHT),
            "player.jump_power",
            "must be positive and below the screen height",
        )?;
        check(
            within_screen(p.max_fall_speed, SCREEN_HEIGHT),
            "player.max_fall_speed",
            "must be positive and below the screen height",
        )?;
        check(
            (0..SCREEN_WIDTH / 2).contains(&p.wall_inset),
            "player.wall_inset",
            "must be between 0 and half the screen width",
        )?;
        check(
            p.size > 0 && p.size < SCREEN_WIDTH - 2 * p.wall_inset,
            "player.size",
            "must fit between the walls",
        )?;
        check(
            (0..=SCREEN_HEIGHT - p.size).contains(&p.ground_level),
            "player.ground_level",
            "player must stand inside the screen",
        )?;

        check(
            o.speed > 0.0 && o.speed <= 1.0,
            "obstacle.speed",
            "must be positive and at most 1",
        )?;
        check(
            o.vertical_span >= 0.0 && o.vertical_span <= SCREEN_HEIGHT as f32,
            "obstacle.vertical_span",
            "must be between 0 and the screen height",
        )?;
        check(
            o.max_size <= SCREEN_HEIGHT as u32,
            "obstacle.max_size",
            "must not exceed the screen height",
        )?;
        check(
            o.base_size <= o.max_size,
            "obstacle.base_size",
            "must not exceed max_size",
        )?;
        check(
            (0..SCREEN_WIDTH).contains(&o.anchor.x) && (0..SCREEN_HEIGHT).contains(&o.anchor.y),
            "obstacle.anchor",
            "must lie on screen",
        )?;
        check(
            o.spawn_interval >= 1,
            "obstacle.spawn_interval",
            "must be at least one frame",
        )?;
        check(
            self.score.interval >= 1,
            "score.interval",
            "must be at least one frame",
        )?;
        Ok(())
    }
}

/// Positive and strictly below `extent` pixels per frame (rejects NaN)
fn within_screen(value: f32, extent: i32) -> bool {
    value > 0.0 && value < extent as f32
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), TuningError> {
    if ok {
        Ok(())
    } else {
        Err(TuningError::Invalid { field, reason })
    }
}
