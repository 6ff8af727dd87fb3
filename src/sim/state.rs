//! World state
//!
//! Everything the cart mutates lives in one `World`, owned by the caller and
//! passed to each system explicitly.

use serde::{Deserialize, Serialize};

use super::flow::{FlowEffect, GamePhase, MenuOption, Transition};
use super::physics::Player;
use super::pool::ObstaclePool;
use crate::input::Buttons;
use crate::tuning::{ScoreTuning, Tuning};

/// Survival score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub value: u32,
    /// Frames counted toward the next point
    pub timer: u32,
}

impl Score {
    /// Count one survived frame; returns true when a point was awarded
    pub fn tick(&mut self, tuning: &ScoreTuning) -> bool {
        self.timer += 1;
        if self.timer < tuning.interval {
            return false;
        }
        self.value = self.value.saturating_add(1);
        self.timer = 0;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete cart state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: Player,
    pub obstacles: ObstaclePool,
    pub score: Score,
    pub phase: GamePhase,
    pub cursor: MenuOption,
    /// Gamepad as seen last frame, for press edges
    pub previous_input: Buttons,
}

impl World {
    /// Start-up state: title menu, everything at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: Player::new(&tuning.player),
            obstacles: ObstaclePool::new(),
            score: Score::default(),
            phase: GamePhase::Menu,
            cursor: MenuOption::Start,
            previous_input: Buttons::empty(),
        }
    }

    /// Put player, obstacles and score back to their defaults. Phase is untouched.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.player.respawn(&tuning.player);
        self.obstacles.clear();
        self.score.reset();
    }

    /// Apply a flow transition and its effect
    pub fn apply(&mut self, transition: Transition, tuning: &Tuning) {
        match transition.effect {
            FlowEffect::None => {}
            FlowEffect::ResetScore => self.score.reset(),
            FlowEffect::Restart => self.reset(tuning),
        }
        if transition.phase != self.phase {
            log::info!("phase {:?} -> {:?}", self.phase, transition.phase);
        }
        self.phase = transition.phase;
        self.cursor = transition.cursor;
    }
}
