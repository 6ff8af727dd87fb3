//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per frame, no wall clock
//! - Fixed-capacity storage, no allocation after start-up
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod depth;
pub mod flow;
pub mod physics;
pub mod pool;
pub mod state;
pub mod tick;

pub use collision::{Rect, find_hit, hits, resolve_bounds};
pub use depth::{Depth, Projection};
pub use flow::{FlowEffect, FlowEvent, GamePhase, MenuOption, Transition, transition};
pub use physics::Player;
pub use pool::{Obstacle, ObstaclePool, SlotHandle};
pub use state::{Score, World};
pub use tick::{FrameEvents, collide, tick};
