//! One frame of simulation
//!
//! Systems run in a fixed order because each consumes what the previous one
//! wrote: input, gravity, movement and bounds, obstacle hits, obstacle
//! advance/spawn, score.

use super::collision::{find_hit, resolve_bounds};
use super::flow::{FlowEvent, GamePhase, Transition, menu_events, transition};
use super::pool::SlotHandle;
use super::state::World;
use crate::input::{Buttons, InputFrame};
use crate::tuning::Tuning;

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameEvents {
    /// Last flow transition applied this frame
    pub transition: Option<Transition>,
    /// Obstacle the player ran into (the world has already been reset)
    pub hit: Option<SlotHandle>,
    pub spawned: Option<SlotHandle>,
    pub retired: u32,
    pub scored: bool,
}

/// Advance the world by one frame given this frame's gamepad state
pub fn tick(world: &mut World, tuning: &Tuning, gamepad: Buttons) -> FrameEvents {
    let input = InputFrame::new(gamepad, world.previous_input);
    let mut events = FrameEvents::default();

    match world.phase {
        GamePhase::Menu | GamePhase::Paused => {
            for event in menu_events(&input) {
                if let Some(next) = transition(world.phase, world.cursor, event) {
                    world.apply(next, tuning);
                    events.transition = Some(next);
                }
            }
        }
        GamePhase::Playing => {
            // Pausing takes effect from the next frame; this one still runs
            if input.just_pressed(Buttons::BUTTON_2) {
                if let Some(next) = transition(world.phase, world.cursor, FlowEvent::Pause) {
                    world.apply(next, tuning);
                    events.transition = Some(next);
                }
            }
            simulate(world, tuning, &input, &mut events);
        }
    }

    world.previous_input = gamepad;
    events
}

fn simulate(world: &mut World, tuning: &Tuning, input: &InputFrame, events: &mut FrameEvents) {
    world.player.apply_input(input, &tuning.player);
    world.player.apply_gravity(&tuning.player);
    resolve_bounds(&mut world.player, &tuning.player);

    events.hit = collide(world, tuning);

    events.spawned = world.obstacles.tick_spawn_timer(&tuning.obstacle);
    events.retired = world.obstacles.advance_all(&tuning.obstacle);

    events.scored = world.score.tick(&tuning.score);
}

/// Reset the run if the player touches a foreground obstacle
pub fn collide(world: &mut World, tuning: &Tuning) -> Option<SlotHandle> {
    let hit = find_hit(&world.player, &world.obstacles, &tuning.obstacle)?;
    log::debug!(
        "player hit obstacle in slot {} at score {}",
        hit.index(),
        world.score.value
    );
    world.reset(tuning);
    Some(hit)
}
