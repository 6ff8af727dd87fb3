//! Fixed-capacity obstacle arena
//!
//! Slots are claimed lowest-index-first so spawn placement is deterministic.
//! A released slot is zeroed; nothing is ever allocated after start-up.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::depth::Depth;
use crate::consts::MAX_OBSTACLES;
use crate::render::DrawColors;
use crate::tuning::ObstacleTuning;

/// Index of a claimed slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotHandle(usize);

impl SlotHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An obstacle approaching from the vanishing point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: IVec2,
    pub size: u32,
    pub colors: DrawColors,
    pub depth: Depth,
}

impl Obstacle {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.depth.active
    }

    /// Screen-space box for collision
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size as i32)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObstaclePool {
    slots: [Obstacle; MAX_OBSTACLES],
    /// Frames since the last spawn attempt or timer reset
    spawn_timer: u32,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the first free slot, if any
    pub fn acquire(&mut self) -> Option<SlotHandle> {
        let index = self.slots.iter().position(|slot| !slot.is_active())?;
        self.slots[index].depth.active = true;
        Some(SlotHandle(index))
    }

    /// Return a slot to the free list with every field zeroed
    pub fn release(&mut self, handle: SlotHandle) {
        self.slots[handle.0] = Obstacle::default();
    }

    /// Place a fresh obstacle at the vanishing point; silently does nothing when full
    pub fn spawn(&mut self, tuning: &ObstacleTuning) -> Option<SlotHandle> {
        let Some(handle) = self.acquire() else {
            log::trace!("obstacle pool full, spawn skipped");
            return None;
        };
        self.slots[handle.0] = Obstacle {
            pos: tuning.anchor,
            size: tuning.base_size,
            colors: tuning.colors,
            depth: Depth::new(tuning.speed, tuning.base_size, tuning.max_size),
        };
        log::debug!("spawned obstacle in slot {}", handle.0);
        Some(handle)
    }

    /// Count one frame toward the next spawn; attempts exactly one spawn on expiry
    pub fn tick_spawn_timer(&mut self, tuning: &ObstacleTuning) -> Option<SlotHandle> {
        self.spawn_timer += 1;
        if self.spawn_timer < tuning.spawn_interval {
            return None;
        }
        let spawned = self.spawn(tuning);
        self.spawn_timer = 0;
        spawned
    }

    /// Move every active obstacle one step closer, retiring those that reached
    /// the foreground. Returns how many retired.
    pub fn advance_all(&mut self, tuning: &ObstacleTuning) -> u32 {
        let mut retired = 0;

        for index in 0..MAX_OBSTACLES {
            let slot = &mut self.slots[index];
            if !slot.is_active() {
                continue;
            }
            slot.depth.advance();
            let projection = slot.depth.project(tuning.anchor, tuning.vertical_span);

            if projection.reached_foreground {
                self.release(SlotHandle(index));
                if tuning.retire_resets_spawn_timer {
                    self.spawn_timer = 0;
                }
                retired += 1;
                log::debug!("obstacle in slot {index} retired");
                continue;
            }

            slot.pos = projection.pos;
            slot.size = projection.size;
        }

        retired
    }

    /// Deactivate everything and restart the spawn countdown
    pub fn clear(&mut self) {
        self.slots = Default::default();
        self.spawn_timer = 0;
    }

    pub fn get(&self, handle: SlotHandle) -> &Obstacle {
        &self.slots[handle.0]
    }

    pub fn get_mut(&mut self, handle: SlotHandle) -> &mut Obstacle {
        &mut self.slots[handle.0]
    }

    /// Active obstacles, highest index first (draw and hit-test order)
    pub fn iter_active_rev(&self) -> impl Iterator<Item = (SlotHandle, &Obstacle)> {
        self.slots
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, slot)| slot.is_active())
            .map(|(index, slot)| (SlotHandle(index), slot))
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }
}
