//! Perspective depth model
//!
//! An obstacle's only free variable is its `progress`. Size and screen
//! position are derived from it so the obstacle appears to grow out of the
//! vanishing point and slide down toward the player.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Per-slot depth record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Depth {
    /// 0.0 at spawn, grows by `speed` every active frame
    pub progress: f32,
    pub speed: f32,
    pub base_size: u32,
    pub max_size: u32,
    pub active: bool,
}

/// Derived geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Top-left corner, clamped to the screen
    pub pos: IVec2,
    pub size: u32,
    /// Bottom edge has hit the bottom of the screen; the slot must retire
    pub reached_foreground: bool,
}

impl Depth {
    pub fn new(speed: f32, base_size: u32, max_size: u32) -> Self {
        Self {
            progress: 0.0,
            speed,
            base_size,
            max_size,
            active: true,
        }
    }

    /// Step progress forward by one frame
    #[inline]
    pub fn advance(&mut self) {
        self.progress += self.speed;
    }

    /// Size as a step function of progress
    pub fn size(&self) -> u32 {
        let range = self.max_size.saturating_sub(self.base_size) as f32;
        self.base_size
            .saturating_add((self.progress * range).floor() as u32)
    }

    /// Map progress to size and position relative to the spawn anchor
    pub fn project(&self, anchor: IVec2, vertical_span: f32) -> Projection {
        let size = self.size();
        let side = size.min(i32::MAX as u32) as i32;

        // Grow around the anchor's column
        let mut x = anchor.x - side / 2;
        if x < 0 {
            x = 0;
        }
        if x.saturating_add(side) > SCREEN_WIDTH {
            x = SCREEN_WIDTH - side;
        }

        // Descend while growing
        let raw_y = anchor
            .y
            .saturating_add((self.progress * vertical_span).floor() as i32);
        let reached_foreground = raw_y.saturating_add(side) >= SCREEN_HEIGHT;
        let y = raw_y.min(SCREEN_HEIGHT - side).max(0);

        Projection {
            pos: IVec2::new(x, y),
            size,
            reached_foreground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn anchor() -> IVec2 {
        IVec2::new(OBSTACLE_ANCHOR_X, OBSTACLE_ANCHOR_Y)
    }

    fn depth_at(progress: f32) -> Depth {
        Depth {
            progress,
            ..Depth::new(OBSTACLE_SPEED, OBSTACLE_BASE_SIZE, OBSTACLE_MAX_SIZE)
        }
    }

    #[test]
    fn test_spawn_projection() {
        let p = depth_at(0.0).project(anchor(), OBSTACLE_VERTICAL_SPAN);
        assert_eq!(p.size, 2);
        assert_eq!(p.pos, IVec2::new(78, 61));
        assert!(!p.reached_foreground);
    }

    #[test]
    fn test_halfway_projection() {
        // 0.5 * 28 = 14 -> size 16; 0.5 * 40 = 20 -> y 81
        let p = depth_at(0.5).project(anchor(), OBSTACLE_VERTICAL_SPAN);
        assert_eq!(p.size, 16);
        assert_eq!(p.pos, IVec2::new(71, 81));
    }

    #[test]
    fn test_foreground_is_terminal() {
        // y + size = 63 + floor(28p) + floor(40p) >= 160 around p = 1.43
        let near = depth_at(1.40).project(anchor(), OBSTACLE_VERTICAL_SPAN);
        assert!(!near.reached_foreground);

        let far = depth_at(1.45).project(anchor(), OBSTACLE_VERTICAL_SPAN);
        assert!(far.reached_foreground);
        assert_eq!(far.pos.y + far.size as i32, SCREEN_HEIGHT);
    }

    #[test]
    fn test_horizontal_clamp() {
        let p = depth_at(0.5).project(IVec2::new(2, 10), 0.0);
        assert_eq!(p.pos.x, 0);
        let p = depth_at(0.5).project(IVec2::new(158, 10), 0.0);
        assert_eq!(p.pos.x, SCREEN_WIDTH - p.size as i32);
    }

    #[test]
    fn test_runaway_progress_saturates() {
        let depth = Depth {
            progress: 1e30,
            ..depth_at(0.0)
        };
        assert_eq!(depth.size(), u32::MAX);
        let projection = depth.project(anchor(), 1e30);
        assert!(projection.reached_foreground);
    }

    #[test]
    fn test_advance_does_not_touch_active_flag() {
        let mut d = depth_at(0.0);
        d.advance();
        assert!(d.active);
        assert!((d.progress - OBSTACLE_SPEED).abs() < f32::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_size_non_decreasing(a in 0.0f32..2.0, b in 0.0f32..2.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(depth_at(lo).size() <= depth_at(hi).size());
        }

        #[test]
        fn prop_projection_stays_on_screen(progress in 0.0f32..1.6) {
            let p = depth_at(progress).project(anchor(), OBSTACLE_VERTICAL_SPAN);
            prop_assert!(p.pos.x >= 0);
            prop_assert!(p.pos.x + p.size as i32 <= SCREEN_WIDTH);
            prop_assert!(p.pos.y + p.size as i32 <= SCREEN_HEIGHT);
        }
    }
}
