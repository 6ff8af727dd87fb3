//! Collision detection and response
//!
//! Two unrelated jobs: keeping the player inside the screen and on the
//! ground, and finding the obstacle (if any) the player ran into.

use glam::IVec2;

use super::physics::Player;
use super::pool::{ObstaclePool, SlotHandle};
use crate::consts::SCREEN_WIDTH;
use crate::tuning::{ObstacleTuning, PlayerTuning};

/// Axis-aligned box in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn square(pos: IVec2, side: i32) -> Self {
        Self {
            pos,
            size: IVec2::splat(side),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Inclusive overlap: touching edges count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }
}

/// Integrate velocity into position, then clamp against the walls and the ground
pub fn resolve_bounds(player: &mut Player, tuning: &PlayerTuning) {
    player.pos.x = player.pos.x.saturating_add(player.vel.x as i32);

    if player.pos.x < 0 {
        player.pos.x = tuning.wall_inset;
        player.vel.x = 0.0;
    } else if player.pos.x > SCREEN_WIDTH - player.size {
        player.pos.x = SCREEN_WIDTH - player.size - tuning.wall_inset;
        player.vel.x = 0.0;
    }

    player.pos.y = player.pos.y.saturating_add(player.vel.y as i32);

    if player.pos.y >= tuning.ground_level {
        player.pos.y = tuning.ground_level;
        player.vel.y = 0.0;
        player.on_ground = true;
    }
}

/// Whether `player` hits `obstacle` once the obstacle is inside the foreground band
pub fn hits(player: &Rect, obstacle: &Rect, foreground_threshold: i32) -> bool {
    obstacle.bottom() >= foreground_threshold && player.overlaps(obstacle)
}

/// First obstacle, highest slot first, that the player is touching
pub fn find_hit(
    player: &Player,
    pool: &ObstaclePool,
    tuning: &ObstacleTuning,
) -> Option<SlotHandle> {
    let player_rect = Rect::square(player.pos, player.size);
    pool.iter_active_rev()
        .find(|(_, obstacle)| hits(&player_rect, &obstacle.rect(), tuning.foreground_threshold))
        .map(|(handle, _)| handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_left_wall_clamps_to_inset() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.pos.x = 1;
        player.vel.x = -2.0;
        resolve_bounds(&mut player, &tuning);
        assert_eq!(player.pos.x, WALL_INSET);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_right_wall_clamps_inside() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.pos.x = SCREEN_WIDTH - SQUARE_SIZE;
        player.vel.x = 2.0;
        resolve_bounds(&mut player, &tuning);
        assert_eq!(player.pos.x, SCREEN_WIDTH - SQUARE_SIZE - WALL_INSET);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_huge_velocity_clamps_instead_of_overflowing() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.vel = Vec2::new(1e12, 1e12);
        for _ in 0..3 {
            resolve_bounds(&mut player, &tuning);
            player.vel = Vec2::new(1e12, 1e12);
        }
        assert_eq!(player.pos.x, SCREEN_WIDTH - SQUARE_SIZE - WALL_INSET);
        assert_eq!(player.pos.y, GROUND_LEVEL);

        player.vel = Vec2::new(-1e12, -1e12);
        resolve_bounds(&mut player, &tuning);
        assert_eq!(player.pos.x, WALL_INSET);
        assert!(player.pos.y < 0);
    }

    #[test]
    fn test_landing_sets_ground_state() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.pos.y = 130;
        player.vel.y = 12.0;
        player.on_ground = false;
        resolve_bounds(&mut player, &tuning);
        assert_eq!(player.pos.y, GROUND_LEVEL);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_fractional_velocity_truncates() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(&tuning);
        player.vel.x = 0.9;
        resolve_bounds(&mut player, &tuning);
        assert_eq!(player.pos.x, 70);
        // Remaining velocity is untouched by the integrator
        assert_eq!(player.vel.x, 0.9);
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::square(IVec2::new(0, 0), 10);
        let b = Rect::square(IVec2::new(10, 10), 10);
        assert!(a.overlaps(&b));
        let c = Rect::square(IVec2::new(11, 0), 10);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_hit_requires_foreground() {
        let player = Rect::square(IVec2::new(70, 140), 20);
        let far = Rect::square(IVec2::new(70, 130), 20);
        assert!(!hits(&player, &far, FOREGROUND_THRESHOLD));
        let near = Rect::square(IVec2::new(70, 138), 20);
        assert!(hits(&player, &near, FOREGROUND_THRESHOLD));
    }

    #[test]
    fn test_find_hit_prefers_highest_slot() {
        let tuning = ObstacleTuning::default();
        let player = Player::new(&PlayerTuning::default());
        let mut pool = ObstaclePool::new();
        for _ in 0..3 {
            let handle = pool.spawn(&tuning).unwrap();
            let obstacle = pool.get_mut(handle);
            obstacle.pos = IVec2::new(70, 130);
            obstacle.size = 30;
        }
        assert_eq!(find_hit(&player, &pool, &tuning).map(|h| h.index()), Some(2));
    }

    #[test]
    fn test_find_hit_ignores_distant_obstacles() {
        let tuning = ObstacleTuning::default();
        let player = Player::new(&PlayerTuning::default());
        let mut pool = ObstaclePool::new();
        pool.spawn(&tuning);
        assert!(find_hit(&player, &pool, &tuning).is_none());
    }

    proptest! {
        #[test]
        fn prop_identical_rects_hit_in_foreground(x in 0i32..140, side in 1i32..20) {
            let y = FOREGROUND_THRESHOLD - side;
            let rect = Rect::square(IVec2::new(x, y), side);
            prop_assert!(hits(&rect, &rect, FOREGROUND_THRESHOLD));
        }

        #[test]
        fn prop_separated_rects_never_hit(
            x in 0i32..140,
            y in 100i32..140,
            side in 1i32..20,
            gap in 1i32..40,
            horizontal in any::<bool>(),
        ) {
            let a = Rect::square(IVec2::new(x, y), side);
            let offset = if horizontal {
                IVec2::new(side + gap, 0)
            } else {
                IVec2::new(0, side + gap)
            };
            let b = Rect::square(a.pos + offset, side);
            prop_assert!(!hits(&a, &b, 0));
            prop_assert!(!hits(&b, &a, 0));
        }
    }
}
