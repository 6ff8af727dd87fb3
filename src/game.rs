//! Host-facing cart
//!
//! The host calls [`Game::on_start`] once and [`Game::on_update`] once per
//! display refresh. Nothing else crosses the boundary.

use crate::platform::Host;
use crate::render::draw_frame;
use crate::sim::{FrameEvents, World, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    pub tuning: Tuning,
    /// Frames since start, for log context only
    frame: u64,
}

impl Game {
    /// Initialise every entity to its default, on the title menu
    pub fn on_start(tuning: Tuning) -> Self {
        log::info!("depth-runner starting");
        Self {
            world: World::new(&tuning),
            tuning,
            frame: 0,
        }
    }

    /// Run exactly one frame: read the gamepad, simulate, draw
    ///
    /// The screen drawn is the one for the phase the frame started in.
    pub fn on_update(&mut self, host: &mut impl Host) -> FrameEvents {
        let shown = self.world.phase;
        let gamepad = host.gamepad();
        let events = tick(&mut self.world, &self.tuning, gamepad);
        self.frame += 1;

        if let Some(hit) = events.hit {
            log::info!(
                "frame {}: collision with obstacle {}, run reset",
                self.frame,
                hit.index()
            );
        }
        if events.retired > 0 {
            log::trace!("frame {}: {} obstacle(s) retired", self.frame, events.retired);
        }

        draw_frame(&self.world, shown, host);
        events
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::on_start(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::input::Buttons;
    use crate::platform::{DrawCall, Headless};
    use crate::sim::GamePhase;
    use glam::IVec2;

    fn has_text(host: &Headless, wanted: &str) -> bool {
        host.calls()
            .iter()
            .any(|c| matches!(c, DrawCall::Text { text, .. } if text == wanted))
    }

    fn press(game: &mut Game, host: &mut Headless, buttons: Buttons) -> FrameEvents {
        host.clear_calls();
        host.set_gamepad(buttons);
        let events = game.on_update(host);
        host.set_gamepad(Buttons::empty());
        events
    }

    #[test]
    fn test_start_then_confirm() {
        let mut game = Game::default();
        let mut host = Headless::new();
        assert_eq!(game.world.phase, GamePhase::Menu);

        press(&mut game, &mut host, Buttons::BUTTON_1);

        assert_eq!(game.world.phase, GamePhase::Playing);
        assert_eq!(game.world.score.value, 0);
        assert_eq!(
            game.world.player.pos,
            IVec2::new(SCREEN_WIDTH / 2 - SQUARE_SIZE / 2, GROUND_LEVEL)
        );
        // The confirming frame still shows the title menu
        assert!(host.calls().iter().all(|c| matches!(c, DrawCall::Text { .. })));

        press(&mut game, &mut host, Buttons::empty());
        assert!(host.calls().contains(&DrawCall::Rect {
            x: 70,
            y: 140,
            width: 20,
            height: 20,
            colors: crate::render::DrawColors::PLAYER,
        }));
    }

    #[test]
    fn test_pause_and_resume_frames_show_the_old_screen() {
        let mut game = Game::default();
        let mut host = Headless::new();
        press(&mut game, &mut host, Buttons::BUTTON_1);
        press(&mut game, &mut host, Buttons::empty());

        // Pausing frame: still the playfield, no pause menu yet
        press(&mut game, &mut host, Buttons::BUTTON_2);
        assert_eq!(game.world.phase, GamePhase::Paused);
        assert!(host.calls().iter().any(|c| matches!(c, DrawCall::Rect { .. })));
        assert!(!has_text(&host, "PAUSED"));

        press(&mut game, &mut host, Buttons::empty());
        assert!(has_text(&host, "PAUSED"));

        // Resuming frame: still the pause menu
        press(&mut game, &mut host, Buttons::BUTTON_1);
        assert_eq!(game.world.phase, GamePhase::Playing);
        assert!(has_text(&host, "PAUSED"));

        press(&mut game, &mut host, Buttons::empty());
        assert!(!has_text(&host, "PAUSED"));
    }

    #[test]
    fn test_one_frame_per_update() {
        let mut game = Game::default();
        let mut host = Headless::new();
        press(&mut game, &mut host, Buttons::BUTTON_1);
        for _ in 0..SCORE_INCREMENT_RATE {
            press(&mut game, &mut host, Buttons::empty());
        }
        assert_eq!(game.frame(), 1 + SCORE_INCREMENT_RATE as u64);
        assert_eq!(game.world.score.value, 1);
    }

    #[test]
    fn test_walking_right_stops_at_wall() {
        let mut game = Game::default();
        let mut host = Headless::new();
        press(&mut game, &mut host, Buttons::BUTTON_1);

        host.set_gamepad(Buttons::RIGHT);
        for _ in 0..100 {
            game.on_update(&mut host);
        }
        // Pushing into the wall settles one inset away from it
        assert!(game.world.player.pos.x >= SCREEN_WIDTH - SQUARE_SIZE - WALL_INSET);
        assert!(game.world.player.pos.x <= SCREEN_WIDTH - SQUARE_SIZE);
    }
}
