//! Frame composition
//!
//! The cart draws through a [`Canvas`], never through ambient draw state:
//! every primitive carries the palette selection it should use.

use core::fmt::Write;

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};

use crate::consts::{ROAD_BASE_Y, ROAD_STEPS, SCREEN_WIDTH};
use crate::sim::{GamePhase, MenuOption, World};

/// Palette selection for one draw call, packed like the console's
/// `DRAW_COLORS` register (one nibble per source color, 0 = transparent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawColors(pub u16);

impl DrawColors {
    /// Fill 3, outline 4
    pub const PLAYER: Self = Self(0x43);
    /// Fill 2, outline 3
    pub const OBSTACLE: Self = Self(0x32);
    pub const ROAD: Self = Self(0x43);
    pub const HUD: Self = Self(0x4);
    pub const TITLE: Self = Self(0x4);
    pub const MENU: Self = Self(0x3);
    pub const MENU_SELECTED: Self = Self(0x4);
}

/// Immediate-mode drawing surface
pub trait Canvas {
    fn rect(&mut self, x: i32, y: i32, width: u32, height: u32, colors: DrawColors);
    fn text(&mut self, text: &str, x: i32, y: i32, colors: DrawColors);
}

/// Draw the screen for `phase`
///
/// The cart passes the phase the frame started in, so a frame that leaves a
/// menu still shows that menu and the new phase appears on the next frame.
pub fn draw_frame(world: &World, phase: GamePhase, canvas: &mut impl Canvas) {
    match phase {
        GamePhase::Menu => draw_menu(canvas),
        GamePhase::Playing => draw_playfield(world, canvas),
        GamePhase::Paused => draw_pause_menu(world, canvas),
    }
}

fn draw_playfield(world: &World, canvas: &mut impl Canvas) {
    draw_score(world.score.value, canvas);
    draw_road(canvas);

    // Far slots first so near ones land on top
    for (_, obstacle) in world.obstacles.iter_active_rev() {
        canvas.rect(
            obstacle.pos.x,
            obstacle.pos.y,
            obstacle.size,
            obstacle.size,
            obstacle.colors,
        );
    }

    let player = &world.player;
    let side = player.size as u32;
    canvas.rect(player.pos.x, player.pos.y, side, side, player.colors);
}

/// Road edges: two staircases narrowing toward the horizon
fn draw_road(canvas: &mut impl Canvas) {
    for step in 0..ROAD_STEPS {
        let y = ROAD_BASE_Y - step;
        let width = (step + 1) as u32;
        canvas.rect(SCREEN_WIDTH - 1 - step, y, width, 1, DrawColors::ROAD);
        canvas.rect(0, y, width, 1, DrawColors::ROAD);
    }
}

/// Enough for `u32::MAX`
type ScoreText = ArrayString<10>;

fn draw_score(score: u32, canvas: &mut impl Canvas) {
    canvas.text("Score:", 0, 0, DrawColors::HUD);
    let mut digits = ScoreText::new();
    // Cannot overflow: ten digits always fit
    let _ = write!(digits, "{score}");
    canvas.text(&digits, 48, 0, DrawColors::HUD);
}

fn draw_menu(canvas: &mut impl Canvas) {
    canvas.text("DEPTH RUNNER", 32, 40, DrawColors::TITLE);
    canvas.text("X to start", 40, 70, DrawColors::TITLE);

    canvas.text("Controls:", 40, 90, DrawColors::TITLE);
    canvas.text("Move \u{84} and \u{85}", 32, 100, DrawColors::TITLE);
    canvas.text("\u{86} to jump", 32, 110, DrawColors::TITLE);
    canvas.text("Z to pause", 32, 120, DrawColors::TITLE);
}

fn draw_pause_menu(world: &World, canvas: &mut impl Canvas) {
    draw_score(world.score.value, canvas);

    canvas.text("PAUSED", 56, 50, DrawColors::MENU);
    canvas.text("\u{86}\u{87} to navigate", 16, 100, DrawColors::MENU);
    canvas.text("X to select", 16, 110, DrawColors::MENU);

    for (row, option) in MenuOption::PAUSE_ENTRIES.iter().enumerate() {
        let y = 70 + 10 * row as i32;
        let colors = if *option == world.cursor {
            canvas.text(">", 40, y, DrawColors::MENU);
            DrawColors::MENU_SELECTED
        } else {
            DrawColors::MENU
        };
        let label = match option {
            MenuOption::Resume => "Resume",
            MenuOption::Restart => "Restart",
            MenuOption::Start => "Start",
        };
        canvas.text(label, 50, y, colors);
    }
}
