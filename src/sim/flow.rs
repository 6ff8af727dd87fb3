//! Menu / play / pause flow
//!
//! Every transition is a row in [`transition`]; callers feed it press edges
//! and apply the returned effect.

use serde::{Deserialize, Serialize};

use crate::input::{Buttons, InputFrame};

/// Current phase of the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen
    #[default]
    Menu,
    Playing,
    Paused,
}

/// Highlighted menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuOption {
    #[default]
    Start,
    Resume,
    Restart,
}

impl MenuOption {
    /// Entries the pause screen offers, top to bottom
    pub const PAUSE_ENTRIES: [MenuOption; 2] = [MenuOption::Resume, MenuOption::Restart];

    /// Cyclic successor within the pause entries
    fn next_paused(self) -> Self {
        match self {
            MenuOption::Resume => MenuOption::Restart,
            _ => MenuOption::Resume,
        }
    }

    /// Cyclic predecessor within the pause entries
    fn prev_paused(self) -> Self {
        match self {
            MenuOption::Restart => MenuOption::Resume,
            _ => MenuOption::Restart,
        }
    }
}

/// Press-edge events the flow reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    Up,
    Down,
    Confirm,
    Pause,
}

/// Side effect a transition asks the world to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    None,
    /// Zero the score only
    ResetScore,
    /// Reset player, obstacles and score
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub phase: GamePhase,
    pub cursor: MenuOption,
    pub effect: FlowEffect,
}

impl Transition {
    fn to(phase: GamePhase, cursor: MenuOption) -> Self {
        Self {
            phase,
            cursor,
            effect: FlowEffect::None,
        }
    }

    fn with(mut self, effect: FlowEffect) -> Self {
        self.effect = effect;
        self
    }
}

/// Transition table. `None` means the event is ignored in this phase.
pub fn transition(phase: GamePhase, cursor: MenuOption, event: FlowEvent) -> Option<Transition> {
    use FlowEvent::*;
    use GamePhase::*;

    match (phase, event, cursor) {
        // Single-option title menu
        (Menu, Down, _) => Some(Transition::to(Menu, MenuOption::Start)),
        (Menu, Confirm, MenuOption::Start) => {
            Some(Transition::to(Playing, cursor).with(FlowEffect::ResetScore))
        }

        (Playing, Pause, _) => Some(Transition::to(Paused, MenuOption::Resume)),

        (Paused, Down, _) => Some(Transition::to(Paused, cursor.next_paused())),
        (Paused, Up, _) => Some(Transition::to(Paused, cursor.prev_paused())),
        (Paused, Confirm, MenuOption::Resume) => Some(Transition::to(Playing, cursor)),
        (Paused, Confirm, MenuOption::Restart) => {
            Some(Transition::to(Playing, cursor).with(FlowEffect::Restart))
        }

        _ => None,
    }
}

/// Press edges for the menu screens, in the order they are handled:
/// navigation (down before up) then confirm
pub fn menu_events(input: &InputFrame) -> impl Iterator<Item = FlowEvent> {
    let navigation = if input.just_pressed(Buttons::DOWN) {
        Some(FlowEvent::Down)
    } else if input.just_pressed(Buttons::UP) {
        Some(FlowEvent::Up)
    } else {
        None
    };
    let confirm = input
        .just_pressed(Buttons::BUTTON_1)
        .then_some(FlowEvent::Confirm);
    navigation.into_iter().chain(confirm)
}
