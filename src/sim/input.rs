//! Input snapshot consumed by the simulation
//!
//! External collaborators (keyboard/touch handlers) translate device events
//! into held action state; the sim samples that state once per step and never
//! reads ambient input.

use serde::{Deserialize, Serialize};

/// The fixed set of logical actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    AimUp,
    AimDown,
    Jump,
    Fire,
    PauseToggle,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::AimUp,
        Action::AimDown,
        Action::Jump,
        Action::Fire,
        Action::PauseToggle,
    ];

    /// Map a keyboard event code to an action. Unknown codes are a no-op.
    pub fn from_key(code: &str) -> Option<Action> {
        match code {
            "ArrowLeft" => Some(Action::MoveLeft),
            "ArrowRight" => Some(Action::MoveRight),
            "ArrowUp" => Some(Action::AimUp),
            "ArrowDown" => Some(Action::AimDown),
            "Space" => Some(Action::Jump),
            "KeyF" => Some(Action::Fire),
            "KeyP" => Some(Action::PauseToggle),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::AimUp => 2,
            Action::AimDown => 3,
            Action::Jump => 4,
            Action::Fire => 5,
            Action::PauseToggle => 6,
        }
    }
}

/// Held state per action, last-writer-wins
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; 7],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
    }

    /// Route a raw key event; unknown codes are ignored
    pub fn set_key(&mut self, code: &str, pressed: bool) {
        if let Some(action) = Action::from_key(code) {
            self.held[action.index()] = pressed;
        }
    }

    #[inline]
    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn clear(&mut self) {
        self.held = [false; 7];
    }
}
