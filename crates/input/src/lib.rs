//! Keyboard input mapped to logical avatar actions.
//!
//! The host's key event handler is the only writer; the per-frame simulation
//! step is the only reader. Each flag is a plain last-writer-wins boolean, so
//! the single-threaded frame model needs no further synchronisation.

use std::collections::HashSet;

pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;

/// The closed set of logical actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Sprint,
    Dance,
    Jump,
}

/// Current held state of every logical action.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event. Key codes outside the action map are ignored.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        let Some(action) = map_key(key) else {
            return;
        };
        self.set_action(action, state.is_pressed());
    }

    /// Directly set an action flag. Used by hosts that do their own key
    /// mapping, and by tests.
    pub fn set_action(&mut self, action: Action, pressed: bool) {
        if pressed {
            self.held.insert(action);
        } else {
            self.held.remove(&action);
        }
    }

    /// Check if an action is currently held.
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Check if the forward key is held (W / Up).
    pub fn forward_held(&self) -> bool {
        self.is_held(Action::Forward)
    }

    /// Check if the backward key is held (S / Down).
    pub fn backward_held(&self) -> bool {
        self.is_held(Action::Backward)
    }

    /// Check if turn-left is held (A / Left).
    pub fn turn_left_held(&self) -> bool {
        self.is_held(Action::TurnLeft)
    }

    /// Check if turn-right is held (D / Right).
    pub fn turn_right_held(&self) -> bool {
        self.is_held(Action::TurnRight)
    }

    /// Check if the sprint modifier is held (Shift).
    pub fn sprint_held(&self) -> bool {
        self.is_held(Action::Sprint)
    }

    /// Check if the dance trigger is held (B).
    pub fn dance_held(&self) -> bool {
        self.is_held(Action::Dance)
    }

    /// Check if jump is held (Space).
    pub fn jump_held(&self) -> bool {
        self.is_held(Action::Jump)
    }
}

/// Map a physical key code onto a logical action.
fn map_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Action::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Action::Backward),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Action::TurnLeft),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Action::TurnRight),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Action::Sprint),
        KeyCode::KeyB => Some(Action::Dance),
        KeyCode::Space => Some(Action::Jump),
        _ => None,
    }
}
