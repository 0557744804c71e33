//! Input capability.
//!
//! Movement only needs to ask "is this action held right now?", so input is
//! modelled as the [`InputSource`] trait. The SDL window produces an
//! [`InputState`] snapshot each tick; tests construct one directly.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
    /// Run modifier. Selects the running FOV; does not change speed.
    Run,
}

pub trait InputSource {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Snapshot of held actions for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub run: bool,
}

impl InputState {
    /// Snapshot with only the given actions held.
    pub fn with(actions: &[Action]) -> Self {
        let mut state = Self::default();
        for action in actions {
            state.set(*action, true);
        }
        state
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::TurnLeft => self.turn_left = pressed,
            Action::TurnRight => self.turn_right = pressed,
            Action::MoveForward => self.forward = pressed,
            Action::MoveBackward => self.backward = pressed,
            Action::Run => self.run = pressed,
        }
    }
}

impl InputSource for InputState {
    #[inline]
    fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::TurnLeft => self.turn_left,
            Action::TurnRight => self.turn_right,
            Action::MoveForward => self.forward,
            Action::MoveBackward => self.backward,
            Action::Run => self.run,
        }
    }
}
