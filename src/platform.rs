//! Collaborator traits for the driving loop.
//!
//! The core never talks to a windowing system directly. A [`Platform`] reports
//! quit requests, snapshots held input and displays finished frames; a
//! [`Clock`] reports elapsed time. `window.rs` implements both over SDL2.

use crate::input::InputState;
use crate::render::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

pub trait Platform {
    /// Drain pending OS events.
    fn poll_events(&mut self) -> WindowEvent;

    /// Currently held actions.
    fn input_state(&self) -> InputState;

    /// Display a complete frame.
    fn present(&mut self, frame: &Frame) -> Result<(), String>;
}

pub trait Clock {
    /// Seconds since the previous call. Never negative.
    fn delta_seconds(&mut self) -> f32;
}
