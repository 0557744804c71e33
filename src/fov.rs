//! Field-of-view presets.
//!
//! The FOV is not part of the pose: it is picked fresh every tick from a small
//! fixed set, based on whether the run modifier is held.

use std::f32::consts::PI;

use crate::input::{Action, InputSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FovPreset {
    /// 45 degrees.
    #[default]
    Normal,
    /// 60 degrees, used while the run modifier is held.
    Run,
    /// 90 degrees.
    Wide,
}

impl std::fmt::Display for FovPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FovPreset::Normal => write!(f, "Normal"),
            FovPreset::Run => write!(f, "Run"),
            FovPreset::Wide => write!(f, "Wide"),
        }
    }
}

/// Full FOV angles (radians) for each preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovPresets {
    pub normal: f32,
    pub run: f32,
    pub wide: f32,
}

impl Default for FovPresets {
    fn default() -> Self {
        Self {
            normal: PI / 4.0,
            run: PI / 3.0,
            wide: PI / 2.0,
        }
    }
}

impl FovPresets {
    pub fn angle(&self, preset: FovPreset) -> f32 {
        match preset {
            FovPreset::Normal => self.normal,
            FovPreset::Run => self.run,
            FovPreset::Wide => self.wide,
        }
    }

    /// Preset for this tick: `Run` while the run modifier is held, otherwise
    /// the caller's resting preset.
    pub fn select<I: InputSource + ?Sized>(input: &I, resting: FovPreset) -> FovPreset {
        if input.is_pressed(Action::Run) {
            FovPreset::Run
        } else {
            resting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use approx::assert_relative_eq;

    #[test]
    fn default_angles() {
        let presets = FovPresets::default();
        assert_relative_eq!(presets.angle(FovPreset::Normal), 45f32.to_radians(), epsilon = 1e-6);
        assert_relative_eq!(presets.angle(FovPreset::Run), 60f32.to_radians(), epsilon = 1e-6);
        assert_relative_eq!(presets.angle(FovPreset::Wide), 90f32.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn presets_display_by_name() {
        assert_eq!(FovPreset::Normal.to_string(), "Normal");
        assert_eq!(FovPreset::Run.to_string(), "Run");
        assert_eq!(FovPreset::Wide.to_string(), "Wide");
    }

    #[test]
    fn run_modifier_selects_run_preset() {
        let running = InputState::with(&[Action::Run]);
        let idle = InputState::default();
        assert_eq!(FovPresets::select(&running, FovPreset::Normal), FovPreset::Run);
        assert_eq!(FovPresets::select(&running, FovPreset::Wide), FovPreset::Run);
        assert_eq!(FovPresets::select(&idle, FovPreset::Normal), FovPreset::Normal);
        assert_eq!(FovPresets::select(&idle, FovPreset::Wide), FovPreset::Wide);
    }
}
