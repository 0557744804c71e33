//! Player movement with coarse grid collision.
//!
//! Each translation step is tested against the cell its destination falls in.
//! A step into a wall (or off the map) is dropped whole: no sliding along the
//! wall, no partial advance.

use std::f32::consts::TAU;

use crate::error::ConfigError;
use crate::input::{Action, InputSource};
use crate::map::Grid;
use crate::math::vec2::Vec2;
use crate::player::Pose;

/// Movement tuning and the per-tick update.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementController {
    /// Linear speed in grid units per second.
    pub move_speed: f32,
    /// Turn rate in radians per second.
    pub turn_speed: f32,
}

impl Default for MovementController {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            turn_speed: 1.5,
        }
    }
}

impl MovementController {
    pub fn new(move_speed: f32, turn_speed: f32) -> Self {
        Self {
            move_speed,
            turn_speed,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.move_speed.is_finite() && self.move_speed >= 0.0) {
            return Err(ConfigError::MoveSpeed(self.move_speed));
        }
        if !(self.turn_speed.is_finite() && self.turn_speed >= 0.0) {
            return Err(ConfigError::TurnSpeed(self.turn_speed));
        }
        Ok(())
    }

    /// Advance `pose` by `delta_time` seconds of held input.
    ///
    /// # Input Mapping
    /// - TurnLeft/TurnRight: angle -/+ `turn_speed * dt`
    /// - MoveForward/MoveBackward: step along +/- facing, each checked on its own
    /// - Run: ignored here (only affects the FOV preset)
    pub fn update<I: InputSource + ?Sized>(
        &self,
        pose: Pose,
        input: &I,
        delta_time: f32,
        grid: &Grid,
    ) -> Pose {
        let dt = sanitize_delta(delta_time);
        let mut next = pose;

        let turn_amount = self.turn_speed * dt;
        if input.is_pressed(Action::TurnLeft) {
            next.angle -= turn_amount;
        }
        if input.is_pressed(Action::TurnRight) {
            next.angle += turn_amount;
        }
        next.angle = next.angle.rem_euclid(TAU);

        let step = next.forward() * (self.move_speed * dt);
        if input.is_pressed(Action::MoveForward) {
            next.position = try_step(grid, next.position, step);
        }
        if input.is_pressed(Action::MoveBackward) {
            next.position = try_step(grid, next.position, -step);
        }

        next
    }
}

/// Move `from` by `step` unless the destination cell is solid.
fn try_step(grid: &Grid, from: Vec2, step: Vec2) -> Vec2 {
    let candidate = from + step;
    if !candidate.is_finite() {
        return from;
    }

    let (col, row) = candidate.cell();
    if grid.is_wall(col, row) {
        tracing::trace!(col, row, "move blocked");
        from
    } else {
        candidate
    }
}

fn sanitize_delta(delta_time: f32) -> f32 {
    if delta_time.is_finite() && delta_time > 0.0 {
        delta_time
    } else {
        0.0
    }
}
