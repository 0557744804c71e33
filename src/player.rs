//! Player pose.
//!
//! Angles are radians with 0 along +X (increasing column) and positive
//! rotation toward +Y (increasing row). On screen that reads as clockwise, so
//! turning left decreases the angle and the leftmost column looks along
//! `angle - fov / 2`.

use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub angle: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(3.5, 3.5, 0.0)
    }
}

impl Pose {
    pub const fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            angle,
        }
    }

    /// Unit vector the player is facing.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Grid cell the player stands in.
    pub fn cell(&self) -> (i32, i32) {
        self.position.cell()
    }
}
