//! Fixed-step ray marching.
//!
//! Rays advance in constant increments from the player and sample the grid
//! cell under each point. This is deliberately not a DDA: a hit is reported at
//! the first sample that lands in a wall, so the recorded distance overshoots
//! the true wall face by at most one step.

use crate::map::{Cell, Grid};

/// Upper bound on samples taken by a single ray. Smaller steps are widened
/// to `max_depth / MAX_SAMPLES_PER_RAY`.
pub const MAX_SAMPLES_PER_RAY: f32 = 1_000_000.0;
use crate::math::vec2::Vec2;

/// How a ray march ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayOutcome {
    /// A wall cell was sampled inside the grid.
    Wall,
    /// The ray left the grid before hitting anything. Treated as a miss.
    OutOfBounds,
    /// The ray reached max depth over empty cells.
    MaxDepth,
}

/// Result of marching one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance travelled, always within `[0, max_depth]`.
    pub distance: f32,
    pub outcome: RayOutcome,
}

impl RayHit {
    fn miss(max_depth: f32, outcome: RayOutcome) -> Self {
        Self {
            distance: max_depth,
            outcome,
        }
    }

    /// True when the ray stopped on a wall inside the grid.
    pub fn hit(&self) -> bool {
        self.outcome == RayOutcome::Wall
    }
}

/// Angle of the ray for screen column `column`.
///
/// Columns map linearly across the FOV arc, starting at `angle - fov / 2` on
/// the left edge. There is no tangent-space correction, so the projection
/// keeps its fisheye look.
#[inline]
pub fn ray_angle(column: u32, screen_width: u32, pose_angle: f32, fov: f32) -> f32 {
    if screen_width == 0 {
        return pose_angle;
    }
    (pose_angle - fov / 2.0) + (column as f32 / screen_width as f32) * fov
}

/// March a ray from `origin` along `angle` in increments of `step`.
///
/// The k-th sample sits at distance `k * step` (k = 1, 2, ...) and the march
/// stops before reaching `max_depth`. Sampling outside the grid ends the ray
/// as [`RayOutcome::OutOfBounds`] at `max_depth`.
///
/// Degenerate input (non-finite origin or angle, non-positive step or depth)
/// yields a miss rather than sampling garbage cells.
pub fn cast_ray(grid: &Grid, origin: Vec2, angle: f32, max_depth: f32, step: f32) -> RayHit {
    if !(max_depth.is_finite() && max_depth > 0.0) {
        let depth = if max_depth.is_finite() { max_depth.max(0.0) } else { 0.0 };
        return RayHit::miss(depth, RayOutcome::MaxDepth);
    }
    if !(step.is_finite() && step > 0.0) || !origin.is_finite() || !angle.is_finite() {
        return RayHit::miss(max_depth, RayOutcome::MaxDepth);
    }

    let step = step.max(max_depth / MAX_SAMPLES_PER_RAY);
    let direction = Vec2::from_angle(angle);
    let sample_count = (max_depth / step).ceil() as u64;

    for k in 1..=sample_count {
        let distance = step * k as f32;
        if distance >= max_depth {
            break;
        }

        let (col, row) = (origin + direction * distance).cell();
        match grid.cell_at(col, row) {
            None => return RayHit::miss(max_depth, RayOutcome::OutOfBounds),
            Some(Cell::Wall) => {
                return RayHit {
                    distance,
                    outcome: RayOutcome::Wall,
                }
            }
            Some(Cell::Empty) => {}
        }
    }

    RayHit::miss(max_depth, RayOutcome::MaxDepth)
}
