//! A first-person grid raycaster.
//!
//! Renders a Wolfenstein-style corridor view from a 2D tile map: one ray per
//! screen column, marched in fixed steps until it meets a wall, projected
//! into a distance-shaded vertical slab between sky and floor. Rendering is
//! CPU-only; SDL2 is used for the window, keyboard and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use mazecast::prelude::*;
//!
//! let grid = Grid::default_map()?;
//! let mut engine = Engine::new(grid, EngineConfig::default())?;
//! let frame = engine.tick(&InputState::with(&[Action::MoveForward]), 1.0 / 60.0);
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod engine;
pub mod error;
pub mod fov;
pub mod input;
pub mod map;
pub mod math;
pub mod movement;
pub mod platform;
pub mod player;
pub mod render;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use engine::{run, Engine, EngineConfig};
pub use error::{ConfigError, Error, Result};
pub use map::{Cell, Grid, MapError};
pub use player::Pose;
pub use render::{Frame, Raycaster, RenderSettings};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use mazecast::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{run, Engine, EngineConfig, FpsCounter};

    // Map & player
    pub use crate::map::{Cell, Grid};
    pub use crate::player::Pose;

    // Movement & FOV
    pub use crate::fov::{FovPreset, FovPresets};
    pub use crate::movement::MovementController;

    // Math
    pub use crate::math::vec2::Vec2;

    // Rendering
    pub use crate::render::{Frame, RayHit, RayOutcome, Raycaster, RenderSettings};

    // Input & platform
    pub use crate::input::{Action, InputSource, InputState};
    pub use crate::platform::{Clock, Platform, WindowEvent};
    pub use crate::window::{FrameLimiter, Window};
}
