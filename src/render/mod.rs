//! Column raycasting renderer.
//!
//! - [`raycast`]: fixed-step ray march against the tile grid
//! - [`shading`]: distance to slab height and brightness
//! - [`framebuffer`]: the owned pixel raster a frame is drawn into
//! - [`renderer`]: ties the three together, one column at a time

pub mod framebuffer;
pub mod raycast;
pub mod renderer;
pub mod shading;

pub use framebuffer::Frame;
pub use raycast::{cast_ray, ray_angle, RayHit, RayOutcome};
pub use renderer::{RenderSettings, Raycaster};
pub use shading::{brightness, sanitize_distance, wall_height, Slab};
