//! Per-column raycast renderer.
//!
//! [`Raycaster`] turns a pose, FOV and grid into a full frame. Every column is
//! independent: cast one ray, project the hit distance into a [`Slab`], shade
//! the wall color by distance and paint sky/wall/floor bands.

use super::framebuffer::Frame;
use super::raycast::{cast_ray, ray_angle, RayHit, MAX_SAMPLES_PER_RAY};
use super::shading::{brightness, sanitize_distance, Slab, DEFAULT_MIN_BRIGHTNESS};
use crate::colors;
use crate::error::ConfigError;
use crate::map::Grid;
use crate::player::Pose;

pub const DEFAULT_SCREEN_WIDTH: u32 = 1280;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 720;
pub const DEFAULT_MAX_DEPTH: f32 = 16.0;
pub const DEFAULT_RAY_STEP: f32 = 0.1;


#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Rays that travel this far without a hit are misses.
    pub max_depth: f32,
    /// Fixed march increment, in grid units.
    pub ray_step: f32,
    /// Brightness floor applied to the distance falloff.
    pub min_brightness: f32,
    pub sky_color: u32,
    pub wall_color: u32,
    pub floor_color: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            max_depth: DEFAULT_MAX_DEPTH,
            ray_step: DEFAULT_RAY_STEP,
            min_brightness: DEFAULT_MIN_BRIGHTNESS,
            sky_color: colors::SKY,
            wall_color: colors::WALL,
            floor_color: colors::FLOOR,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.max_depth.is_finite() && self.max_depth > 0.0) {
            return Err(ConfigError::MaxDepth(self.max_depth));
        }
        if !(self.ray_step.is_finite() && self.ray_step > 0.0)
            || self.max_depth / self.ray_step > MAX_SAMPLES_PER_RAY
        {
            return Err(ConfigError::RayStep(self.ray_step));
        }
        if !(0.0..=1.0).contains(&self.min_brightness) {
            return Err(ConfigError::MinBrightness(self.min_brightness));
        }
        Ok(())
    }
}

pub struct Raycaster {
    settings: RenderSettings,
}

impl Raycaster {
    pub fn new(settings: RenderSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Allocate a frame sized to the configured screen.
    pub fn new_frame(&self) -> Frame {
        Frame::new(self.settings.screen_width, self.settings.screen_height)
    }

    /// Cast the ray for column `x` of a `screen_width`-wide view.
    pub fn cast_column(
        &self,
        pose: &Pose,
        fov: f32,
        grid: &Grid,
        x: u32,
        screen_width: u32,
    ) -> RayHit {
        let angle = ray_angle(x, screen_width, pose.angle, fov);
        let mut hit = cast_ray(
            grid,
            pose.position,
            angle,
            self.settings.max_depth,
            self.settings.ray_step,
        );
        hit.distance = sanitize_distance(hit.distance, self.settings.max_depth);
        hit
    }

    /// Ray results for every column of a `screen_width`-wide view.
    pub fn cast_columns(&self, pose: &Pose, fov: f32, grid: &Grid, screen_width: u32) -> Vec<RayHit> {
        (0..screen_width)
            .map(|x| self.cast_column(pose, fov, grid, x, screen_width))
            .collect()
    }

    /// Sky/wall/floor layout and wall color for a column at `distance`.
    pub fn shade_column(&self, distance: f32, screen_height: u32) -> (Slab, u32) {
        let distance = sanitize_distance(distance, self.settings.max_depth);
        let slab = Slab::new(screen_height, distance);
        let light = brightness(
            distance,
            self.settings.max_depth,
            self.settings.min_brightness,
        );
        (slab, colors::shade(self.settings.wall_color, light))
    }

    /// Render one full view into `frame`, overwriting every pixel.
    ///
    /// The frame's own dimensions define the screen.
    pub fn render(&self, pose: &Pose, fov: f32, grid: &Grid, frame: &mut Frame) {
        let width = frame.width();
        let height = frame.height();

        for x in 0..width {
            let hit = self.cast_column(pose, fov, grid, x, width);
            let (slab, wall) = self.shade_column(hit.distance, height);
            frame.fill_column(
                x,
                slab.ceiling,
                slab.floor,
                self.settings.sky_color,
                wall,
                self.settings.floor_color,
            );
        }
    }

    /// Render into a freshly allocated frame.
    pub fn render_frame(&self, pose: &Pose, fov: f32, grid: &Grid) -> Frame {
        let mut frame = self.new_frame();
        self.render(pose, fov, grid, &mut frame);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{channels, rgb};
    use crate::render::raycast::RayOutcome;
    use std::f32::consts::FRAC_PI_2;

    fn small_settings(width: u32, height: u32) -> RenderSettings {
        RenderSettings {
            screen_width: width,
            screen_height: height,
            ..RenderSettings::default()
        }
    }

    fn boxed_room() -> Grid {
        Grid::from_rows(&["####", "#..#", "#..#", "####"]).unwrap()
    }

    #[test]
    fn default_settings_are_valid() {
        assert!(RenderSettings::default().validate().is_ok());
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let bad = |f: fn(&mut RenderSettings)| {
            let mut s = RenderSettings::default();
            f(&mut s);
            Raycaster::new(s).err()
        };
        assert_eq!(bad(|s| s.max_depth = 0.0), Some(ConfigError::MaxDepth(0.0)));
        assert!(matches!(bad(|s| s.max_depth = f32::NAN), Some(ConfigError::MaxDepth(_))));
        assert_eq!(bad(|s| s.ray_step = -0.1), Some(ConfigError::RayStep(-0.1)));
        assert_eq!(bad(|s| s.ray_step = 1e-9), Some(ConfigError::RayStep(1e-9)));
        assert_eq!(bad(|s| s.min_brightness = 1.5), Some(ConfigError::MinBrightness(1.5)));
        assert_eq!(
            bad(|s| s.screen_height = 0),
            Some(ConfigError::ScreenSize {
                width: 1280,
                height: 0
            })
        );
    }

    #[test]
    fn column_is_sky_wall_floor() {
        let raycaster = Raycaster::new(small_settings(8, 60)).unwrap();
        let grid = boxed_room();
        let pose = Pose::new(1.5, 2.0, 0.0);
        let frame = raycaster.render_frame(&pose, FRAC_PI_2, &grid);

        // Center column looks straight at the east wall 1.5 units away.
        let x = 4;
        let hit = raycaster.cast_column(&pose, FRAC_PI_2, &grid, x as u32, 8);
        assert!(hit.hit());
        let (slab, wall) = raycaster.shade_column(hit.distance, 60);
        assert!(slab.ceiling > 0 && slab.rows() > 0);
        for y in 0..60 {
            let expected = if y < slab.ceiling {
                colors::SKY
            } else if y < slab.floor {
                wall
            } else {
                colors::FLOOR
            };
            assert_eq!(frame.get_pixel(x, y as i32), Some(expected), "row {y}");
        }
    }

    #[test]
    fn near_walls_are_brighter_and_taller() {
        let raycaster = Raycaster::new(RenderSettings::default()).unwrap();
        let (near_slab, near_color) = raycaster.shade_column(1.0, 720);
        let (far_slab, far_color) = raycaster.shade_column(10.0, 720);

        assert!(near_slab.rows() > far_slab.rows());
        assert!(channels(near_color).0 > channels(far_color).0);
    }

    #[test]
    fn misses_still_render_dim_wall() {
        let raycaster = Raycaster::new(RenderSettings::default()).unwrap();
        let (slab, color) = raycaster.shade_column(DEFAULT_MAX_DEPTH, 720);
        assert_eq!(slab.rows(), 45);
        // 60 * 0.05 = 3, 50 * 0.05 = 2.5, 45 * 0.05 = 2.25
        assert_eq!(color, rgb(3, 2, 2));
    }

    #[test]
    fn degenerate_distance_never_corrupts_column() {
        let raycaster = Raycaster::new(small_settings(4, 100)).unwrap();
        for distance in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -5.0, 0.0] {
            let (slab, _) = raycaster.shade_column(distance, 100);
            assert!(slab.ceiling <= slab.floor);
            assert!(slab.floor < 100);
        }
    }

    #[test]
    fn render_overwrites_previous_contents() {
        let raycaster = Raycaster::new(small_settings(16, 24)).unwrap();
        let grid = boxed_room();
        let pose = Pose::new(2.0, 2.0, 0.3);

        let expected = raycaster.render_frame(&pose, FRAC_PI_2, &grid);
        let mut reused = raycaster.new_frame();
        reused.clear(0xDEADBEEF);
        raycaster.render(&pose, FRAC_PI_2, &grid, &mut reused);

        assert_eq!(reused, expected);
        assert!(reused.pixels().iter().all(|&p| p != 0xDEADBEEF));
    }

    #[test]
    fn rays_into_the_void_are_capped() {
        let raycaster = Raycaster::new(small_settings(8, 8)).unwrap();
        let grid = Grid::from_rows(&["...", "...", "..."]).unwrap();
        let hits = raycaster.cast_columns(&Pose::new(1.5, 1.5, 0.0), FRAC_PI_2, &grid, 8);

        assert_eq!(hits.len(), 8);
        for hit in hits {
            assert_eq!(hit.outcome, RayOutcome::OutOfBounds);
            assert_eq!(hit.distance, DEFAULT_MAX_DEPTH);
        }
    }
}
