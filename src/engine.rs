//! Game-loop controller.
//!
//! The [`Engine`] owns everything that lives across ticks: the grid, the
//! player pose, the reusable frame, movement tuning and the renderer. A tick
//! is strictly input -> movement -> FOV selection -> render; [`run`] wraps
//! ticks with the clock and the platform's event/present calls.

use crate::error::{ConfigError, Result};
use crate::fov::{FovPreset, FovPresets};
use crate::input::InputSource;
use crate::map::Grid;
use crate::movement::MovementController;
use crate::platform::{Clock, Platform, WindowEvent};
use crate::player::Pose;
use crate::render::{Frame, Raycaster, RenderSettings};

/// Everything needed to build an [`Engine`] besides the map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    pub render: RenderSettings,
    pub movement: MovementController,
    pub fov: FovPresets,
    /// Preset used while the run modifier is not held.
    pub resting_fov: FovPreset,
    pub spawn: Pose,
}

pub struct Engine {
    grid: Grid,
    pose: Pose,
    frame: Frame,
    raycaster: Raycaster,
    movement: MovementController,
    fov_presets: FovPresets,
    resting_fov: FovPreset,
    active_fov: FovPreset,
}

impl Engine {
    pub fn new(grid: Grid, config: EngineConfig) -> std::result::Result<Self, ConfigError> {
        let spawn = config.spawn;
        let (col, row) = spawn.cell();
        if !spawn.position.is_finite() || !spawn.angle.is_finite() || grid.is_wall(col, row) {
            return Err(ConfigError::Spawn {
                x: spawn.position.x,
                y: spawn.position.y,
            });
        }

        config.movement.validate()?;
        let raycaster = Raycaster::new(config.render)?;
        let frame = raycaster.new_frame();

        Ok(Self {
            grid,
            pose: spawn,
            frame,
            raycaster,
            movement: config.movement,
            fov_presets: config.fov,
            resting_fov: config.resting_fov,
            active_fov: config.resting_fov,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn raycaster(&self) -> &Raycaster {
        &self.raycaster
    }

    /// Preset used by the most recent tick.
    pub fn active_fov(&self) -> FovPreset {
        self.active_fov
    }

    /// FOV angle (radians) used by the most recent tick.
    pub fn fov(&self) -> f32 {
        self.fov_presets.angle(self.active_fov)
    }

    /// Advance one tick and render into the owned frame.
    pub fn tick<I: InputSource + ?Sized>(&mut self, input: &I, delta_time: f32) -> &Frame {
        self.pose = self
            .movement
            .update(self.pose, input, delta_time, &self.grid);
        let preset = FovPresets::select(input, self.resting_fov);
        if preset != self.active_fov {
            tracing::debug!(from = %self.active_fov, to = %preset, "fov preset changed");
            self.active_fov = preset;
        }

        let fov = self.fov_presets.angle(self.active_fov);
        self.raycaster
            .render(&self.pose, fov, &self.grid, &mut self.frame);
        &self.frame
    }
}

/// Tracks frames per second, logging a summary roughly once a second.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `delta_time` seconds.
    pub fn record(&mut self, delta_time: f32) {
        self.frames += 1;
        self.elapsed += delta_time;
        if self.elapsed >= 1.0 {
            self.fps = self.frames as f32 / self.elapsed;
            tracing::debug!(fps = self.fps, "frame rate");
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    /// Frames per second over the last completed window.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

/// Drive `engine` until the platform reports quit.
///
/// Each iteration reads the clock, polls events, snapshots input, ticks the
/// engine and presents the frame. A quit seen mid-iteration drops that frame.
/// Returns the number of frames presented.
pub fn run<P, C>(engine: &mut Engine, platform: &mut P, clock: &mut C) -> Result<u64>
where
    P: Platform + ?Sized,
    C: Clock + ?Sized,
{
    let mut fps = FpsCounter::new();
    let mut presented = 0u64;

    loop {
        let raw_delta = clock.delta_seconds();
        let delta_time = if raw_delta.is_finite() && raw_delta >= 0.0 {
            raw_delta
        } else {
            tracing::warn!(delta = raw_delta, "ignoring invalid frame delta");
            0.0
        };

        if platform.poll_events() == WindowEvent::Quit {
            tracing::info!(frames = presented, "quit requested");
            return Ok(presented);
        }

        let input = platform.input_state();
        let frame = engine.tick(&input, delta_time);
        platform.present(frame)?;

        presented += 1;
        fps.record(delta_time);
    }
}
