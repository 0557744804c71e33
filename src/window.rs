//! SDL2 window, input and timing.
//!
//! This is the only module that touches SDL. [`Window`] implements
//! [`Platform`] and [`FrameLimiter`] implements [`Clock`]; the rest of the
//! crate only sees those traits.

use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::input::InputState;
use crate::platform::{Clock, Platform, WindowEvent};
use crate::render::Frame;

pub const WINDOW_TITLE: &str = "maze.";
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1.0 / FPS as f64;

/// Caps the loop at [`FPS`] and measures real elapsed time with SDL's
/// high-resolution performance counter.
pub struct FrameLimiter {
    timer: sdl2::TimerSubsystem,
    frequency: u64,
    previous: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        let timer = window.timer().clone();
        let frequency = timer.performance_frequency().max(1);
        let previous = timer.performance_counter();
        Self {
            timer,
            frequency,
            previous,
        }
    }

    fn seconds_since_previous(&self) -> f64 {
        let now = self.timer.performance_counter();
        now.saturating_sub(self.previous) as f64 / self.frequency as f64
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in seconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self) -> f32 {
        let elapsed = self.seconds_since_previous();
        if elapsed < FRAME_TARGET_TIME {
            std::thread::sleep(std::time::Duration::from_secs_f64(FRAME_TARGET_TIME - elapsed));
        }

        let now = self.timer.performance_counter();
        let delta = now.saturating_sub(self.previous) as f64 / self.frequency as f64;
        self.previous = now;
        delta as f32
    }
}

impl Clock for FrameLimiter {
    fn delta_seconds(&mut self) -> f32 {
        self.wait_and_get_delta()
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: texture must drop before texture_creator.
    texture: sdl2::render::Texture<'static>,
    #[allow(dead_code)]
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        tracing::info!(width, height, "window opened");

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

/// A/D or Left/Right turn, W/S or Up/Down move, either Shift runs.
fn input_from_keyboard(keys: &KeyboardState) -> InputState {
    let held = |codes: &[Scancode]| codes.iter().any(|&c| keys.is_scancode_pressed(c));
    InputState {
        turn_left: held(&[Scancode::A, Scancode::Left]),
        turn_right: held(&[Scancode::D, Scancode::Right]),
        forward: held(&[Scancode::W, Scancode::Up]),
        backward: held(&[Scancode::S, Scancode::Down]),
        run: held(&[Scancode::LShift, Scancode::RShift]),
    }
}

impl Platform for Window {
    fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                _ => {}
            }
        }
        WindowEvent::None
    }

    fn input_state(&self) -> InputState {
        input_from_keyboard(&self.event_pump.keyboard_state())
    }

    fn present(&mut self, frame: &Frame) -> Result<(), String> {
        if frame.width() != self.width || frame.height() != self.height {
            return Err(format!(
                "frame is {}x{}, window expects {}x{}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            ));
        }

        self.texture
            .update(None, frame.as_bytes(), (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }
}
