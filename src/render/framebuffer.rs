//! Owned frame raster.
//!
//! A [`Frame`] is allocated once at a fixed size and overwritten in full by
//! every render call. Pixels are ARGB8888, row-major, top row first.

use crate::colors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            pixels: vec![colors::SKY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = y as usize * self.width as usize + x as usize;
            self.pixels[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Paint column `x` as three bands: `sky` for rows `< ceiling`, `wall` for
    /// rows in `[ceiling, floor)`, `floor_color` for the rest.
    ///
    /// Band bounds are clamped to the frame height; out-of-range columns are
    /// ignored.
    pub fn fill_column(
        &mut self,
        x: u32,
        ceiling: u32,
        floor: u32,
        sky: u32,
        wall: u32,
        floor_color: u32,
    ) {
        if x >= self.width {
            return;
        }
        let height = self.height;
        let ceiling = ceiling.min(height);
        let floor = floor.clamp(ceiling, height);
        let stride = self.width as usize;

        for y in 0..height {
            let color = if y < ceiling {
                sky
            } else if y < floor {
                wall
            } else {
                floor_color
            };
            self.pixels[y as usize * stride + x as usize] = color;
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel data as raw bytes, in native byte order, for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1, so any u32 slice
        // can be viewed as a byte slice of four times its length. The borrow
        // of self keeps the data alive for the returned lifetime.
        unsafe {
            std::slice::from_raw_parts(
                self.pixels.as_ptr() as *const u8,
                self.pixels.len() * std::mem::size_of::<u32>(),
            )
        }
    }
}
