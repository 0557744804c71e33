//! Palette and ARGB8888 packing helpers.
//!
//! Frame pixels are `u32` values laid out as `0xAARRGGBB`, matching the
//! streaming texture format used for presentation.

pub const SKY: u32 = rgb(0, 0, 0);
pub const WALL: u32 = rgb(60, 50, 45);
pub const FLOOR: u32 = rgb(25, 20, 18);

/// Pack an opaque RGB triple into ARGB8888.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack the RGB channels of an ARGB8888 color.
#[inline]
pub const fn channels(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

/// Scale each channel by `brightness`, truncating toward zero.
///
/// `brightness` is clamped to `[0, 1]`; NaN is treated as 0.
#[inline]
pub fn shade(color: u32, brightness: f32) -> u32 {
    let b = if brightness.is_nan() {
        0.0
    } else {
        brightness.clamp(0.0, 1.0)
    };
    let (r, g, bl) = channels(color);
    rgb(
        (r as f32 * b) as u8,
        (g as f32 * b) as u8,
        (bl as f32 * b) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack() {
        assert_eq!(rgb(60, 50, 45), 0xFF3C322D);
        assert_eq!(channels(WALL), (60, 50, 45));
    }

    #[test]
    fn shade_truncates_per_channel() {
        // 60 * 0.5 = 30, 50 * 0.5 = 25, 45 * 0.5 = 22.5 -> 22
        assert_eq!(channels(shade(WALL, 0.5)), (30, 25, 22));
    }

    #[test]
    fn shade_full_and_nan() {
        assert_eq!(shade(WALL, 1.0), WALL);
        assert_eq!(shade(WALL, f32::NAN), rgb(0, 0, 0));
        assert_eq!(shade(WALL, 7.0), WALL);
    }
}
