//! Distance-to-pixels conversions: slab height, slab placement and brightness.

/// Distances below this are treated as this when projecting wall height.
pub const MIN_DISTANCE: f32 = 1e-3;

/// Default lower bound on wall brightness so far walls never go fully black.
pub const DEFAULT_MIN_BRIGHTNESS: f32 = 0.05;

/// Force a ray distance into `[0, max_depth]`.
///
/// NaN and +inf become `max_depth` (a miss); negative values become 0.
#[inline]
pub fn sanitize_distance(distance: f32, max_depth: f32) -> f32 {
    let max_depth = if max_depth.is_finite() { max_depth.max(0.0) } else { 0.0 };
    if distance.is_nan() || distance == f32::INFINITY {
        max_depth
    } else {
        distance.clamp(0.0, max_depth)
    }
}

/// Projected wall height in pixels: `screen_height / distance`, truncated.
///
/// Distances under [`MIN_DISTANCE`] are raised to it; NaN projects to 0.
#[inline]
pub fn wall_height(screen_height: u32, distance: f32) -> i64 {
    let distance = if distance.is_nan() {
        f32::INFINITY
    } else {
        distance.max(MIN_DISTANCE)
    };
    (screen_height as f32 / distance) as i64
}

/// Linear falloff `1 - distance / max_depth`, floored at `min_brightness`.
#[inline]
pub fn brightness(distance: f32, max_depth: f32, min_brightness: f32) -> f32 {
    let floor = if min_brightness.is_nan() { 0.0 } else { min_brightness };
    if !(max_depth.is_finite() && max_depth > 0.0) {
        return floor;
    }
    let b = 1.0 - distance / max_depth;
    if b.is_nan() {
        floor
    } else {
        b.min(1.0).max(floor)
    }
}

/// Vertical span of one column occupied by wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slab {
    /// First wall row. Rows above are sky.
    pub ceiling: u32,
    /// First floor row. Rows from here down are floor.
    pub floor: u32,
}

impl Slab {
    /// Center a wall of `wall_height(screen_height, distance)` pixels.
    ///
    /// Both bounds are clamped to `[0, screen_height - 1]`, so the bottom row
    /// always belongs to the floor.
    pub fn new(screen_height: u32, distance: f32) -> Self {
        if screen_height == 0 {
            return Self {
                ceiling: 0,
                floor: 0,
            };
        }

        let height = wall_height(screen_height, distance);
        let screen = i64::from(screen_height);
        let ceiling = (screen - height) / 2;
        let floor = ceiling + height;
        let last_row = screen - 1;

        Self {
            ceiling: ceiling.clamp(0, last_row) as u32,
            floor: floor.clamp(0, last_row) as u32,
        }
    }

    pub fn rows(&self) -> u32 {
        self.floor.saturating_sub(self.ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const HEIGHT: u32 = 720;
    const DEPTH: f32 = 16.0;

    #[test]
    fn height_is_inverse_distance() {
        assert_eq!(wall_height(HEIGHT, 1.0), 720);
        assert_eq!(wall_height(HEIGHT, 2.0), 360);
        assert_eq!(wall_height(HEIGHT, 16.0), 45);
        assert_eq!(wall_height(HEIGHT, 7.0), 102);
    }

    #[test]
    fn zero_and_negative_distance_are_clamped() {
        let max = wall_height(HEIGHT, MIN_DISTANCE);
        assert_eq!(wall_height(HEIGHT, 0.0), max);
        assert_eq!(wall_height(HEIGHT, -3.0), max);
        assert_eq!(wall_height(HEIGHT, f32::NAN), 0);
        assert_eq!(wall_height(HEIGHT, f32::INFINITY), 0);
    }

    #[test]
    fn slab_is_centered() {
        let slab = Slab::new(HEIGHT, 16.0);
        assert_eq!(slab, Slab { ceiling: 337, floor: 382 });
        assert_eq!(slab.rows(), 45);
    }

    #[test]
    fn close_slab_is_clamped_to_screen() {
        let slab = Slab::new(HEIGHT, 0.0);
        assert_eq!(slab, Slab { ceiling: 0, floor: HEIGHT - 1 });
    }

    #[test]
    fn sanitize_distance_cases() {
        assert_eq!(sanitize_distance(f32::NAN, DEPTH), DEPTH);
        assert_eq!(sanitize_distance(f32::INFINITY, DEPTH), DEPTH);
        assert_eq!(sanitize_distance(f32::NEG_INFINITY, DEPTH), 0.0);
        assert_eq!(sanitize_distance(-2.0, DEPTH), 0.0);
        assert_eq!(sanitize_distance(40.0, DEPTH), DEPTH);
        assert_eq!(sanitize_distance(3.25, DEPTH), 3.25);
    }

    #[test]
    fn brightness_falloff() {
        assert_relative_eq!(brightness(0.0, DEPTH, 0.05), 1.0);
        assert_relative_eq!(brightness(8.0, DEPTH, 0.05), 0.5);
        assert_relative_eq!(brightness(16.0, DEPTH, 0.05), 0.05);
        assert_relative_eq!(brightness(f32::NAN, DEPTH, 0.05), 0.05);
        assert_relative_eq!(brightness(1.0, 0.0, 0.05), 0.05);
    }

    proptest! {
        #[test]
        fn brightness_is_non_increasing_and_floored(
            a in 0.0f32..32.0,
            b in 0.0f32..32.0,
            floor in 0.0f32..1.0,
        ) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            let bn = brightness(near, DEPTH, floor);
            let bf = brightness(far, DEPTH, floor);
            prop_assert!(bn >= bf);
            prop_assert!(bf >= floor);
            prop_assert!(bn <= 1.0);
        }

        #[test]
        fn wall_height_is_non_increasing(
            a in -1.0f32..64.0,
            b in -1.0f32..64.0,
            screen in 1u32..4096,
        ) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(wall_height(screen, near) >= wall_height(screen, far));
        }

        #[test]
        fn slab_stays_on_screen(distance in proptest::num::f32::ANY, screen in 1u32..4096) {
            let slab = Slab::new(screen, sanitize_distance(distance, DEPTH));
            prop_assert!(slab.ceiling <= slab.floor);
            prop_assert!(slab.floor < screen);
        }
    }
}
