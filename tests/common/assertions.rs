//! Assertion utilities for testing.
//!
//! Pixel comparisons tolerate a small per-channel difference, since
//! JPEG output and floating point colormap data are not bit-exact.

/// Default per-channel tolerance for pixel comparisons
pub const DEFAULT_TOLERANCE: u8 = 1;

/// Assert that two RGB pixels are approximately equal.
///
/// # Panics
///
/// Panics if any channel differs by more than `tolerance` (default: 1).
pub fn assert_rgb_approx_eq(actual: [u8; 3], expected: [u8; 3], tolerance: Option<u8>) {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = a.abs_diff(*e);
        assert!(
            diff <= tolerance,
            "Pixels differ at channel {}: actual = {:?}, expected = {:?}, tolerance = {}",
            i,
            actual,
            expected,
            tolerance
        );
    }
}

/// Assert that every pixel of an image equals one color.
pub fn assert_uniform(image: &image::RgbImage, expected: [u8; 3]) {
    for (x, y, pixel) in image.enumerate_pixels() {
        assert_eq!(
            pixel.0, expected,
            "Pixel ({}, {}) is {:?}, expected {:?}",
            x, y, pixel.0, expected
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_rgb_approx_eq() {
        assert_rgb_approx_eq([10, 20, 30], [10, 20, 30], None);
        assert_rgb_approx_eq([10, 20, 30], [11, 19, 30], None);
        assert_rgb_approx_eq([10, 20, 30], [14, 20, 26], Some(4));
    }
}
