//! Cyclic colormaps.
//!
//! Both ends of a cyclic colormap meet at the same color, so they suit
//! values that wrap around such as phase angles or time of day.

use super::lut::{eval_anchors, LutColormap, Rgb, SegmentData};

/// Names defined in this module
pub const NAMES: &[&str] = &["twilight", "twilight_shifted", "hsv"];

/// Reduced anchor table for twilight: light, through blue to the dark
/// midpoint, back through red to light
const TWILIGHT: [Rgb; 9] = [
    [0.886, 0.850, 0.888],
    [0.628, 0.703, 0.800],
    [0.378, 0.518, 0.763],
    [0.369, 0.277, 0.671],
    [0.186, 0.071, 0.232],
    [0.471, 0.134, 0.314],
    [0.706, 0.318, 0.278],
    [0.812, 0.612, 0.502],
    [0.886, 0.850, 0.888],
];

const HSV: SegmentData = SegmentData {
    red: &[
        (0.0, 1.0, 1.0),
        (0.158730, 1.0, 1.0),
        (0.174603, 0.968750, 0.968750),
        (0.333333, 0.031250, 0.031250),
        (0.349206, 0.0, 0.0),
        (0.666667, 0.0, 0.0),
        (0.682540, 0.031250, 0.031250),
        (0.841270, 0.968750, 0.968750),
        (0.857143, 1.0, 1.0),
        (1.0, 1.0, 1.0),
    ],
    green: &[
        (0.0, 0.0, 0.0),
        (0.158730, 0.937500, 0.937500),
        (0.174603, 1.0, 1.0),
        (0.507937, 1.0, 1.0),
        (0.666667, 0.062500, 0.062500),
        (0.682540, 0.0, 0.0),
        (1.0, 0.0, 0.0),
    ],
    blue: &[
        (0.0, 0.0, 0.0),
        (0.333333, 0.0, 0.0),
        (0.349206, 0.062500, 0.062500),
        (0.507937, 1.0, 1.0),
        (0.841270, 1.0, 1.0),
        (0.857143, 0.937500, 0.937500),
        (1.0, 0.09375, 0.09375),
    ],
};

/// Build a cyclic colormap by name
pub fn build(name: &str) -> Option<LutColormap> {
    let colormap = match name {
        "twilight" => LutColormap::from_anchors(name, &TWILIGHT),
        // Dark midpoint moved to the ends, traversed in the opposite direction
        "twilight_shifted" => LutColormap::from_fn(name, |x| {
            eval_anchors(&TWILIGHT, (1.5 - x).rem_euclid(1.0))
        }),
        "hsv" => LutColormap::from_segments(name, &HSV),
        _ => return None,
    };
    Some(colormap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::Colormap;

    #[test]
    fn test_colormap_names() {
        for name in NAMES {
            assert_eq!(build(name).unwrap().name(), *name);
        }
    }

    #[test]
    fn test_ends_meet() {
        for name in NAMES {
            let colormap = build(name).unwrap();
            let low = colormap.map_normalized(0.0);
            let high = colormap.map_normalized(1.0);
            for channel in 0..3 {
                let diff = (low[channel] as i16 - high[channel] as i16).abs();
                assert!(diff <= 30, "{} ends differ: {:?} vs {:?}", name, low, high);
            }
        }
    }

    #[test]
    fn test_twilight_shifted_dark_ends() {
        let twilight = build("twilight").unwrap();
        let shifted = build("twilight_shifted").unwrap();
        let dark = twilight.map_normalized(0.5);
        let end = shifted.map_normalized(0.0);
        let sum = |c: [u8; 4]| c[0] as u32 + c[1] as u32 + c[2] as u32;
        assert!(sum(end) < 250);
        assert!(sum(dark) < 250);
    }

    #[test]
    fn test_twilight_shifted_samples_anchors() {
        let shifted = build("twilight_shifted").unwrap();
        // Position 0.0 reads the dark midpoint anchor of twilight
        assert_eq!(shifted.map_normalized(0.0), [47, 18, 59, 255]);
    }

    #[test]
    fn test_hsv_starts_red() {
        let hsv = build("hsv").unwrap();
        assert_eq!(hsv.map_normalized(0.0), [255, 0, 0, 255]);
    }
}
