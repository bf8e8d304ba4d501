//! Miscellaneous colormaps.
//!
//! Rainbow-like, terrain and formula-defined maps that predate perceptual
//! colormap design. Several of them are not monotonic in lightness.

use std::f32::consts::PI;

use colorgrad::preset;

use super::lut::{from_rgb_formulae, LutColormap, Rgb, SegmentData};

/// Names defined in this module
pub const NAMES: &[&str] = &[
    "flag", "prism", "ocean", "gist_earth", "terrain", "gist_stern", "gnuplot", "gnuplot2",
    "CMRmap", "cubehelix", "brg", "gist_rainbow", "rainbow", "jet", "turbo", "nipy_spectral",
    "gist_ncar",
];

const TERRAIN: &[(f32, Rgb)] = &[
    (0.00, [0.2, 0.2, 0.6]),
    (0.15, [0.0, 0.6, 1.0]),
    (0.25, [0.0, 0.8, 0.4]),
    (0.50, [1.0, 1.0, 0.6]),
    (0.75, [0.5, 0.36, 0.33]),
    (1.00, [1.0, 1.0, 1.0]),
];

/// Reduced stop table: black, deep blue, sea green, olive, tan, white
const GIST_EARTH: &[(f32, Rgb)] = &[
    (0.00, [0.000, 0.000, 0.000]),
    (0.15, [0.106, 0.180, 0.478]),
    (0.30, [0.188, 0.412, 0.537]),
    (0.45, [0.263, 0.557, 0.380]),
    (0.60, [0.455, 0.627, 0.302]),
    (0.75, [0.678, 0.659, 0.388]),
    (0.90, [0.812, 0.733, 0.627]),
    (1.00, [0.992, 0.992, 0.992]),
];

/// Reduced stop table: navy, blue, cyan, green, yellow, orange, red,
/// magenta, near white
const GIST_NCAR: &[(f32, Rgb)] = &[
    (0.00, [0.000, 0.000, 0.502]),
    (0.05, [0.000, 0.220, 0.820]),
    (0.15, [0.000, 0.860, 1.000]),
    (0.25, [0.000, 0.950, 0.400]),
    (0.35, [0.200, 1.000, 0.000]),
    (0.45, [0.500, 0.900, 0.000]),
    (0.55, [0.850, 1.000, 0.150]),
    (0.65, [1.000, 0.850, 0.000]),
    (0.75, [1.000, 0.350, 0.000]),
    (0.85, [1.000, 0.000, 0.750]),
    (0.92, [0.750, 0.400, 1.000]),
    (1.00, [0.996, 0.973, 0.996]),
];

const GIST_STERN: SegmentData = SegmentData {
    red: &[
        (0.0, 0.0, 0.0),
        (0.0547, 1.0, 1.0),
        (0.250, 0.027, 0.250),
        (1.0, 1.0, 1.0),
    ],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[
        (0.0, 0.0, 0.0),
        (0.5, 1.0, 1.0),
        (0.735, 0.0, 0.0),
        (1.0, 1.0, 1.0),
    ],
};

const CMRMAP: SegmentData = SegmentData {
    red: &[
        (0.000, 0.00, 0.00),
        (0.125, 0.15, 0.15),
        (0.250, 0.30, 0.30),
        (0.375, 0.60, 0.60),
        (0.500, 1.00, 1.00),
        (0.625, 0.90, 0.90),
        (0.750, 0.90, 0.90),
        (0.875, 0.90, 0.90),
        (1.000, 1.00, 1.00),
    ],
    green: &[
        (0.000, 0.00, 0.00),
        (0.125, 0.15, 0.15),
        (0.250, 0.15, 0.15),
        (0.375, 0.20, 0.20),
        (0.500, 0.25, 0.25),
        (0.625, 0.50, 0.50),
        (0.750, 0.75, 0.75),
        (0.875, 0.90, 0.90),
        (1.000, 1.00, 1.00),
    ],
    blue: &[
        (0.000, 0.00, 0.00),
        (0.125, 0.50, 0.50),
        (0.250, 0.75, 0.75),
        (0.375, 0.50, 0.50),
        (0.500, 0.15, 0.15),
        (0.625, 0.00, 0.00),
        (0.750, 0.10, 0.10),
        (0.875, 0.50, 0.50),
        (1.000, 1.00, 1.00),
    ],
};

const GIST_RAINBOW: SegmentData = SegmentData {
    red: &[
        (0.000, 1.0, 1.0),
        (0.030, 1.0, 1.0),
        (0.215, 1.0, 1.0),
        (0.400, 0.0, 0.0),
        (0.586, 0.0, 0.0),
        (0.770, 0.0, 0.0),
        (0.954, 1.0, 1.0),
        (1.000, 1.0, 1.0),
    ],
    green: &[
        (0.000, 0.0, 0.0),
        (0.030, 0.0, 0.0),
        (0.215, 1.0, 1.0),
        (0.400, 1.0, 1.0),
        (0.586, 1.0, 1.0),
        (0.770, 0.0, 0.0),
        (0.954, 0.0, 0.0),
        (1.000, 0.0, 0.0),
    ],
    blue: &[
        (0.000, 0.16, 0.16),
        (0.030, 0.0, 0.0),
        (0.215, 0.0, 0.0),
        (0.400, 0.0, 0.0),
        (0.586, 1.0, 1.0),
        (0.770, 1.0, 1.0),
        (0.954, 1.0, 1.0),
        (1.000, 0.75, 0.75),
    ],
};

const JET: SegmentData = SegmentData {
    red: &[
        (0.0, 0.0, 0.0),
        (0.35, 0.0, 0.0),
        (0.66, 1.0, 1.0),
        (0.89, 1.0, 1.0),
        (1.0, 0.5, 0.5),
    ],
    green: &[
        (0.0, 0.0, 0.0),
        (0.125, 0.0, 0.0),
        (0.375, 1.0, 1.0),
        (0.64, 1.0, 1.0),
        (0.91, 0.0, 0.0),
        (1.0, 0.0, 0.0),
    ],
    blue: &[
        (0.0, 0.5, 0.5),
        (0.11, 1.0, 1.0),
        (0.34, 1.0, 1.0),
        (0.65, 0.0, 0.0),
        (1.0, 0.0, 0.0),
    ],
};

/// nipy_spectral channel values at 0.05 steps
const NIPY_SPECTRAL: [Rgb; 21] = [
    [0.0, 0.0, 0.0],
    [0.4667, 0.0, 0.5333],
    [0.5333, 0.0, 0.6],
    [0.0, 0.0, 0.6667],
    [0.0, 0.0, 0.8667],
    [0.0, 0.4667, 0.8667],
    [0.0, 0.6, 0.8667],
    [0.0, 0.6667, 0.6667],
    [0.0, 0.6667, 0.5333],
    [0.0, 0.6, 0.0],
    [0.0, 0.7333, 0.0],
    [0.0, 0.8667, 0.0],
    [0.0, 1.0, 0.0],
    [0.7333, 1.0, 0.0],
    [0.9333, 0.9333, 0.0],
    [1.0, 0.8, 0.0],
    [1.0, 0.6, 0.0],
    [1.0, 0.0, 0.0],
    [0.8667, 0.0, 0.0],
    [0.8, 0.0, 0.0],
    [0.8, 0.8, 0.8],
];

const BRG: [Rgb; 3] = [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

/// Build a miscellaneous colormap by name
pub fn build(name: &str) -> Option<LutColormap> {
    let colormap = match name {
        "flag" => LutColormap::from_channels(
            name,
            |x| 0.75 * ((x * 31.5 + 0.25) * PI).sin() + 0.5,
            |x| (x * 31.5 * PI).sin(),
            |x| 0.75 * ((x * 31.5 - 0.25) * PI).sin() + 0.5,
        ),
        "prism" => LutColormap::from_channels(
            name,
            |x| 0.75 * ((x * 20.9 + 0.25) * PI).sin() + 0.67,
            |x| 0.75 * ((x * 20.9 - 0.25) * PI).sin() + 0.33,
            |x| -1.1 * (x * 20.9 * PI).sin(),
        ),
        "ocean" => from_rgb_formulae(name, (23, 28, 3)),
        "gist_earth" => LutColormap::from_stops(name, GIST_EARTH),
        "terrain" => LutColormap::from_stops(name, TERRAIN),
        "gist_stern" => LutColormap::from_segments(name, &GIST_STERN),
        "gnuplot" => from_rgb_formulae(name, (7, 5, 15)),
        "gnuplot2" => from_rgb_formulae(name, (30, 31, 32)),
        "CMRmap" => LutColormap::from_segments(name, &CMRMAP),
        "cubehelix" => cubehelix(name, 1.0, 0.5, -1.5, 1.0),
        "brg" => LutColormap::from_anchors(name, &BRG),
        "gist_rainbow" => LutColormap::from_segments(name, &GIST_RAINBOW),
        "rainbow" => from_rgb_formulae(name, (33, 13, 10)),
        "jet" => LutColormap::from_segments(name, &JET),
        "turbo" => LutColormap::from_gradient(name, preset::turbo()),
        "nipy_spectral" => LutColormap::from_anchors(name, &NIPY_SPECTRAL),
        "gist_ncar" => LutColormap::from_stops(name, GIST_NCAR),
        _ => return None,
    };
    Some(colormap)
}

/// Green's cubehelix scheme: a helix around the gray diagonal of the RGB cube
fn cubehelix(name: &str, gamma: f32, start: f32, rotation: f32, hue: f32) -> LutColormap {
    let channel = move |p0: f32, p1: f32| {
        move |x: f32| {
            let xg = x.powf(gamma);
            let amplitude = hue * xg * (1.0 - xg) / 2.0;
            let phi = 2.0 * PI * (start / 3.0 + rotation * x);
            xg + amplitude * (p0 * phi.cos() + p1 * phi.sin())
        }
    };
    LutColormap::from_channels(
        name,
        channel(-0.14861, 1.78277),
        channel(-0.29227, -0.90649),
        channel(1.97294, 0.0),
    )
}
