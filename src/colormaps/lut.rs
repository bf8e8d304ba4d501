//! Lookup-table colormaps.
//!
//! Every colormap is materialized into a table of RGBA entries. Continuous
//! colormaps are sampled at [`LUT_SIZE`] evenly spaced points; listed
//! (qualitative) colormaps keep one entry per color. A normalized value `x`
//! selects entry `floor(x * N)`, with `x == 1.0` landing on the last entry.
//!
//! Entries are stored as 8-bit RGBA. Continuous channels in [0, 1] are scaled
//! by 255 and truncated; listed colors are stored as given.

use colorgrad::Gradient;

use super::colormap::Colormap;

/// Number of samples taken from a continuous colormap
pub const LUT_SIZE: usize = 256;

/// RGB triple with channels in [0, 1]
pub type Rgb = [f32; 3];

/// One channel of a segmented colormap: `(x, y_below, y_above)` rows with
/// increasing `x` from 0.0 to 1.0. `y_below != y_above` marks a discontinuity.
pub type Segments = &'static [(f32, f32, f32)];

/// Per-channel segment tables
pub struct SegmentData {
    pub red: Segments,
    pub green: Segments,
    pub blue: Segments,
}

/// A colormap backed by a sampled lookup table
#[derive(Debug, Clone)]
pub struct LutColormap {
    name: String,
    lut: Vec<[u8; 4]>,
}

impl LutColormap {
    /// Build a colormap by sampling a per-position color function.
    /// Channel values are clamped to [0, 1].
    pub fn from_fn(name: &str, f: impl Fn(f32) -> Rgb) -> Self {
        let lut = (0..LUT_SIZE)
            .map(|i| {
                let [r, g, b] = f(i as f32 / (LUT_SIZE - 1) as f32);
                [to_u8(r), to_u8(g), to_u8(b), 255]
            })
            .collect();
        Self {
            name: name.to_string(),
            lut,
        }
    }

    /// Build a colormap from per-channel analytic formulas
    pub fn from_channels(
        name: &str,
        red: impl Fn(f32) -> f32,
        green: impl Fn(f32) -> f32,
        blue: impl Fn(f32) -> f32,
    ) -> Self {
        Self::from_fn(name, |x| [red(x), green(x), blue(x)])
    }

    /// Build a colormap from per-channel segment tables
    pub fn from_segments(name: &str, data: &SegmentData) -> Self {
        Self::from_fn(name, |x| {
            [
                eval_segments(data.red, x),
                eval_segments(data.green, x),
                eval_segments(data.blue, x),
            ]
        })
    }

    /// Build a colormap that interpolates linearly between evenly spaced colors
    pub fn from_anchors(name: &str, anchors: &[Rgb]) -> Self {
        Self::from_fn(name, |x| eval_anchors(anchors, x))
    }

    /// Build a colormap that interpolates linearly between positioned colors.
    /// Stop positions must increase from 0.0 to 1.0.
    pub fn from_stops(name: &str, stops: &[(f32, Rgb)]) -> Self {
        Self::from_fn(name, |x| {
            let Some(first) = stops.first() else {
                return [0.0, 0.0, 0.0];
            };
            if x <= first.0 {
                return first.1;
            }
            for pair in stops.windows(2) {
                let (x0, c0) = pair[0];
                let (x1, c1) = pair[1];
                if x <= x1 {
                    let t = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
                    return lerp_rgb(c0, c1, t);
                }
            }
            stops[stops.len() - 1].1
        })
    }

    /// Build a discrete colormap with one entry per `0xRRGGBB` color
    pub fn from_listed(name: &str, colors: &[u32]) -> Self {
        let lut = colors
            .iter()
            .map(|&hex| [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255])
            .collect();
        Self {
            name: name.to_string(),
            lut,
        }
    }

    /// Build a colormap by sampling a colorgrad gradient
    pub fn from_gradient<G: Gradient>(name: &str, gradient: G) -> Self {
        let lut = (0..LUT_SIZE)
            .map(|i| {
                let c = gradient.at(i as f32 / (LUT_SIZE - 1) as f32);
                [to_u8(c.r), to_u8(c.g), to_u8(c.b), to_u8(c.a)]
            })
            .collect();
        Self {
            name: name.to_string(),
            lut,
        }
    }

    /// The same colormap traversed from 1.0 down to 0.0, named `<name>_r`
    pub fn reversed(&self) -> Self {
        let mut lut = self.lut.clone();
        lut.reverse();
        Self {
            name: format!("{}_r", self.name),
            lut,
        }
    }

    /// Number of entries in the lookup table
    pub fn len(&self) -> usize {
        self.lut.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }
}

impl Colormap for LutColormap {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        if value.is_nan() || self.lut.is_empty() {
            return [0, 0, 0, 0];
        }
        let n = self.lut.len();
        let index = ((value.clamp(0.0, 1.0) * n as f32) as usize).min(n - 1);
        self.lut[index]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Evaluate one segmented channel at `x`
pub fn eval_segments(segments: Segments, x: f32) -> f32 {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return 0.0;
    };
    if x <= first.0 {
        return first.2;
    }
    if x >= last.0 {
        return last.1;
    }
    // First row at or beyond x; always >= 1 here since x > first.0
    let upper = segments
        .iter()
        .position(|s| s.0 >= x)
        .unwrap_or(segments.len() - 1);
    let (x0, _, y_from) = segments[upper - 1];
    let (x1, y_to, _) = segments[upper];
    let t = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
    y_from + t * (y_to - y_from)
}

/// Interpolate between evenly spaced colors at `x` in [0, 1]
pub fn eval_anchors(anchors: &[Rgb], x: f32) -> Rgb {
    if anchors.len() < 2 {
        return anchors.first().copied().unwrap_or([0.0, 0.0, 0.0]);
    }
    let last = anchors.len() - 1;
    let position = x.clamp(0.0, 1.0) * last as f32;
    let index = (position.floor() as usize).min(last - 1);
    let t = position - index as f32;
    lerp_rgb(anchors[index], anchors[index + 1], t)
}

/// gnuplot `rgbformulae` palette functions, indexed 0..=36
pub fn rgb_formula(index: u8, x: f32) -> f32 {
    use std::f32::consts::PI;

    match index {
        0 => 0.0,
        1 => 0.5,
        2 => 1.0,
        3 => x,
        4 => x.powi(2),
        5 => x.powi(3),
        6 => x.powi(4),
        7 => x.sqrt(),
        8 => x.sqrt().sqrt(),
        9 => (x * PI / 2.0).sin(),
        10 => (x * PI / 2.0).cos(),
        11 => (x - 0.5).abs(),
        12 => (2.0 * x - 1.0).powi(2),
        13 => (x * PI).sin(),
        14 => (x * PI).cos().abs(),
        15 => (x * 2.0 * PI).sin(),
        16 => (x * 2.0 * PI).cos(),
        17 => (x * 2.0 * PI).sin().abs(),
        18 => (x * 2.0 * PI).cos().abs(),
        19 => (x * 4.0 * PI).sin().abs(),
        20 => (x * 4.0 * PI).cos().abs(),
        21 => 3.0 * x,
        22 => 3.0 * x - 1.0,
        23 => 3.0 * x - 2.0,
        24 => (3.0 * x - 1.0).abs(),
        25 => (3.0 * x - 2.0).abs(),
        26 => (3.0 * x - 1.0) / 2.0,
        27 => (3.0 * x - 2.0) / 2.0,
        28 => ((3.0 * x - 1.0) / 2.0).abs(),
        29 => ((3.0 * x - 2.0) / 2.0).abs(),
        30 => x / 0.32 - 0.78125,
        31 => 2.0 * x - 0.84,
        32 => {
            if x < 0.25 {
                4.0 * x
            } else if x < 0.92 {
                -2.0 * x + 1.84
            } else {
                x / 0.08 - 11.5
            }
        }
        33 => (2.0 * x - 0.5).abs(),
        34 => 2.0 * x,
        35 => 2.0 * x - 0.5,
        36 => 2.0 * x - 1.0,
        _ => 0.0,
    }
}

/// Build a colormap from three gnuplot `rgbformulae` indices
pub fn from_rgb_formulae(name: &str, formulae: (u8, u8, u8)) -> LutColormap {
    let (r, g, b) = formulae;
    LutColormap::from_channels(
        name,
        |x| rgb_formula(r, x),
        |x| rgb_formula(g, x),
        |x| rgb_formula(b, x),
    )
}

/// Convert a `0xRRGGBB` literal to RGB channels in [0, 1]
pub fn hex_to_rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Convert 8-bit RGB to channels in [0, 1]
pub fn u8_to_rgb(c: [u8; 3]) -> Rgb {
    [
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
    ]
}

fn lerp_rgb(c1: Rgb, c2: Rgb, t: f32) -> Rgb {
    [
        c1[0] + (c2[0] - c1[0]) * t,
        c1[1] + (c2[1] - c1[1]) * t,
        c1[2] + (c2[2] - c1[2]) * t,
    ]
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0) as u8
}
