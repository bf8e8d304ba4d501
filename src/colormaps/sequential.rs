//! Sequential colormaps.
//!
//! These colormaps are suitable for data that progresses from low to high.
//! The perceptually uniform family and the ColorBrewer single/multi-hue
//! ramps come from colorgrad presets; the classic `Sequential (2)` ramps are
//! defined by segment tables and formulas.

use colorgrad::preset;

use super::lut::{eval_segments, from_rgb_formulae, LutColormap, SegmentData};

/// Names defined in this module
pub const NAMES: &[&str] = &[
    // Perceptually uniform
    "viridis", "plasma", "inferno", "magma", "cividis",
    // ColorBrewer
    "Greys", "Purples", "Blues", "Greens", "Oranges", "Reds", "YlOrBr", "YlOrRd", "OrRd",
    "PuRd", "RdPu", "BuPu", "GnBu", "PuBu", "YlGnBu", "PuBuGn", "BuGn", "YlGn",
    // Classic ramps
    "binary", "gist_yarg", "gist_gray", "gray", "bone", "pink", "spring", "summer", "autumn",
    "winter", "cool", "Wistia", "hot", "afmhot", "gist_heat", "copper",
];

const BINARY: SegmentData = SegmentData {
    red: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
    green: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
};

const GRAY: SegmentData = SegmentData {
    red: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
};

const BONE: SegmentData = SegmentData {
    red: &[(0.0, 0.0, 0.0), (0.746032, 0.652778, 0.652778), (1.0, 1.0, 1.0)],
    green: &[
        (0.0, 0.0, 0.0),
        (0.365079, 0.319444, 0.319444),
        (0.746032, 0.777778, 0.777778),
        (1.0, 1.0, 1.0),
    ],
    blue: &[(0.0, 0.0, 0.0), (0.365079, 0.444444, 0.444444), (1.0, 1.0, 1.0)],
};

const SPRING: SegmentData = SegmentData {
    red: &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
};

const SUMMER: SegmentData = SegmentData {
    red: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.5, 0.5), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 0.4, 0.4), (1.0, 0.4, 0.4)],
};

const AUTUMN: SegmentData = SegmentData {
    red: &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)],
};

const WINTER: SegmentData = SegmentData {
    red: &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 0.5, 0.5)],
};

const COOL: SegmentData = SegmentData {
    red: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
};

const HOT: SegmentData = SegmentData {
    red: &[(0.0, 0.0416, 0.0416), (0.365079, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[
        (0.0, 0.0, 0.0),
        (0.365079, 0.0, 0.0),
        (0.746032, 1.0, 1.0),
        (1.0, 1.0, 1.0),
    ],
    blue: &[(0.0, 0.0, 0.0), (0.746032, 0.0, 0.0), (1.0, 1.0, 1.0)],
};

const COPPER: SegmentData = SegmentData {
    red: &[(0.0, 0.0, 0.0), (0.809524, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 0.7812, 0.7812)],
    blue: &[(0.0, 0.0, 0.0), (1.0, 0.4975, 0.4975)],
};

const WISTIA: &[u32] = &[0xe4ff7a, 0xffe81a, 0xffbd00, 0xffa000, 0xfc7f00];

/// Build a sequential colormap by name
pub fn build(name: &str) -> Option<LutColormap> {
    let colormap = match name {
        "viridis" => LutColormap::from_gradient(name, preset::viridis()),
        "plasma" => LutColormap::from_gradient(name, preset::plasma()),
        "inferno" => LutColormap::from_gradient(name, preset::inferno()),
        "magma" => LutColormap::from_gradient(name, preset::magma()),
        "cividis" => LutColormap::from_gradient(name, preset::cividis()),

        "Greys" => LutColormap::from_gradient(name, preset::greys()),
        "Purples" => LutColormap::from_gradient(name, preset::purples()),
        "Blues" => LutColormap::from_gradient(name, preset::blues()),
        "Greens" => LutColormap::from_gradient(name, preset::greens()),
        "Oranges" => LutColormap::from_gradient(name, preset::oranges()),
        "Reds" => LutColormap::from_gradient(name, preset::reds()),
        "YlOrBr" => LutColormap::from_gradient(name, preset::yl_or_br()),
        "YlOrRd" => LutColormap::from_gradient(name, preset::yl_or_rd()),
        "OrRd" => LutColormap::from_gradient(name, preset::or_rd()),
        "PuRd" => LutColormap::from_gradient(name, preset::pu_rd()),
        "RdPu" => LutColormap::from_gradient(name, preset::rd_pu()),
        "BuPu" => LutColormap::from_gradient(name, preset::bu_pu()),
        "GnBu" => LutColormap::from_gradient(name, preset::gn_bu()),
        "PuBu" => LutColormap::from_gradient(name, preset::pu_bu()),
        "YlGnBu" => LutColormap::from_gradient(name, preset::yl_gn_bu()),
        "PuBuGn" => LutColormap::from_gradient(name, preset::pu_bu_gn()),
        "BuGn" => LutColormap::from_gradient(name, preset::bu_gn()),
        "YlGn" => LutColormap::from_gradient(name, preset::yl_gn()),

        "binary" | "gist_yarg" => LutColormap::from_segments(name, &BINARY),
        "gist_gray" | "gray" => LutColormap::from_segments(name, &GRAY),
        "bone" => LutColormap::from_segments(name, &BONE),
        // sqrt((2 * gray + hot) / 3)
        "pink" => LutColormap::from_fn(name, |x| {
            let pink = |hot: f32| ((2.0 * x + hot) / 3.0).sqrt();
            [
                pink(eval_segments(HOT.red, x)),
                pink(eval_segments(HOT.green, x)),
                pink(eval_segments(HOT.blue, x)),
            ]
        }),
        "spring" => LutColormap::from_segments(name, &SPRING),
        "summer" => LutColormap::from_segments(name, &SUMMER),
        "autumn" => LutColormap::from_segments(name, &AUTUMN),
        "winter" => LutColormap::from_segments(name, &WINTER),
        "cool" => LutColormap::from_segments(name, &COOL),
        "Wistia" => {
            let anchors: Vec<_> = WISTIA.iter().map(|&c| super::lut::hex_to_rgb(c)).collect();
            LutColormap::from_anchors(name, &anchors)
        }
        "hot" => LutColormap::from_segments(name, &HOT),
        "afmhot" => from_rgb_formulae(name, (34, 35, 36)),
        "gist_heat" => LutColormap::from_channels(
            name,
            |x| 1.5 * x,
            |x| 2.0 * x - 1.0,
            |x| 4.0 * x - 3.0,
        ),
        "copper" => LutColormap::from_segments(name, &COPPER),
        _ => return None,
    };
    Some(colormap)
}
