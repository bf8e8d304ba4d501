//! Diverging colormaps (two-hue progression with center).
//!
//! These colormaps are suitable for data that diverges from a central value.

use colorgrad::preset;

use super::lut::{u8_to_rgb, LutColormap, Rgb};

/// Names defined in this module
pub const NAMES: &[&str] = &[
    "PiYG", "PRGn", "BrBG", "PuOr", "RdGy", "RdBu", "RdYlBu", "RdYlGn", "Spectral", "coolwarm",
    "bwr", "seismic",
];

/// Coolwarm colormap data (RGB triplets), blue to gray to red
const COOLWARM: [[u8; 3]; 32] = [
    [59, 76, 192], // Dark blue
    [68, 90, 204],
    [77, 104, 215],
    [87, 117, 225],
    [98, 130, 234],
    [108, 142, 241],
    [119, 154, 247],
    [130, 165, 251],
    [141, 176, 254],
    [152, 185, 255],
    [163, 194, 255],
    [174, 201, 253],
    [184, 208, 249],
    [194, 213, 244],
    [204, 217, 238],
    [213, 219, 230],
    [221, 221, 221], // Light gray in the middle
    [229, 216, 209],
    [236, 211, 197],
    [241, 204, 185],
    [245, 196, 173],
    [247, 187, 160],
    [247, 177, 148],
    [247, 166, 135],
    [244, 154, 123],
    [241, 141, 111],
    [236, 127, 99],
    [229, 112, 88],
    [222, 96, 77],
    [213, 80, 66],
    [203, 62, 56],
    [180, 4, 38], // Dark red
];

const BWR: [Rgb; 3] = [[0.0, 0.0, 1.0], [1.0, 1.0, 1.0], [1.0, 0.0, 0.0]];

const SEISMIC: [Rgb; 5] = [
    [0.0, 0.0, 0.3],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
];

/// Build a diverging colormap by name
pub fn build(name: &str) -> Option<LutColormap> {
    let colormap = match name {
        "PiYG" => LutColormap::from_gradient(name, preset::pi_yg()),
        "PRGn" => LutColormap::from_gradient(name, preset::pr_gn()),
        "BrBG" => LutColormap::from_gradient(name, preset::br_bg()),
        "PuOr" => LutColormap::from_gradient(name, preset::pu_or()),
        "RdGy" => LutColormap::from_gradient(name, preset::rd_gy()),
        "RdBu" => LutColormap::from_gradient(name, preset::rd_bu()),
        "RdYlBu" => LutColormap::from_gradient(name, preset::rd_yl_bu()),
        "RdYlGn" => LutColormap::from_gradient(name, preset::rd_yl_gn()),
        "Spectral" => LutColormap::from_gradient(name, preset::spectral()),
        "coolwarm" => {
            let anchors: Vec<Rgb> = COOLWARM.iter().copied().map(u8_to_rgb).collect();
            LutColormap::from_anchors(name, &anchors)
        }
        "bwr" => LutColormap::from_anchors(name, &BWR),
        "seismic" => LutColormap::from_anchors(name, &SEISMIC),
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
    fn test_coolwarm_bounds() {
        let colormap = build("coolwarm").unwrap();

        let blue = colormap.map_normalized(0.0);
        let red = colormap.map_normalized(1.0);

        // Coolwarm goes from blue to red
        assert!(blue[2] > blue[0]);
        assert!(red[0] > red[2]);

        // Middle should be close to light gray
        let middle = colormap.map_normalized(0.5);
        assert!(middle[0] > 200);
        assert!(middle[1] > 200);
        assert!(middle[2] > 200);
    }

    #[test]
    fn test_bwr_middle() {
        let colormap = build("bwr").unwrap();
        assert_eq!(colormap.map_normalized(0.0), [0, 0, 255, 255]);
        assert_eq!(colormap.map_normalized(1.0), [255, 0, 0, 255]);
        // The sample nearest the center is almost white
        let middle = colormap.map_normalized(0.5);
        assert!(middle.iter().all(|&c| c >= 250));
    }

    #[test]
    fn test_rdbu_runs_red_to_blue() {
        let colormap = build("RdBu").unwrap();
        let low = colormap.map_normalized(0.0);
        let high = colormap.map_normalized(1.0);
        assert!(low[0] > low[2]);
        assert!(high[2] > high[0]);
    }
}
