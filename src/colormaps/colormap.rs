//! Colormap trait and the name registry.
//!
//! This module defines the common interface for all colormaps and resolves
//! colormap names. Names are case-sensitive; `<name>_r` resolves to the
//! reversed form of `<name>`.

use super::lut::LutColormap;
use super::{cyclic, diverging, miscellaneous, qualitative, sequential};
use crate::error::{RecolorError, Result};

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f32) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f32, min: f32, max: f32) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Get a colormap by name
pub fn get_colormap(name: &str) -> Result<Box<dyn Colormap>> {
    if let Some(colormap) = build(name) {
        return Ok(Box::new(colormap));
    }

    if let Some(colormap) = name.strip_suffix("_r").and_then(build) {
        return Ok(Box::new(colormap.reversed()));
    }

    Err(RecolorError::UnknownColormap {
        name: name.to_string(),
    })
}

/// Check whether a name resolves, without building the colormap
pub fn is_known(name: &str) -> bool {
    registered_names().any(|n| n == name)
        || name
            .strip_suffix("_r")
            .is_some_and(|base| registered_names().any(|n| n == base))
}

/// All base colormap names, grouped by defining module
pub fn registered_names() -> impl Iterator<Item = &'static str> {
    sequential::NAMES
        .iter()
        .chain(diverging::NAMES)
        .chain(cyclic::NAMES)
        .chain(qualitative::NAMES)
        .chain(miscellaneous::NAMES)
        .copied()
}

fn build(name: &str) -> Option<LutColormap> {
    sequential::build(name)
        .or_else(|| diverging::build(name))
        .or_else(|| cyclic::build(name))
        .or_else(|| qualitative::build(name))
        .or_else(|| miscellaneous::build(name))
}
