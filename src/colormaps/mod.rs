//! Colormap implementations for image recoloring.
//!
//! This module provides matplotlib-compatible colormaps, materialized as
//! lookup tables and resolved by name.

pub mod colormap;
pub mod cyclic;
pub mod diverging;
pub mod lut;
pub mod miscellaneous;
pub mod qualitative;
pub mod sequential;

pub use colormap::{get_colormap, is_known, registered_names, Colormap};
pub use lut::{LutColormap, LUT_SIZE};
