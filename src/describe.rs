//! Human-readable colormap descriptions.

use serde::Serialize;
use std::fmt;

use crate::catalog::{Catalog, ColormapCategory, UNKNOWN_CATEGORY};

/// Description of a colormap, rendered as multi-line text by `Display`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColormapInfo {
    pub name: String,
    pub category: &'static str,
    pub perceptually_uniform: bool,
    pub reversible: bool,
    pub recommended_use: &'static str,
}

/// Recommended use for a category; `None` stands for names outside the catalog
pub fn recommended_use(category: Option<ColormapCategory>) -> &'static str {
    match category {
        Some(ColormapCategory::Sequential | ColormapCategory::Sequential2) => {
            "Representing ordered data that progresses from low to high"
        }
        Some(ColormapCategory::Diverging) => "Representing data with a critical middle value",
        Some(ColormapCategory::Cyclic) => "Representing data that wraps around at the endpoints",
        Some(ColormapCategory::Qualitative) => "Representing categorical data",
        _ => "Varies depending on the specific colormap",
    }
}

/// Describe a colormap. Never fails: names outside the catalog are
/// described with the `Unknown` category.
pub fn describe(catalog: &Catalog, name: &str) -> ColormapInfo {
    let entry = catalog.entry(name);
    let category = entry.map(|e| e.category);

    ColormapInfo {
        name: name.to_string(),
        category: category.map(ColormapCategory::label).unwrap_or(UNKNOWN_CATEGORY),
        perceptually_uniform: category == Some(ColormapCategory::PerceptuallyUniformSequential),
        reversible: entry.is_some_and(|e| e.reversible),
        recommended_use: recommended_use(category),
    }
}

impl fmt::Display for ColormapInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Colormap: {}", self.name)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Is perceptually uniform: {}", yes_no(self.perceptually_uniform))?;
        writeln!(f, "Reversible: {}", yes_no(self.reversible))?;
        write!(f, "Recommended use: {}", self.recommended_use)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
