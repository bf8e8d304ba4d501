//! The colormap catalog.
//!
//! An ordered, immutable grouping of colormap names by category. The catalog
//! is built once at startup and handed to the transform, the describe
//! operation and the HTTP state; it never changes afterwards.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use crate::colormaps;

/// Label reported for names outside the catalog
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Category of a colormap, describing the data semantics it is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColormapCategory {
    PerceptuallyUniformSequential,
    Sequential,
    Sequential2,
    Diverging,
    Cyclic,
    Qualitative,
    Miscellaneous,
}

impl ColormapCategory {
    /// Human-readable category label
    pub fn label(self) -> &'static str {
        match self {
            Self::PerceptuallyUniformSequential => "Perceptually Uniform Sequential",
            Self::Sequential => "Sequential",
            Self::Sequential2 => "Sequential (2)",
            Self::Diverging => "Diverging",
            Self::Cyclic => "Cyclic",
            Self::Qualitative => "Qualitative",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for ColormapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ColormapCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Built-in category table, in display order
const BUILTIN: &[(ColormapCategory, &[&str])] = &[
    (
        ColormapCategory::PerceptuallyUniformSequential,
        &["viridis", "plasma", "inferno", "magma", "cividis"],
    ),
    (
        ColormapCategory::Sequential,
        &[
            "Greys", "Purples", "Blues", "Greens", "Oranges", "Reds", "YlOrBr", "YlOrRd", "OrRd",
            "PuRd", "RdPu", "BuPu", "GnBu", "PuBu", "YlGnBu", "PuBuGn", "BuGn", "YlGn",
        ],
    ),
    (
        ColormapCategory::Sequential2,
        &[
            "binary", "gist_yarg", "gist_gray", "gray", "bone", "pink", "spring", "summer",
            "autumn", "winter", "cool", "Wistia", "hot", "afmhot", "gist_heat", "copper",
        ],
    ),
    (
        ColormapCategory::Diverging,
        &[
            "PiYG", "PRGn", "BrBG", "PuOr", "RdGy", "RdBu", "RdYlBu", "RdYlGn", "Spectral",
            "coolwarm", "bwr", "seismic",
        ],
    ),
    (
        ColormapCategory::Cyclic,
        &["twilight", "twilight_shifted", "hsv"],
    ),
    (
        ColormapCategory::Qualitative,
        &[
            "Pastel1", "Pastel2", "Paired", "Accent", "Dark2", "Set1", "Set2", "Set3", "tab10",
            "tab20", "tab20b", "tab20c",
        ],
    ),
    (
        ColormapCategory::Miscellaneous,
        &[
            "flag", "prism", "ocean", "gist_earth", "terrain", "gist_stern", "gnuplot",
            "gnuplot2", "CMRmap", "cubehelix", "brg", "gist_rainbow", "rainbow", "jet", "turbo",
            "nipy_spectral", "gist_ncar",
        ],
    ),
];

/// A single catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Colormap name, as accepted by the colormap registry
    pub name: String,
    /// Category the colormap is listed under
    pub category: ColormapCategory,
    /// Whether a reversed `<name>_r` variant is available
    pub reversible: bool,
}

/// One category with its colormaps, in declared order
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: ColormapCategory,
    pub colormaps: Vec<String>,
}

/// Immutable name-to-category catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog of matplotlib colormap names
    pub fn builtin() -> Self {
        Self::from_groups(BUILTIN.iter().map(|(category, names)| {
            (*category, names.iter().map(|n| n.to_string()).collect())
        }))
    }

    /// Build a catalog from ordered `(category, names)` groups.
    ///
    /// A name listed under more than one category keeps its first category
    /// for reverse lookup.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (ColormapCategory, Vec<String>)>,
    {
        let mut catalog = Self {
            groups: Vec::new(),
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (category, names) in groups {
            for name in &names {
                if catalog.index.contains_key(name) {
                    warn!(
                        colormap = %name,
                        category = %category,
                        "Colormap listed in more than one category"
                    );
                    continue;
                }
                let reversible = colormaps::is_known(&format!("{}_r", name));
                catalog.index.insert(name.clone(), catalog.entries.len());
                catalog.entries.push(CatalogEntry {
                    name: name.clone(),
                    category,
                    reversible,
                });
            }
            catalog.groups.push(CategoryGroup {
                category,
                colormaps: names,
            });
        }

        catalog
    }

    /// All colormap names in category order, then declared order
    pub fn list_all(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|group| group.colormaps.iter().map(String::as_str))
            .collect()
    }

    /// Category label of a colormap, or `"Unknown"` for names outside the catalog
    pub fn category_of(&self, name: &str) -> &'static str {
        self.category(name)
            .map(ColormapCategory::label)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Category of a colormap, if it is in the catalog
    pub fn category(&self, name: &str) -> Option<ColormapCategory> {
        self.entry(name).map(|entry| entry.category)
    }

    /// Catalog entry for a colormap
    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Category groups in display order
    pub fn categories(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Number of distinct colormaps
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_all_order() {
        let catalog = Catalog::builtin();
        let names = catalog.list_all();
        assert_eq!(names.len(), 83);
        assert_eq!(&names[..5], &["viridis", "plasma", "inferno", "magma", "cividis"]);
        assert_eq!(names[5], "Greys");
        assert_eq!(names.last(), Some(&"gist_ncar"));
    }

    #[test]
    fn test_category_of() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_of("viridis"), "Perceptually Uniform Sequential");
        assert_eq!(catalog.category_of("gray"), "Sequential (2)");
        assert_eq!(catalog.category_of("coolwarm"), "Diverging");
        assert_eq!(catalog.category_of("tab10"), "Qualitative");
        assert_eq!(catalog.category_of("bogus"), "Unknown");
        assert_eq!(catalog.category_of(""), "Unknown");
        // Reversed variants resolve as colormaps but are not catalog entries
        assert_eq!(catalog.category_of("viridis_r"), "Unknown");
    }

    #[test]
    fn test_every_entry_resolves_and_reverses() {
        let catalog = Catalog::builtin();
        for name in catalog.list_all() {
            assert!(colormaps::get_colormap(name).is_ok(), "{} does not resolve", name);
            assert!(catalog.entry(name).unwrap().reversible, "{} not reversible", name);
        }
    }

    #[test]
    fn test_duplicate_names_keep_first_category() {
        let catalog = Catalog::from_groups(vec![
            (ColormapCategory::Sequential, vec!["gray".to_string()]),
            (
                ColormapCategory::Miscellaneous,
                vec!["gray".to_string(), "jet".to_string()],
            ),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.category_of("gray"), "Sequential");
        assert_eq!(catalog.category("jet"), Some(ColormapCategory::Miscellaneous));
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&ColormapCategory::Sequential2).unwrap();
        assert_eq!(json, r#""Sequential (2)""#);
    }
}
