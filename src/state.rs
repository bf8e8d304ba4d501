//! Application state management for recolor.
//!
//! This module defines the shared state that is passed to all handlers:
//! the validated configuration and the colormap catalog built at startup.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{RecolorError, Result};
use crate::transform::OutputFormat;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Colormap catalog
    pub catalog: Catalog,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, catalog: Catalog) -> Arc<Self> {
        Arc::new(Self::new(config, catalog))
    }

    /// Colormap to use when a request names none
    pub fn default_colormap(&self) -> &str {
        &self.config.image.default_colormap
    }

    /// Output format to use when a request names none
    pub fn default_format(&self) -> Result<OutputFormat> {
        self.config.default_format()
    }

    /// Validate that the application state is consistent and ready for use
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(RecolorError::Config {
                message: "Colormap catalog is empty".to_string(),
            });
        }

        self.config.validate()
    }
}
