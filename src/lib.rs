//! # recolor
//!
//! Recolor images through named matplotlib-style colormaps.
//!
//! An input image is reduced to 8-bit grayscale, every sample is mapped
//! through the selected colormap, and the result comes back as an RGB image
//! together with a short description of the colormap's category and
//! recommended use.
//!
//! ## Key Features
//!
//! - **83 named colormaps** in seven categories, plus reversed `<name>_r` variants
//! - **A fixed catalog** for populating selectors and describing colormaps
//! - **HTTP API** for uploading images and receiving recolored PNG/JPEG output
//!
//! ## Architecture
//!
//! - **Catalog**: immutable name-to-category table built once at startup
//! - **Colormaps**: lookup-table colormaps resolved by name
//! - **Transform**: grayscale conversion, colormap application, encoding
//! - **API Layer**: axum handlers sharing the catalog through application state
//!
//! ```no_run
//! use recolor::{apply_colormap, Catalog};
//!
//! # fn main() -> recolor::Result<()> {
//! let catalog = Catalog::builtin();
//! let input = image::open("photo.jpg").map_err(|e| recolor::RecolorError::InvalidImage {
//!     message: e.to_string(),
//! })?;
//! let (colored, info) = apply_colormap(&catalog, &input, "viridis")?;
//! println!("{}x{}\n{}", colored.width(), colored.height(), info);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod colormaps;
pub mod config;
pub mod describe;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;
pub mod transform;

pub use catalog::{Catalog, CatalogEntry, ColormapCategory};
pub use config::Config;
pub use describe::{describe, ColormapInfo};
pub use error::{RecolorError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_catalog_stats, log_error,
    log_request_error, log_timed_operation,
};
pub use state::AppState;
pub use transform::{
    apply_colormap, colorize, decode_image, encode_image, to_grayscale, OutputFormat,
};
