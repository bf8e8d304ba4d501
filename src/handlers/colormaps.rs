//! Colormap catalog endpoint handlers.
//!
//! `GET /colormaps` lists the catalog for populating selectors;
//! `GET /colormaps/:name` describes a single colormap.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::catalog::CategoryGroup;
use crate::describe::{describe, ColormapInfo};
use crate::logging::generate_request_id;
use crate::state::AppState;

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct ColormapListResponse {
    /// Colormaps grouped by category, in display order
    pub categories: Vec<CategoryGroup>,
    /// Flat list of every colormap name, in display order
    pub colormaps: Vec<String>,
}

/// Colormap description response
#[derive(Debug, Serialize)]
pub struct ColormapInfoResponse {
    #[serde(flatten)]
    pub details: ColormapInfo,
    /// The description as multi-line text
    pub info: String,
}

/// Handle GET /colormaps requests
pub async fn list_colormaps_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ColormapListResponse> {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/colormaps",
        request_id = %request_id,
        "Processing colormap list request"
    );

    let response = ColormapListResponse {
        categories: state.catalog.categories().to_vec(),
        colormaps: state
            .catalog
            .list_all()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    info!(
        endpoint = "/colormaps",
        request_id = %request_id,
        colormap_count = response.colormaps.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Colormap list request successful"
    );

    Json(response)
}

/// Handle GET /colormaps/:name requests
pub async fn describe_colormap_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<ColormapInfoResponse> {
    let request_id = generate_request_id();

    let details = describe(&state.catalog, &name);

    debug!(
        endpoint = "/colormaps/:name",
        request_id = %request_id,
        colormap = %name,
        category = details.category,
        "Described colormap"
    );

    let info = details.to_string();
    Json(ColormapInfoResponse { details, info })
}
