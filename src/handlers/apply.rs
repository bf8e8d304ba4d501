//! Recolor endpoint handler.
//!
//! Accepts an uploaded image as the raw request body and returns it
//! recolored through the requested colormap, encoded as PNG or JPEG.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::colormaps;
use crate::error::{RecolorError, Result};
use crate::logging::{generate_request_id, log_request_error, log_timed_operation};
use crate::state::AppState;
use crate::transform::{apply_colormap, decode_image, encode_image, OutputFormat};

/// Query parameters for the apply endpoint
#[derive(Debug, Deserialize)]
pub struct ApplyQuery {
    /// Colormap name (e.g., viridis, jet, tab10)
    pub colormap: Option<String>,
    /// Output format (png or jpeg)
    pub format: Option<String>,
}

/// Handle POST /apply requests
pub async fn apply_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApplyQuery>,
    body: Bytes,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/apply",
        request_id = %request_id,
        colormap = ?params.colormap,
        format = ?params.format,
        body_bytes = body.len(),
        "Processing apply request"
    );

    match generate_apply_response(&state, &params, &body) {
        Ok(response) => {
            info!(
                endpoint = "/apply",
                request_id = %request_id,
                colormap = params.colormap.as_deref().unwrap_or(state.default_colormap()),
                body_bytes = body.len(),
                duration_ms = start_time.elapsed().as_millis() as u64,
                "Apply request successful"
            );
            response
        }
        Err(error) => {
            let params_str = format!(
                "colormap={}, format={}",
                params.colormap.as_deref().unwrap_or("default"),
                params.format.as_deref().unwrap_or("default")
            );
            log_request_error(&error, "/apply", &request_id, Some(&params_str));

            (
                error_status(&error),
                Json(serde_json::json!({
                    "error": error.to_string(),
                    "request_id": request_id
                })),
            )
                .into_response()
        }
    }
}

/// Status code reported for a failed apply request
pub fn error_status(error: &RecolorError) -> StatusCode {
    match error {
        RecolorError::UnknownColormap { .. } | RecolorError::InvalidParameter { .. } => {
            StatusCode::BAD_REQUEST
        }
        RecolorError::InvalidImage { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Helper function to generate the recolored image response
fn generate_apply_response(state: &AppState, params: &ApplyQuery, body: &[u8]) -> Result<Response> {
    let colormap_name = params
        .colormap
        .as_deref()
        .unwrap_or(state.default_colormap());

    let format = match params.format.as_deref() {
        Some(format) => format.parse::<OutputFormat>()?,
        None => state.default_format()?,
    };

    // Unknown names fail before the body is decoded
    if !colormaps::is_known(colormap_name) {
        return Err(RecolorError::UnknownColormap {
            name: colormap_name.to_string(),
        });
    }

    let image = log_timed_operation("decode_image", || decode_image(body))?;
    let (colored, info) = log_timed_operation("apply_colormap", || {
        apply_colormap(&state.catalog, &image, colormap_name)
    })?;
    let encoded = log_timed_operation("encode_image", || encode_image(&colored, format))?;

    debug!(
        colormap = %colormap_name,
        width = colored.width(),
        height = colored.height(),
        format = %format,
        encoded_bytes = encoded.len(),
        info = %info,
        "Image recolored"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(format.content_type()),
    );
    headers.insert(
        "x-colormap",
        HeaderValue::from_str(colormap_name).map_err(|e| RecolorError::InvalidParameter {
            param: "colormap".to_string(),
            message: e.to_string(),
        })?,
    );
    headers.insert(
        "x-colormap-category",
        HeaderValue::from_static(state.catalog.category_of(colormap_name)),
    );

    Ok((StatusCode::OK, headers, encoded).into_response())
}
