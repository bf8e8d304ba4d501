//! Logging utilities for the recolor server.
//!
//! This module provides structured logging functionality to make logs more
//! searchable, analyzable, and useful for production deployments.

use std::time::Instant;
use tracing::{debug, error, info, Level};

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::RecolorError;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    let response_formatter = DefaultOnResponse::new()
        .level(Level::DEBUG)
        .latency_unit(LatencyUnit::Micros);

    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(true),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(response_formatter)
}

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = Uuid::new_v4();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    let duration = start.elapsed();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = duration.as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log a summary of the loaded colormap catalog
pub fn log_catalog_stats(catalog: &Catalog) {
    let groups = catalog
        .categories()
        .iter()
        .map(|group| format!("{}={}", group.category, group.colormaps.len()))
        .collect::<Vec<_>>()
        .join(", ");

    info!(
        operation = "catalog_load",
        colormap_count = catalog.len(),
        category_count = catalog.categories().len(),
        categories = %groups,
        "Colormap catalog ready"
    );
}

/// Log an error with context
pub fn log_error(error: &RecolorError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = error_kind(error),
        "Error occurred"
    );
}

/// Log an error that occurred during request processing
pub fn log_request_error(
    error: &RecolorError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    error!(
        error = %error,
        endpoint = endpoint,
        request_id = request_id,
        params = params.unwrap_or("none"),
        error_type = error_kind(error),
        "Request processing error"
    );
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Short variant name used as a log field
fn error_kind(error: &RecolorError) -> &'static str {
    match error {
        RecolorError::UnknownColormap { .. } => "unknown_colormap",
        RecolorError::InvalidImage { .. } => "invalid_image",
        RecolorError::InvalidParameter { .. } => "invalid_parameter",
        RecolorError::ImageEncoding { .. } => "image_encoding",
        RecolorError::Io(_) => "io",
        RecolorError::Config { .. } => "config",
        RecolorError::Json(_) => "json",
        RecolorError::Server { .. } => "server",
    }
}
