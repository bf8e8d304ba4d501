//! HTTP request handlers for the recolor API.
//!
//! This module contains all the endpoint handlers for the web server and
//! the router that wires them together.

pub mod apply;
pub mod colormaps;
pub mod heartbeat;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use apply::apply_handler;
pub use colormaps::{describe_colormap_handler, list_colormaps_handler};
pub use heartbeat::heartbeat_handler;

use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.image.max_upload_bytes;

    Router::new()
        .route("/heartbeat", get(heartbeat_handler))
        .route("/colormaps", get(list_colormaps_handler))
        .route("/colormaps/:name", get(describe_colormap_handler))
        .route("/apply", post(apply_handler))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use image::{GenericImageView, GrayImage, ImageFormat, Luma};
    use std::io::Cursor;
    use tower::ServiceExt;

    fn test_router(config: Config) -> Router {
        router(AppState::new_shared(config, Catalog::builtin()))
    }

    fn png_body(width: u32, height: u32) -> Vec<u8> {
        let gray = GrayImage::from_fn(width, height, |x, _| Luma([(x * 40) as u8]));
        let mut buffer = Cursor::new(Vec::new());
        gray.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[tokio::test]
    async fn test_apply_route() {
        let response = test_router(Config::default())
            .oneshot(
                Request::post("/apply?colormap=jet")
                    .body(Body::from(png_body(5, 3)))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "image/png");
        assert_eq!(response.headers()["x-colormap"], "jet");
        assert_eq!(response.headers()["x-colormap-category"], "Miscellaneous");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let image = image::load_from_memory(&bytes).unwrap();
        assert_eq!(image.dimensions(), (5, 3));
    }

    #[tokio::test]
    async fn test_apply_uses_default_colormap() {
        let response = test_router(Config::default())
            .oneshot(
                Request::post("/apply")
                    .body(Body::from(png_body(2, 2)))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-colormap"], "viridis");
    }

    #[tokio::test]
    async fn test_body_limit() {
        let mut config = Config::default();
        config.image.max_upload_bytes = 16;

        let response = test_router(config)
            .oneshot(
                Request::post("/apply")
                    .body(Body::from(png_body(32, 32)))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = test_router(Config::default())
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
