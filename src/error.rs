//! Error types for the recolor application.
//!
//! A single error enum covers the domain failures of the transform
//! (unknown colormap, undecodable image) and the ambient failures of the
//! server around it.

use thiserror::Error;

/// The main error type for recolor operations.
#[derive(Error, Debug)]
pub enum RecolorError {
    /// The colormap name does not resolve to a registered colormap
    #[error("Unknown colormap: {name}")]
    UnknownColormap { name: String },

    /// The input could not be decoded or converted to grayscale
    #[error("Invalid image: {message}")]
    InvalidImage { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Output encoding errors
    #[error("Image encoding error: {message}")]
    ImageEncoding { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with RecolorError
pub type Result<T> = std::result::Result<T, RecolorError>;
