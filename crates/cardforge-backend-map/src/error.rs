//! Error types for map rendering.

use thiserror::Error;

/// Errors produced by the map backend.
#[derive(Debug, Error)]
pub enum MapError {
    /// I/O error reading region data or writing images.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The region file was not valid GeoJSON.
    #[error("GeoJSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding failed.
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    /// A requested region is not present in the data.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// A region has no drawable geometry.
    #[error("region '{0}' has no polygon geometry")]
    EmptyGeometry(String),

    /// A flag download failed.
    #[error("flag fetch failed: {0}")]
    FlagFetch(String),
}
