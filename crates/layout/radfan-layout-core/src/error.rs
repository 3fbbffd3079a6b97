//! Error types for the layout core.
//!
//! Geometry itself never fails; only configuration loading does.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("invalid layout config: {reason}")]
    InvalidConfig { reason: String },

    #[error("layout config json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
