//! Snapshot decoding errors
//!
//! Only the boundary with the extraction collaborator can fail; everything
//! downstream of a decoded snapshot is total.

use thiserror::Error;

/// Errors raised while turning a raw snapshot into entries
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot text is not valid JSON for the expected shape
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries resolved to the same identifier
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
