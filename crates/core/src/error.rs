//! Error types shared across the nfp-orbit crates.

use thiserror::Error;

/// Errors produced while preparing or processing sliding geometry.
#[derive(Debug, Error)]
pub enum Error {
    /// A polygon ring failed validation (too few vertices, duplicate
    /// consecutive vertices, zero area).
    #[error("invalid ring: {0}")]
    InvalidRing(String),

    /// A touching point referenced a vertex index outside its ring.
    #[error("invalid touching point: {0}")]
    InvalidTouchingPoint(String),

    /// An internal invariant was violated. Indicates a bug.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
