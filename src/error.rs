//! Error types for dualis operations.

use thiserror::Error;

/// Errors that can occur while triangulating or building a Voronoi diagram.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DualisError {
    /// Three vertices are (nearly) collinear, so the circumcircle is undefined.
    #[error("degenerate triangle: vertices are collinear")]
    DegenerateTriangle,

    /// The input cannot be triangulated as given.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DualisError>;
