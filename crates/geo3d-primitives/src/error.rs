//! Error types for geometry construction and queries.

use thiserror::Error;

/// Errors that can occur when building or querying primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A query was given no operand to measure against.
    #[error("missing operand: {0}")]
    MissingOperand(&'static str),

    /// A line was requested without one or both endpoints.
    #[error("line requires both a start and an end point")]
    MissingEndpoint,

    /// Cube side length was zero, negative or not finite.
    #[error("side length must be positive and finite, got {0}")]
    InvalidSideLength(f64),
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
