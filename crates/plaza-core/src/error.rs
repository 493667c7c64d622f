//! # Structured Validation Errors
//!
//! Errors raised when domain values are rejected at construction or
//! deserialization time. Everything downstream of a constructed value is
//! total — filtering, sorting, and pagination over valid records cannot
//! fail — so this is the only error surface in `plaza-core`.

use thiserror::Error;

/// Errors during domain value validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Project identifier was empty or whitespace-only.
    #[error("invalid project id: must be a non-empty string")]
    InvalidProjectId,

    /// User identifier was empty or whitespace-only.
    #[error("invalid user id: must be a non-empty string")]
    InvalidUserId,
}
