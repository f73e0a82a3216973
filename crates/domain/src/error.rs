//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! Runtime zone-level failures (a rejected subscription, an unmatched sensor
//! variable, a non-numeric dew point) are deliberately **not** errors: the
//! driver degrades and logs instead of propagating them.

/// Top-level error for the dewflow workspace.
#[derive(Debug, thiserror::Error)]
pub enum DewflowError {
    /// A domain invariant was violated while constructing a value.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A zone must carry a non-empty human-readable name.
    #[error("zone name must not be empty")]
    EmptyName,
    /// The temperature divisor scales a raw reading down; values below one
    /// would scale it up.
    #[error("temperature divisor must be at least 1")]
    DivisorBelowOne,
}
