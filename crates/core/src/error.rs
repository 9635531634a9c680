//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable user-facing failure; the presentation layer
/// turns them into error dialogs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (blank name, non-positive price, bad number).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product with this name is already stocked.
    #[error("product '{0}' already exists")]
    DuplicateName(String),

    /// No product with this name.
    #[error("product '{0}' not found")]
    NotFound(String),

    /// Removing more units than are in stock.
    #[error("insufficient stock for '{name}' (available: {available}, requested: {requested})")]
    InsufficientStock {
        name: String,
        available: u64,
        requested: u64,
    },

    /// A domain invariant was violated (e.g. stock value no longer representable).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient_stock(name: impl Into<String>, available: u64, requested: u64) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            available,
            requested,
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
