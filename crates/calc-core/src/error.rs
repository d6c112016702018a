//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError            - Rejected arguments (kind: InvalidArgument)     │
//! │  ├── DivisionByZero                                                    │
//! │  ├── EmptyList                                                         │
//! │  ├── NegativeFactorial                                                 │
//! │  ├── FactorialOverflow                                                 │
//! │  └── Validation(ValidationError)                                       │
//! │                                                                         │
//! │  ValidationError      - String input validation failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Compatibility
//! The display text of the first three variants is relied on by existing
//! callers and must stay exactly as written.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification of a [`CoreError`].
///
/// Every failure in this crate is a precondition violation, so there is
/// currently a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input violates a documented precondition.
    InvalidArgument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the arithmetic helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Divisor was zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// `find_max` was given no elements.
    #[error("List cannot be empty")]
    EmptyList,

    /// `factorial` was given a negative input.
    ///
    /// The offending value is kept for logging; it is not part of the
    /// message.
    #[error("Factorial not defined for negative numbers")]
    NegativeFactorial { n: i64 },

    /// `factorial` input is larger than [`crate::MAX_FACTORIAL_INPUT`].
    #[error("Factorial result overflows u128")]
    FactorialOverflow { n: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::DivisionByZero
            | CoreError::EmptyList
            | CoreError::NegativeFactorial { .. }
            | CoreError::FactorialOverflow { .. }
            | CoreError::Validation(_) => ErrorKind::InvalidArgument,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. an email without a domain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
