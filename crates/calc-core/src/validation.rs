//! # Validation Module
//!
//! String input checks.
//!
//! ## Email Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "user@example.com"                                                     │
//! │       │                                                                 │
//! │       ├── empty? ─────────────────────────► Required                    │
//! │       │                                                                 │
//! │       ├── missing '@' or '.'? ────────────► InvalidFormat               │
//! │       │                                                                 │
//! │       ├── split on '@' != 2 parts? ───────► InvalidFormat               │
//! │       │                                                                 │
//! │       ├── domain part has no '.'? ────────► InvalidFormat               │
//! │       │                                                                 │
//! │       └── OK                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is a syntactic approximation, NOT RFC 5322. Existing callers depend
//! on exactly these rules, so `"@b.com"` and `"a@.com"` are accepted.
//!
//! ## Usage
//! ```rust
//! use calc_core::validation::{is_valid_email, validate_email};
//!
//! assert!(is_valid_email("a@b.com"));
//! assert!(validate_email("a@bcom").is_err());
//! ```

use tracing::debug;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const EMAIL_FIELD: &str = "email";

// =============================================================================
// Email Validators
// =============================================================================

/// Checks an email address against the minimal structural rule.
///
/// ## Example
/// ```rust
/// use calc_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email(""));
/// assert!(!is_valid_email("no-at-sign.com"));
/// assert!(!is_valid_email("a@b@c.com"));
/// assert!(!is_valid_email("a@bcom"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

/// Validates an email address, reporting which rule failed.
///
/// Same rule as [`is_valid_email`]. The input is not trimmed.
///
/// ## Example
/// ```rust
/// use calc_core::validation::validate_email;
/// use calc_core::ValidationError;
///
/// assert!(validate_email("a@b.com").is_ok());
/// assert!(matches!(
///     validate_email(""),
///     Err(ValidationError::Required { .. })
/// ));
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: EMAIL_FIELD.to_string(),
        });
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(invalid_email("must contain '@' and '.'"));
    }

    let domain = match email.split_once('@') {
        Some((_, domain)) if !domain.contains('@') => domain,
        _ => return Err(invalid_email("must contain exactly one '@'")),
    };

    if !domain.contains('.') {
        return Err(invalid_email("domain must contain '.'"));
    }

    Ok(())
}

fn invalid_email(reason: &str) -> ValidationError {
    debug!(reason, "rejected email");
    ValidationError::InvalidFormat {
        field: EMAIL_FIELD.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
