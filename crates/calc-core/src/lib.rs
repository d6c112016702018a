//! # calc-core: Arithmetic Helpers and a Running-Total Calculator
//!
//! Small, pure functions over numbers and strings, plus one stateful
//! accumulator. Nothing here touches the file system, the network, or a
//! clock.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          calc-core                                      │
//! │                                                                         │
//! │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐       │
//! │   │ arithmetic │  │ validation │  │ calculator │  │   error    │       │
//! │   │ add        │  │ is_valid_  │  │ Calculator │  │ CoreError  │       │
//! │   │ divide     │  │   email    │  │  add       │  │ Validation │       │
//! │   │ find_max   │  │ validate_  │  │  subtract  │  │   Error    │       │
//! │   │ factorial  │  │   email    │  │  reset     │  │ ErrorKind  │       │
//! │   └────────────┘  └────────────┘  └────────────┘  └────────────┘       │
//! │                                                                         │
//! │   NO I/O • NO SHARED STATE • ERRORS ARE VALUES                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`arithmetic`] - add, divide, find_max, factorial
//! - [`validation`] - email checks
//! - [`calculator`] - the [`Calculator`] accumulator
//! - [`error`] - error types
//!
//! ## Logging
//! Rejected inputs and calculator mutations emit `tracing` events at
//! `debug` level. This crate never installs a subscriber; that is left to
//! the binary (see `calc-demo`).
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{divide, factorial, Calculator, ErrorKind};
//!
//! assert_eq!(divide(9, 3).unwrap(), 3.0);
//!
//! let err = factorial(-2).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//!
//! let mut calc = Calculator::new();
//! calc.add(5.0);
//! assert_eq!(calc.result(), 5.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arithmetic;
pub mod calculator;
pub mod error;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use arithmetic::{add, divide, factorial, find_max};
pub use calculator::Calculator;
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use validation::{is_valid_email, validate_email, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest input accepted by [`factorial`].
///
/// 34! ≈ 2.95e38 is the last factorial below `u128::MAX` (≈ 3.40e38).
pub const MAX_FACTORIAL_INPUT: i64 = 34;
