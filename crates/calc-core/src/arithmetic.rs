//! # Arithmetic Module
//!
//! Stateless numeric helpers. Each function is a leaf: no shared state, no
//! allocation, no I/O.
//!
//! ## Failure Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Function        Rejects                    Error                       │
//! │  ─────────────   ────────────────────────   ─────────────────────────   │
//! │  add             (nothing)                  -                           │
//! │  divide          b == 0                     CoreError::DivisionByZero   │
//! │  find_max        empty slice                CoreError::EmptyList        │
//! │  factorial       n < 0                      CoreError::NegativeFactorial│
//! │                  n > MAX_FACTORIAL_INPUT    CoreError::FactorialOverflow│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::arithmetic::{add, divide, factorial, find_max};
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(divide(7, 2).unwrap(), 3.5);
//! assert_eq!(find_max(&[3, 1, 4, 1, 5]).unwrap(), 5);
//! assert_eq!(factorial(5).unwrap(), 120);
//! ```

use std::ops::Add;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::MAX_FACTORIAL_INPUT;

// =============================================================================
// Addition
// =============================================================================

/// Adds two numbers.
///
/// Works for any type with an `Add` impl, so integers and floats alike.
///
/// ## Example
/// ```rust
/// use calc_core::arithmetic::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(0.5, 0.25), 0.75);
/// assert_eq!(add(-4_i64, 4), 0);
/// ```
#[inline]
pub fn add<T>(a: T, b: T) -> T
where
    T: Add<Output = T>,
{
    a + b
}

// =============================================================================
// Division
// =============================================================================

/// Divides `a` by `b`, always producing a floating-point quotient.
///
/// Integer inputs are widened to `f64` first, so `divide(7, 2)` is `3.5`
/// rather than truncating.
///
/// ## Errors
/// [`CoreError::DivisionByZero`] when `b` is zero (including `-0.0`).
///
/// ## Example
/// ```rust
/// use calc_core::arithmetic::divide;
///
/// assert_eq!(divide(10, 4).unwrap(), 2.5);
/// assert_eq!(divide(1.0, -2.0).unwrap(), -0.5);
///
/// let err = divide(1, 0).unwrap_err();
/// assert_eq!(err.to_string(), "Cannot divide by zero");
/// ```
pub fn divide<T>(a: T, b: T) -> CoreResult<f64>
where
    T: Into<f64>,
{
    let (a, b) = (a.into(), b.into());

    if b == 0.0 {
        debug!(dividend = a, "rejected division by zero");
        return Err(CoreError::DivisionByZero);
    }

    Ok(a / b)
}

// =============================================================================
// Maximum
// =============================================================================

/// Returns the largest element of `numbers`.
///
/// ## Rules
/// - The first element seeds the running maximum
/// - A later element replaces it only if it compares strictly greater
///
/// Ties therefore return the (equal) value already held, and values that
/// don't compare at all (`NaN`) never displace an earlier maximum.
///
/// ## Errors
/// [`CoreError::EmptyList`] when `numbers` is empty.
///
/// ## Example
/// ```rust
/// use calc_core::arithmetic::find_max;
///
/// assert_eq!(find_max(&[3, 1, 4, 1, 5]).unwrap(), 5);
/// assert_eq!(find_max(&[-2.5, -7.0]).unwrap(), -2.5);
/// assert!(find_max::<i32>(&[]).is_err());
/// ```
pub fn find_max<T>(numbers: &[T]) -> CoreResult<T>
where
    T: PartialOrd + Copy,
{
    let (&first, rest) = numbers.split_first().ok_or_else(|| {
        debug!("rejected empty list in find_max");
        CoreError::EmptyList
    })?;

    Ok(rest
        .iter()
        .fold(first, |max, &n| if n > max { n } else { max }))
}

// =============================================================================
// Factorial
// =============================================================================

/// Computes `n!`.
///
/// Iterative, so large inputs cost a loop rather than stack depth.
/// `0!` and `1!` are both `1`.
///
/// ## Errors
/// - [`CoreError::NegativeFactorial`] when `n < 0`
/// - [`CoreError::FactorialOverflow`] when `n > MAX_FACTORIAL_INPUT` (34),
///   the largest input whose factorial fits in a `u128`
///
/// ## Example
/// ```rust
/// use calc_core::arithmetic::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert_eq!(
///     factorial(-1).unwrap_err().to_string(),
///     "Factorial not defined for negative numbers"
/// );
/// ```
pub fn factorial(n: i64) -> CoreResult<u128> {
    if n < 0 {
        debug!(n, "rejected negative factorial input");
        return Err(CoreError::NegativeFactorial { n });
    }

    if n > MAX_FACTORIAL_INPUT {
        debug!(n, max = MAX_FACTORIAL_INPUT, "factorial input too large");
        return Err(CoreError::FactorialOverflow { n });
    }

    // n is within 0..=MAX_FACTORIAL_INPUT here, so the product cannot overflow.
    Ok((2..=n as u128).product())
}

// =============================================================================
// Unit Tests
// =============================================================================
