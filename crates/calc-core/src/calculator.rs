//! # Calculator
//!
//! A running total that callers push deltas into.
//!
//! ## State Changes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation          Result Change            Returns                    │
//! │  ─────────────      ─────────────────────    ───────────────            │
//! │  new()              result = 0               Calculator                 │
//! │  add(v)             result = result + v      new result                 │
//! │  subtract(v)        result = result - v      new result                 │
//! │  reset()            result = 0               0                          │
//! │  result()           (read only)              current result             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `result` is always the sum of every delta applied since construction or
//! the last `reset`.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

// =============================================================================
// Calculator
// =============================================================================

/// Accumulator over a single `f64`.
///
/// Serializes as `{"result": <number>}` so a running total can be
/// snapshotted and restored.
///
/// ## Example
/// ```rust
/// use calc_core::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(5.0), 5.0);
/// assert_eq!(calc.subtract(2.0), 3.0);
/// assert_eq!(calc.add(10.0), 13.0);
/// assert_eq!(calc.reset(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Calculator {
    result: f64,
}

impl Calculator {
    /// Creates a calculator with a result of zero.
    #[inline]
    pub const fn new() -> Self {
        Calculator { result: 0.0 }
    }

    /// Current accumulated value.
    #[inline]
    pub const fn result(&self) -> f64 {
        self.result
    }

    /// Adds `value` to the result and returns the new result.
    pub fn add(&mut self, value: f64) -> f64 {
        self.result += value;
        debug!(value, result = self.result, "calculator add");
        self.result
    }

    /// Subtracts `value` from the result and returns the new result.
    pub fn subtract(&mut self, value: f64) -> f64 {
        self.result -= value;
        debug!(value, result = self.result, "calculator subtract");
        self.result
    }

    /// Clears the result back to zero and returns it.
    pub fn reset(&mut self) -> f64 {
        debug!(previous = self.result, "calculator reset");
        self.result = 0.0;
        self.result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
