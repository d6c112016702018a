//! Property-based tests for calc-core
//!
//! These tests check the algebraic guarantees of the public API over
//! generated inputs rather than hand-picked cases.

use calc_core::{
    add, divide, factorial, find_max, is_valid_email, Calculator, CoreError, ErrorKind,
    MAX_FACTORIAL_INPUT,
};
use proptest::prelude::*;

// ============================================================================
// Arithmetic
// ============================================================================

proptest! {
    /// Property: add is commutative for integers
    #[test]
    fn test_add_commutative_ints(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    /// Property: add is commutative for floats
    #[test]
    fn test_add_commutative_floats(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    /// Property: divide(a, b) * b recovers a within floating-point tolerance
    #[test]
    fn test_divide_inverts_multiplication(
        a in -1.0e6f64..1.0e6,
        b in (-1.0e6f64..1.0e6).prop_filter("non-zero divisor", |b| *b != 0.0),
    ) {
        let q = divide(a, b).unwrap();
        let tolerance = 1e-9 * a.abs().max(1.0);
        prop_assert!((q * b - a).abs() <= tolerance, "q={} b={} a={}", q, b, a);
    }

    /// Property: dividing by zero always fails, whatever the dividend
    #[test]
    fn test_divide_by_zero_always_fails(a in any::<i32>()) {
        let err = divide(a, 0).unwrap_err();
        prop_assert_eq!(&err, &CoreError::DivisionByZero);
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    /// Property: find_max returns an element that no other element exceeds
    #[test]
    fn test_find_max_is_true_maximum(numbers in prop::collection::vec(any::<i64>(), 1..64)) {
        let max = find_max(&numbers).unwrap();
        prop_assert!(numbers.contains(&max));
        prop_assert!(numbers.iter().all(|&n| n <= max));
        prop_assert_eq!(Some(&max), numbers.iter().max());
    }

    /// Property: n! = n * (n - 1)! across the whole representable range
    #[test]
    fn test_factorial_recurrence(n in 1i64..=MAX_FACTORIAL_INPUT) {
        let prev = factorial(n - 1).unwrap();
        prop_assert_eq!(factorial(n).unwrap(), prev * n as u128);
    }

    /// Property: every negative input is rejected with the same message
    #[test]
    fn test_factorial_rejects_negatives(n in i64::MIN..0) {
        let err = factorial(n).unwrap_err();
        prop_assert_eq!(err.to_string(), "Factorial not defined for negative numbers");
    }
}

// ============================================================================
// Validation
// ============================================================================

proptest! {
    /// Property: more than one '@' is never a valid email
    #[test]
    fn test_email_with_two_at_signs_is_invalid(
        local in "[a-z]{0,8}",
        middle in "[a-z.]{0,8}",
        domain in "[a-z]{1,8}\\.[a-z]{2,3}",
    ) {
        let email = format!("{local}@{middle}@{domain}");
        prop_assert!(!is_valid_email(&email));
    }

    /// Property: one '@' followed by a dotted domain is always accepted
    #[test]
    fn test_simple_email_shape_is_valid(
        local in "[a-z0-9._]{0,12}",
        domain in "[a-z]{1,8}\\.[a-z]{2,3}",
    ) {
        let email = format!("{local}@{domain}");
        prop_assert!(is_valid_email(&email));
    }
}

// ============================================================================
// Calculator
// ============================================================================

proptest! {
    /// Property: result always equals the sum of all applied deltas
    #[test]
    fn test_calculator_tracks_sum_of_deltas(
        deltas in prop::collection::vec((any::<bool>(), -1_000i32..1_000), 0..50),
    ) {
        let mut calc = Calculator::new();
        let mut expected = 0.0f64;

        for (is_add, value) in deltas {
            let value = f64::from(value);
            let returned = if is_add {
                expected += value;
                calc.add(value)
            } else {
                expected -= value;
                calc.subtract(value)
            };
            prop_assert_eq!(returned, expected);
        }

        prop_assert_eq!(calc.result(), expected);
        prop_assert_eq!(calc.reset(), 0.0);
        prop_assert_eq!(calc.result(), 0.0);
    }
}
