//! # Calculator Demo
//!
//! Runs every calc-core operation once with logging switched on.
//!
//! ## Usage
//! ```bash
//! # Default filter: info,calc_core=debug
//! cargo run -p calc-core --bin calc-demo
//!
//! # Quieter
//! RUST_LOG=warn cargo run -p calc-core --bin calc-demo
//! ```

use calc_core::{add, divide, factorial, find_max, is_valid_email, Calculator, CoreError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!(sum = add(2, 3), "add(2, 3)");
    info!(quotient = divide(7, 2)?, "divide(7, 2)");
    info!(max = find_max(&[3, 1, 4, 1, 5])?, "find_max([3, 1, 4, 1, 5])");
    info!(value = %factorial(5)?, "factorial(5)");

    for email in ["a@b.com", "", "no-at-sign.com", "a@b@c.com", "a@bcom"] {
        info!(email, valid = is_valid_email(email), "is_valid_email");
    }

    // The three rejected inputs, reported rather than propagated.
    let rejected: [(&str, Result<(), CoreError>); 3] = [
        ("divide(1, 0)", divide(1, 0).map(drop)),
        ("find_max([])", find_max::<i32>(&[]).map(drop)),
        ("factorial(-1)", factorial(-1).map(drop)),
    ];
    for (call, outcome) in rejected {
        if let Err(e) = outcome {
            warn!(kind = %e.kind(), error = %e, "{call}");
        }
    }

    let mut calc = Calculator::new();
    calc.add(5.0);
    calc.subtract(2.0);
    calc.add(10.0);
    info!(snapshot = %serde_json::to_string(&calc)?, "calculator after add/subtract/add");
    calc.reset();
    info!(result = calc.result(), "calculator after reset");

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - Default: INFO, with DEBUG for calc_core
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,calc_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
