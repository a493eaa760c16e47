//! Fixtures and float assertions shared by the TCRS test suites.
//!
//! Pull it in as a dev-dependency by path and import what a test needs:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, extent, position};
//! ```

pub mod fixtures;

pub use fixtures::*;

/// Assert two numbers differ by no more than a tolerance.
///
/// Operands are widened to `f64`. An optional trailing format string is
/// appended to the panic message.
///
/// ```ignore
/// assert_approx_eq!(p.x, 9720828.004, 0.01);
/// assert_approx_eq!(p.y, 12017718.024, 0.01, "zoom {}", zoom);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {
        $crate::assert_approx_eq!($actual, $expected, $tolerance, "")
    };
    ($actual:expr, $expected:expr, $tolerance:expr, $($msg:tt)+) => {{
        let (actual, expected, tolerance) = ($actual as f64, $expected as f64, $tolerance as f64);
        let delta = (actual - expected).abs();
        if !(delta <= tolerance) {
            panic!(
                "assertion failed: {} is not within {} of {} (delta {}) {}",
                actual,
                tolerance,
                expected,
                delta,
                format_args!($($msg)+)
            );
        }
    }};
}

/// [`assert_approx_eq!`] on both members of an `(x, y)` pair.
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($ax:expr, $ay:expr), ($ex:expr, $ey:expr), $tolerance:expr) => {{
        $crate::assert_approx_eq!($ax, $ex, $tolerance, "(x)");
        $crate::assert_approx_eq!($ay, $ey, $tolerance, "(y)");
    }};
}

/// Assert a sequence of `f64` never goes down, e.g. tile distances from a
/// query centre.
#[macro_export]
macro_rules! assert_non_decreasing {
    ($values:expr) => {{
        let values: Vec<f64> = $values.into_iter().collect();
        if let Some(i) = values.windows(2).position(|w| w[1] < w[0]) {
            panic!(
                "sequence decreases at index {}: {} then {} in {:?}",
                i + 1,
                values[i],
                values[i + 1],
                values
            );
        }
    }};
}
