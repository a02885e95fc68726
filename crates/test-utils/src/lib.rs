//! Test helpers shared across the MOM6 plotting crates.
//!
//! - [`generators`]: synthetic labeled arrays laid out the way MOM6 writes them
//! - [`fixtures`]: domain extents, MOM6 name pairs, stand-in coastline rings
//! - float assertion macros: [`assert_approx_eq!`], [`assert_coords_approx_eq!`]
//!
//! Used only as a dev-dependency:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Assert two numbers differ by at most `epsilon`. Operands are compared as `f64`.
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(0.1 + 0.2, 0.3, 1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let (actual, expected, epsilon) = ($actual as f64, $expected as f64, $epsilon as f64);
        let diff = (actual - expected).abs();
        // NaN never compares within epsilon
        if !(diff <= epsilon) {
            panic!(
                "values differ: {} vs {} (|diff| = {}, epsilon = {})",
                actual, expected, diff, epsilon
            );
        }
    }};
}

/// Assert two `(x, y)` points match component-wise within `epsilon`.
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_within_epsilon() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_coords_approx_eq!((-70.0000001, 42.0), (-70.0, 42.0), 1e-6);
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn test_outside_epsilon() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn test_nan_never_matches() {
        assert_approx_eq!(f64::NAN, f64::NAN, 1.0);
    }
}
