//! Math utilities.

use cfg_if::cfg_if;

mod axis;
mod coord;
mod products;
mod vector;

pub use axis::*;
pub use coord::*;
pub use products::*;
pub use vector::*;

cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Floating point type used for magnitudes.
        pub type Real = f64;
    } else {
        /// Floating point type used for magnitudes.
        pub type Real = f32;
    }
}

/// Number of coordinates of a two-dimensional vector.
pub const DIM2: usize = 2;

/// Number of coordinates of a three-dimensional vector.
pub const DIM3: usize = 3;

/// Absolute tolerance used when comparing coordinates for equality.
pub const TOLERANCE: f64 = 1.0e-7;

/// Equality test of two numbers with respect to [`TOLERANCE`].
///
/// Two numbers are considered equal if their absolute difference is strictly
/// less than the tolerance.
#[inline]
pub fn is_equal(a: f64, b: f64) -> bool { approx_eq_eps(a, b, TOLERANCE) }

/// Equality test of two numbers with a caller-supplied absolute tolerance.
///
/// # Arguments
///
/// * `a`: The first number.
/// * `b`: The second number.
/// * `eps`: Upper bound (exclusive) on the absolute difference.
///
/// returns: bool
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() < eps }
