use crate::math::Real;
use num_traits::{Num, NumCast};
use std::fmt::{Debug, Display};

/// Arithmetic types usable as vector coordinates.
///
/// Implemented for all primitive integer and floating point types; using any
/// other type as coordinate is a compile error.
pub trait Coord:
    Num + NumCast + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Casts the coordinate to `f64`, rounding if the value is not
    /// representable.
    fn as_f64(self) -> f64;

    /// Casts the coordinate to [`Real`], rounding if the value is not
    /// representable.
    fn as_real(self) -> Real;
}

macro_rules! impl_coord {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                #[inline(always)]
                fn as_f64(self) -> f64 { self as f64 }

                #[inline(always)]
                fn as_real(self) -> Real { self as Real }
            }
        )*
    };
}

impl_coord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
