use crate::{
    error::{Error, Result},
    math::{approx_eq_eps, cross_product_3d, dot_product, Axis, Coord, Real, DIM3, TOLERANCE},
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Write},
    ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

/// A fixed-size vector of `N` coordinates of the arithmetic type `T`.
///
/// The dimension is part of the type and never changes. Dimensions below two
/// are rejected when the vector type is instantiated:
///
/// ```compile_fail
/// # use scalegeom_base::Vector;
/// let v = Vector::new([1.0f32]);
/// ```
///
/// Equality is approximate: two vectors compare equal when every pair of
/// coordinates differs by less than [`TOLERANCE`]. Coordinates are compared
/// as `f64`, so integers beyond 2^53 that round to the same `f64` compare
/// equal.
///
/// Ordering is the strict dominance partial order: `a < b` only if every
/// coordinate of `a` is strictly less than the one of `b`. Dominance and
/// tolerance equality can overlap: two vectors closer than [`TOLERANCE`] may
/// be both `==` and `<`. In that case `partial_cmp` reports `Equal` and
/// `<=`/`>=` both hold.
///
/// The dimension defaults to three, so `Vector<f32>` is `Vector<f32, 3>`.
#[derive(Copy, Clone, Debug)]
pub struct Vector<T: Coord, const N: usize = DIM3>([T; N]);

/// Two-dimensional single precision vector.
pub type Vector2f = Vector<f32, 2>;
/// Three-dimensional single precision vector.
pub type Vector3f = Vector<f32, 3>;
/// Two-dimensional double precision vector.
pub type Vector2d = Vector<f64, 2>;
/// Three-dimensional double precision vector.
pub type Vector3d = Vector<f64, 3>;
/// Two-dimensional integer vector.
pub type Vector2i = Vector<i32, 2>;
/// Three-dimensional integer vector.
pub type Vector3i = Vector<i32, 3>;

/// Creates a two-dimensional vector.
#[inline]
pub const fn vec2<T: Coord>(x: T, y: T) -> Vector<T, 2> { Vector::new([x, y]) }

/// Creates a three-dimensional vector.
#[inline]
pub const fn vec3<T: Coord>(x: T, y: T, z: T) -> Vector<T, 3> { Vector::new([x, y, z]) }

impl<T: Coord, const N: usize> Vector<T, N> {
    const VALID_DIM: () = assert!(N >= 2, "Vector dimensions must be at least 2D");

    /// Creates a new vector from its coordinates.
    #[inline]
    pub const fn new(coords: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_DIM;
        Self(coords)
    }

    /// Creates a new vector with all coordinates set to zero.
    pub fn zeros() -> Self { Self::new([T::zero(); N]) }

    /// Creates a new vector with all coordinates set to the given value.
    pub fn splat(value: T) -> Self { Self::new([value; N]) }

    /// Returns the number of coordinates.
    pub const fn dim(&self) -> usize { N }

    /// Returns the coordinates as a slice.
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the coordinates as an array.
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Returns an iterator over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Returns the coordinate at the given index.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `index >= N`.
    pub fn at(&self, index: usize) -> Result<T> {
        self.0
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, N))
    }

    /// Sets the coordinate at the given index.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `index >= N`, in which case
    /// the vector is left untouched.
    pub fn assign(&mut self, index: usize, value: T) -> Result<()> {
        match self.0.get_mut(index) {
            Some(coord) => {
                *coord = value;
                Ok(())
            },
            None => Err(Error::out_of_range(index, N)),
        }
    }

    /// Returns the first coordinate.
    pub fn x(&self) -> T { self.0[0] }

    /// Returns the second coordinate.
    pub fn y(&self) -> T { self.0[1] }

    /// Returns the squared Euclidean norm, computed in floating point.
    pub fn magnitude_squared(&self) -> Real {
        self.0
            .iter()
            .map(|c| c.as_real())
            .fold(0.0, |sum, c| sum + c * c)
    }

    /// Returns the Euclidean norm, computed in floating point whatever the
    /// coordinate type is.
    ///
    /// Accumulated with `hypot`, so coordinates whose squares would overflow
    /// or underflow still give a finite nonzero norm.
    pub fn magnitude(&self) -> Real {
        self.0
            .iter()
            .fold(0.0 as Real, |norm, &c| norm.hypot(c.as_real()))
    }

    /// Returns the dot product with another vector.
    pub fn dot(&self, other: &Self) -> T { dot_product(self, other) }

    /// Tests whether every coordinate pair differs by less than `eps`.
    pub fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.all_coords(other, |a, b| approx_eq_eps(a.as_f64(), b.as_f64(), eps))
    }

    /// Applies `f` to every coordinate.
    pub fn map(self, f: impl FnMut(T) -> T) -> Self { Self::new(self.0.map(f)) }

    #[inline]
    fn zip_with(&self, rhs: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::new(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline]
    fn all_coords(&self, rhs: &Self, mut pred: impl FnMut(T, T) -> bool) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(&a, &b)| pred(a, b))
    }
}

impl<T: Coord + Float, const N: usize> Vector<T, N> {
    /// Euclidean norm in the coordinate type itself, free of intermediate
    /// overflow or underflow.
    fn norm(&self) -> T {
        self.0
            .iter()
            .fold(T::zero(), |norm, &c| norm.hypot(c))
    }

    /// Divides every coordinate by the magnitude of the vector.
    ///
    /// The zero vector is not guarded against: its coordinates become NaN.
    /// Use [`Vector::try_normalize`] to reject it instead.
    pub fn normalize(&mut self) {
        let mag = self.norm();
        if mag.is_zero() {
            log::warn!("Normalizing the zero vector {}, coordinates become NaN", self);
        }
        for c in self.0.iter_mut() {
            *c = *c / mag;
        }
    }

    /// Divides every coordinate by the magnitude of the vector.
    ///
    /// Fails with [`Error::ZeroMagnitude`] for the zero vector, which is
    /// left unchanged.
    pub fn try_normalize(&mut self) -> Result<()> {
        if self.norm().is_zero() {
            return Err(Error::ZeroMagnitude);
        }
        self.normalize();
        Ok(())
    }

    /// Returns a normalized copy of the vector.
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }
}

impl<T: Coord> Vector<T, 3> {
    /// Returns the third coordinate.
    pub fn z(&self) -> T { self.0[2] }

    /// Returns the cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self { cross_product_3d(self, other) }
}

impl<T: Coord, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zeros() }
}

impl<T: Coord, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self { Self::new(coords) }
}

impl<T: Coord, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T: Coord> From<(T, T)> for Vector<T, 2> {
    fn from((x, y): (T, T)) -> Self { vec2(x, y) }
}

impl<T: Coord> From<(T, T, T)> for Vector<T, 3> {
    fn from((x, y, z): (T, T, T)) -> Self { vec3(x, y, z) }
}

impl<T: Coord, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T: Coord, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

impl<T: Coord, const N: usize> Index<Axis> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &Self::Output { &self.0[axis.index()] }
}

impl<T: Coord, const N: usize> IndexMut<Axis> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output { &mut self.0[axis.index()] }
}

impl<T: Coord, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool { self.approx_eq_eps(other, TOLERANCE) }
}

impl<T: Coord, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool { self.all_coords(other, |a, b| a < b) }

    fn le(&self, other: &Self) -> bool { self.lt(other) || self == other }

    fn gt(&self, other: &Self) -> bool { self.all_coords(other, |a, b| a > b) }

    fn ge(&self, other: &Self) -> bool { self.gt(other) || self == other }
}

macro_rules! impl_elementwise_ops {
    ($($trait:ident, $op:ident);*) => {
        $(
            impl<T: Coord, const N: usize> $trait for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Self::Output { self.zip_with(&rhs, |a, b| a.$op(b)) }
            }

            impl<T: Coord, const N: usize> $trait<&Vector<T, N>> for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Self::Output { self.zip_with(rhs, |a, b| a.$op(b)) }
            }

            impl<T: Coord, const N: usize> $trait<Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Self::Output { self.zip_with(&rhs, |a, b| a.$op(b)) }
            }

            impl<T: Coord, const N: usize> $trait<&Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Self::Output { self.zip_with(rhs, |a, b| a.$op(b)) }
            }
        )*
    };
}

impl_elementwise_ops! {
    Add, add;
    Sub, sub
}

impl<T: Coord, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<T: Coord, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<T: Coord, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output { self.map(|c| c * rhs) }
}

impl<T: Coord + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Self::Output { self.map(|c| -c) }
}

impl<T: Coord, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_char(')')
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Coord + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Coord + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Coord + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    const MIN: f64 = -100.0;
    const MAX: f64 = 100.0;

    #[test]
    fn vector_creation() {
        let v = Vector3f::new([5.1, 6.2, 8.3]);
        assert_eq!(v.dim(), 3);
        assert_eq!(v.x(), 5.1);
        assert_eq!(v.y(), 6.2);
        assert_eq!(v.z(), 8.3);

        let w = vec2(1, 2);
        assert_eq!(w.into_array(), [1, 2]);
        assert_eq!(Vector3d::from((1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vector::<u8, 4>::from([4, 5, 6, 7]).as_slice(), &[4, 5, 6, 7]);
        assert_eq!(Vector4::splat(2).iter().sum::<i32>(), 8);

        let d: Vector<f32> = vec3(1.0, 2.0, 3.0);
        assert_eq!(d.dim(), DIM3);
    }

    type Vector4 = Vector<i32, 4>;

    #[test]
    fn vector_default_is_zero() {
        assert_eq!(Vector3f::default(), vec3(0.0, 0.0, 0.0));
        assert_eq!(Vector4::zeros().into_array(), [0; 4]);
    }

    #[test]
    fn vector_at_out_of_range() {
        let v = vec3(1.0f32, 2.0, 3.0);
        assert_eq!(v.at(2), Ok(3.0));
        for i in 3..10 {
            assert_eq!(v.at(i), Err(Error::IndexOutOfRange { index: i, dim: 3 }));
        }
        assert_eq!(
            vec2(1, 2).at(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                dim: 2
            })
        );
    }

    #[test]
    fn vector_assign() {
        let mut v = vec2(1.0f32, 2.0);
        v.assign(1, 4.5).unwrap();
        assert_eq!(v, vec2(1.0, 4.5));
        assert_eq!(
            v.assign(2, 9.0),
            Err(Error::IndexOutOfRange { index: 2, dim: 2 })
        );
        assert_eq!(v, vec2(1.0, 4.5));
    }

    #[test]
    fn vector_indexing() {
        let mut v = vec3(1, 2, 3);
        v[0] = 10;
        v[Axis::Z] += 1;
        assert_eq!(v[Axis::X], 10);
        assert_eq!(v[1], 2);
        assert_eq!(v[2], 4);
    }

    #[test]
    #[should_panic]
    fn vector_index_out_of_range_panics() {
        let v = vec2(1.0f32, 2.0);
        let _z = v[Axis::Z];
    }

    #[test]
    fn vector_equality_is_approximate() {
        let a = vec2(1.0f64, 2.0);
        assert_eq!(a, vec2(1.0 + 5.0e-8, 2.0 - 5.0e-8));
        assert_ne!(a, vec2(1.0 + 2.0e-7, 2.0));
        assert!(a.approx_eq_eps(&vec2(1.05, 2.0), 0.1));
        assert!(!a.approx_eq_eps(&vec2(1.05, 2.0), 0.01));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
    }

    #[test]
    fn vector_equality_nan() {
        let v = vec2(f32::NAN, 0.0);
        assert_ne!(v, v);
    }

    #[test]
    fn vector_add_sub() {
        let a = vec3(5.1f32, 6.2, 8.3);
        let b = vec3(4.2f32, 5.1, 6.5);
        assert_relative_eq!(a + b, vec3(9.3, 11.3, 14.8), epsilon = 1.0e-5);
        assert_relative_eq!(a - b, vec3(0.9, 1.1, 1.8), epsilon = 1.0e-5);
        assert_eq!(&a + &b, a + b);
        assert_eq!(a + &b, &a + b);

        let mut c = a;
        c += b;
        c -= b;
        assert_relative_eq!(c, a, epsilon = 1.0e-5);
    }

    #[test]
    fn vector_integer_arithmetic() {
        let a = vec3(1, -2, 3);
        let b = vec3(4, 5, -6);
        assert_eq!(a + b, vec3(5, 3, -3));
        assert_eq!(a - b, vec3(-3, -7, 9));
        assert_eq!(-a, vec3(-1, 2, -3));
        assert_eq!(a * 3, vec3(3, -6, 9));
    }

    #[test]
    fn vector_dominance() {
        let a = vec2(1.0f32, 2.0);
        let b = vec2(2.0f32, 3.0);
        assert!(a < b);
        assert!(b > a);
        assert!(!(b < a));
        assert!(!(a > b));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
        assert!(a <= a);

        // Incomparable: one coordinate lower, one higher.
        let c = vec2(1.0f32, 3.0);
        let d = vec2(2.0f32, 2.0);
        assert!(!(c < d));
        assert!(!(c > d));
        assert_eq!(c.partial_cmp(&d), None);

        // A shared coordinate prevents strict dominance.
        let e = vec3(1, 2, 3);
        let f = vec3(1, 5, 6);
        assert!(!(e < f));
        assert!(!(f > e));
    }

    #[test]
    fn vector_magnitude() {
        assert_eq!(vec2(3.0f32, 4.0).magnitude(), 5.0);
        assert_eq!(vec2(3, 4).magnitude(), 5.0);
        assert_eq!(vec3(2u8, 3, 6).magnitude_squared(), 49.0);
        assert_eq!(Vector3f::zeros().magnitude(), 0.0);
        // Squares are accumulated in floating point.
        assert_eq!(vec2(200u8, 0).magnitude(), 200.0);
    }

    #[test]
    fn vector_normalize() {
        let mut v = vec3(5.1f32, 6.2, 8.3);
        v.normalize();
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1.0e-6);

        let n = vec2(3.0f64, 4.0).normalized();
        assert_eq!(n, vec2(0.6, 0.8));
    }

    #[test]
    fn vector_normalize_zero() {
        let _ = env_logger::try_init();

        let mut v = Vector3f::zeros();
        v.normalize();
        assert!(v.iter().all(|c| c.is_nan()));

        let mut w = Vector2d::zeros();
        assert_eq!(w.try_normalize(), Err(Error::ZeroMagnitude));
        assert_eq!(w, Vector2d::zeros());

        let mut u = vec2(0.0f64, -2.0);
        assert_eq!(u.try_normalize(), Ok(()));
        assert_eq!(u, vec2(0.0, -1.0));
    }

    #[test]
    fn vector_normalize_extreme_magnitudes() {
        let mut big = vec2(1.0e20f32, 0.0);
        big.normalize();
        assert_eq!(big, vec2(1.0, 0.0));
        assert_eq!(vec2(1.0e20f32, 0.0).magnitude(), 1.0e20f32 as Real);

        let mut tiny = vec2(1.0e-23f32, 0.0);
        assert_eq!(tiny.try_normalize(), Ok(()));
        assert_eq!(tiny, vec2(1.0, 0.0));

        let huge = vec3(3.0e30f32, -4.0e30, 0.0).normalized();
        assert_abs_diff_eq!(huge, vec3(0.6, -0.8, 0.0), epsilon = 1.0e-6);
        assert_abs_diff_eq!(huge.magnitude(), 1.0, epsilon = 1.0e-6);

        let small = vec3(1.0e-30f64, 1.0e-30, 1.0e-30).normalized();
        assert_abs_diff_eq!(small.magnitude(), 1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn vector_dominance_within_tolerance() {
        let a = vec2(1.0f64, 1.0);
        let b = vec2(1.0 + 5.0e-8, 1.0 + 5.0e-8);
        assert!(a == b);
        assert!(a < b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert!(a <= b);
        assert!(a >= b);
        assert!(b <= a);
        assert!(b >= a);

        let c = vec2(2.0f64, 2.0);
        assert!(a <= c);
        assert!(!(a >= c));
        assert!(c >= a);
        assert!(!(vec2(1.0f64, 3.0) <= c));
    }

    #[test]
    fn vector_display() {
        assert_eq!(vec2(1.0f32, 2.5).to_string(), "(1, 2.5)");
        assert_eq!(vec3(1, -2, 3).to_string(), "(1, -2, 3)");
        assert_eq!(Vector::new([1u8, 2, 3, 4]).to_string(), "(1, 2, 3, 4)");
    }

    #[test]
    fn vector_map() {
        assert_eq!(vec3(1, 2, 3).map(|c| c * c), vec3(1, 4, 9));
    }

    proptest! {
        #[test]
        fn vector_construct_then_read(a in MIN..MAX, b in MIN..MAX, c in MIN..MAX, d in MIN..MAX) {
            let coords = [a, b, c, d];
            let v = Vector::new(coords);
            for (i, coord) in coords.iter().enumerate() {
                prop_assert_eq!(v.at(i), Ok(*coord));
                prop_assert_eq!(v[i], *coord);
            }
        }

        #[test]
        fn vector_out_of_range(i in 2usize..1024, j in 3usize..1024) {
            prop_assert!(vec2(1.0, 2.0).at(i).is_err());
            prop_assert!(vec3(1, 2, 3).at(j).is_err());
            let mut v = vec3(1, 2, 3);
            prop_assert!(v.assign(j, 0).is_err());
        }

        #[test]
        fn vector_equality_reflexive_symmetric(a in MIN..MAX, b in MIN..MAX, c in MIN..MAX,
            d in MIN..MAX, e in MIN..MAX, f in MIN..MAX)
        {
            let u = vec3(a, b, c);
            let v = vec3(d, e, f);
            prop_assert!(u == u);
            prop_assert_eq!(u == v, v == u);
            prop_assert_eq!(u != v, !(u == v));
        }

        #[test]
        fn vector_add_sub_inverse(a in MIN..MAX, b in MIN..MAX, c in MIN..MAX,
            d in MIN..MAX, e in MIN..MAX, f in MIN..MAX)
        {
            let u = vec3(a, b, c);
            let v = vec3(d, e, f);
            prop_assert_eq!((u + v) - v, u);

            let ui = vec3(a as i64, b as i64, c as i64);
            let vi = vec3(d as i64, e as i64, f as i64);
            prop_assert_eq!((ui + vi) - vi, ui);
        }

        #[test]
        fn vector_dominance_irreflexive_asymmetric(a in MIN..MAX, b in MIN..MAX,
            c in MIN..MAX, d in MIN..MAX)
        {
            let u = vec2(a, b);
            let v = vec2(c, d);
            prop_assert!(!(u < u));
            prop_assert!(!(u > u));
            if u < v {
                prop_assert!(!(v < u));
                prop_assert!(v > u);
            }
            if u > v {
                prop_assert!(!(v > u));
            }
        }

        #[test]
        fn vector_normalized_is_unit(a in MIN..MAX, b in MIN..MAX, c in MIN..MAX) {
            let mut v = vec3(a, b, c);
            prop_assume!(v.norm() > 1.0e-3);
            v.normalize();
            prop_assert!((v.norm() - 1.0).abs() < TOLERANCE);
            prop_assert!((v.magnitude() - 1.0).abs() < 1.0e-5);
        }
    }
}
