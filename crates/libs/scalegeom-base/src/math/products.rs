//! Dot, cross and scalar triple products.

use crate::math::{Coord, Vector};

/// Computes the dot product of two vectors of the same dimension.
///
/// The products are accumulated in the coordinate type, so integer vectors
/// wrap or overflow the same way their coordinates do.
pub fn dot_product<T: Coord, const N: usize>(v1: &Vector<T, N>, v2: &Vector<T, N>) -> T {
    v1.iter()
        .zip(v2.iter())
        .fold(T::zero(), |dot, (&lhs, &rhs)| dot + lhs * rhs)
}

/// Computes the 2D cross product, i.e. the z component of the cross product
/// of the two vectors embedded in the xy-plane.
///
/// Positive when `v2` lies counter-clockwise from `v1`.
pub fn cross_product_2d<T: Coord>(v1: &Vector<T, 2>, v2: &Vector<T, 2>) -> T {
    v1.x() * v2.y() - v1.y() * v2.x()
}

/// Computes the cross product of two 3D vectors.
///
/// The cross product is anti-commutative: swapping the operands negates the
/// result.
pub fn cross_product_3d<T: Coord>(v1: &Vector<T, 3>, v2: &Vector<T, 3>) -> Vector<T, 3> {
    let x = v1.y() * v2.z() - v1.z() * v2.y();
    let y = v1.z() * v2.x() - v1.x() * v2.z();
    let z = v1.x() * v2.y() - v1.y() * v2.x();
    Vector::new([x, y, z])
}

/// Computes the scalar triple product `(v1 × v2) · v3`.
///
/// This is the signed volume of the parallelepiped spanned by the three
/// vectors; it is zero iff they are coplanar.
pub fn scalar_triple_product<T: Coord>(
    v1: &Vector<T, 3>,
    v2: &Vector<T, 3>,
    v3: &Vector<T, 3>,
) -> T {
    dot_product(&cross_product_3d(v1, v2), v3)
}
