//! # scalegeom-base
//! Core library for scalegeom.
//!
//! Contains the fixed-dimension [`Vector`] type used throughout the
//! computational geometry code, together with the dot, cross and scalar
//! triple products.
//!
//! ```
//! use scalegeom_base::{cross_product_3d, vec3, Vector3f};
//!
//! let n = cross_product_3d(&vec3(1.0f32, 0.0, 0.0), &vec3(0.0, 1.0, 0.0));
//! assert_eq!(n, Vector3f::new([0.0, 0.0, 1.0]));
//! ```

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{
    cross_product_2d, cross_product_3d, dot_product, scalar_triple_product, vec2, vec3, Axis,
    Coord, Real, Vector, Vector2d, Vector2f, Vector2i, Vector3d, Vector3f, Vector3i, DIM2, DIM3,
    TOLERANCE,
};
