//! Axis enum for indexing vector coordinates.

/// An helper enum used to index the first three coordinates of a vector.
///
/// # Examples
/// ```
/// # use scalegeom_base::{vec3, Axis};
///
/// let mut pos = vec3(0.1, 0.4, 0.6);
/// pos[Axis::X] -= 0.1;
///
/// assert_eq!(pos[Axis::X], 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X-axis.
    X = 0,

    /// Y-axis.
    Y = 1,

    /// Z-axis.
    Z = 2,
}

impl Axis {
    /// Returns the coordinate index of the axis.
    pub const fn index(&self) -> usize { *self as usize }
}

impl TryFrom<usize> for Axis {
    type Error = crate::Error;

    fn try_from(i: usize) -> Result<Self, Self::Error> {
        match i {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(crate::Error::out_of_range(i, 3)),
        }
    }
}
