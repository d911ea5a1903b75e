//! Error type for scalegeom.

/// Errors raised by vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Coordinate index is not smaller than the vector dimension.
    #[error("Index {index} out of range for vector of dimension {dim}")]
    IndexOutOfRange {
        /// The requested coordinate index.
        index: usize,
        /// Dimension of the vector that was accessed.
        dim: usize,
    },

    /// Normalisation of a vector whose magnitude is zero.
    #[error("Cannot normalize a vector with zero magnitude")]
    ZeroMagnitude,
}

/// Result type with [`Error`] as the error variant.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] for an access at `index` into a
    /// vector of dimension `dim`.
    pub fn out_of_range(index: usize, dim: usize) -> Self {
        log::trace!("rejected coordinate access at {} (dimension {})", index, dim);
        Self::IndexOutOfRange { index, dim }
    }
}
