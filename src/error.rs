use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// Two points, or a point and a tree, do not share one dimension.
    #[error("Dimension mismatch: expected {expected} coordinates, got {found}")]
    DimensionMismatch {
        /// Dimension of the tree or of the left-hand point
        expected: usize,
        /// Dimension of the offending point
        found: usize,
    },

    /// A point must have at least one coordinate.
    #[error("A point must have at least one coordinate")]
    EmptyPoint,

    /// Coordinates must be finite: NaN cannot be ordered along its axis, and the distance
    /// between two equal infinities is undefined.
    #[error("Non-finite coordinate on axis {axis}")]
    NonFiniteCoordinate {
        /// Axis holding the NaN or infinite value
        axis: usize,
    },
}

pub type Result<T> = std::result::Result<T, KdTreeError>;

/// Fail with [`KdTreeError::DimensionMismatch`] unless `found == expected`.
#[inline]
pub(crate) fn check_dimension(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(KdTreeError::DimensionMismatch { expected, found });
    }
    Ok(())
}
