//! A fixed-dimension point in k-dimensional space.

use std::fmt;

use tinyvec::TinyVec;

use crate::error::{check_dimension, KdTreeError, Result};
use crate::r#type::Coordinate;

/// Coordinates of points with up to this many dimensions are stored inline.
const INLINE_DIMENSIONS: usize = 4;

/// An immutable point with a fixed number of coordinates.
///
/// A point always has at least one coordinate and only finite ones, so it is totally ordered
/// along each of its axes and its distance to itself is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<N: Coordinate> {
    coords: TinyVec<[N; INLINE_DIMENSIONS]>,
}

impl<N: Coordinate> Point<N> {
    /// Create a point from its coordinates, in axis order.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::EmptyPoint`] if no coordinates are given and
    /// [`KdTreeError::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
    pub fn try_new(coords: impl IntoIterator<Item = N>) -> Result<Self> {
        let coords: TinyVec<[N; INLINE_DIMENSIONS]> = coords.into_iter().collect();
        if coords.is_empty() {
            return Err(KdTreeError::EmptyPoint);
        }
        if let Some(axis) = coords.iter().position(|c| !c.is_finite()) {
            return Err(KdTreeError::NonFiniteCoordinate { axis });
        }
        Ok(Self { coords })
    }

    /// The number of coordinates of this point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// The coordinate along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.dimension()`.
    #[inline]
    pub fn coordinate(&self, axis: usize) -> N {
        self.coords[axis]
    }

    /// The coordinate along `axis`, or `None` if the axis is out of range.
    #[inline]
    pub fn get(&self, axis: usize) -> Option<N> {
        self.coords.get(axis).copied()
    }

    /// All coordinates in axis order.
    #[inline]
    pub fn coords(&self) -> &[N] {
        &self.coords
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::DimensionMismatch`] if the points have different dimensions.
    pub fn distance_squared(&self, other: &Point<N>) -> Result<N> {
        check_dimension(self.dimension(), other.dimension())?;
        Ok(sq_dist(self.coords(), other.coords()))
    }
}

impl<N: Coordinate> TryFrom<Vec<N>> for Point<N> {
    type Error = KdTreeError;

    fn try_from(value: Vec<N>) -> Result<Self> {
        Self::try_new(value)
    }
}

impl<N: Coordinate> TryFrom<&[N]> for Point<N> {
    type Error = KdTreeError;

    fn try_from(value: &[N]) -> Result<Self> {
        Self::try_new(value.iter().copied())
    }
}

impl<N: Coordinate, const D: usize> TryFrom<[N; D]> for Point<N> {
    type Error = KdTreeError;

    fn try_from(value: [N; D]) -> Result<Self> {
        Self::try_new(value)
    }
}

impl<N: Coordinate> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{:?}", self.coords())
    }
}

/// Squared distance between two coordinate slices of equal length.
///
/// Callers are responsible for checking the dimensions; extra coordinates of the longer slice
/// are ignored.
#[inline]
pub(crate) fn sq_dist<N: Coordinate>(a: &[N], b: &[N]) -> N {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(N::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}
