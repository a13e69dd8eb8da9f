use crate::error::Result;
use crate::kdtree::KdTreeBuilder;
use crate::point::Point;
use crate::r#type::Coordinate;

/// An owned, immutable k-d tree.
///
/// The points are stored in one kd-sorted vector: the node covering the range `[left, right)`
/// holds the point at `left + (right - left) / 2`, and its children cover the ranges on either
/// side of it. Usually this will be created via [`KdTree::build`] or
/// [`KdTreeBuilder`][crate::kdtree::KdTreeBuilder].
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<N: Coordinate> {
    pub(crate) points: Vec<Point<N>>,
    pub(crate) indices: Vec<usize>,
    pub(crate) dimension: Option<usize>,
}

impl<N: Coordinate> KdTree<N> {
    /// Build a tree from `points` with the default [`MedianStrategy`][crate::kdtree::MedianStrategy].
    ///
    /// The dimension of the tree is taken from the first point. An empty input produces an
    /// empty tree, for which every query returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::DimensionMismatch`][crate::KdTreeError::DimensionMismatch] if the
    /// points do not all share one dimension.
    pub fn build(points: impl IntoIterator<Item = Point<N>>) -> Result<Self> {
        let mut points = points.into_iter().peekable();
        let Some(dimension) = points.peek().map(Point::dimension) else {
            return Ok(Self::empty());
        };

        let mut builder = KdTreeBuilder::with_capacity(dimension, points.size_hint().0)?;
        builder.extend(points)?;
        Ok(builder.finish())
    }

    /// A tree without points or a declared dimension.
    pub fn empty() -> Self {
        Self {
            points: vec![],
            indices: vec![],
            dimension: None,
        }
    }

    /// Consume the tree, returning its points in kd-sorted order.
    pub fn into_points(self) -> Vec<Point<N>> {
        self.points
    }

    /// A borrowed, read-only view onto this tree.
    pub fn as_ref(&self) -> KdTreeRef<'_, N> {
        KdTreeRef {
            points: &self.points,
            indices: &self.indices,
            dimension: self.dimension,
        }
    }
}

impl<N: Coordinate> Default for KdTree<N> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A read-only reference onto the contents of a [`KdTree`].
///
/// This is cheap to copy and can be shared freely, for example across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KdTreeRef<'a, N: Coordinate> {
    pub(crate) points: &'a [Point<N>],
    pub(crate) indices: &'a [usize],
    pub(crate) dimension: Option<usize>,
}
