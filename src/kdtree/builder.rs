use std::cmp::Ordering;

use tracing::debug;

use crate::error::{check_dimension, KdTreeError, Result};
use crate::kdtree::KdTree;
use crate::point::Point;
use crate::r#type::Coordinate;

/// How the median of each sub-range is located during construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MedianStrategy {
    /// Fully sort every sub-range with a stable sort before taking its middle element.
    ///
    /// `O(n log² n)` construction. Points with equal coordinates on the split axis keep their
    /// relative order from the level above, so the tree shape is fully reproducible for a given
    /// input order.
    #[default]
    Sort,

    /// Partition every sub-range around its middle element with an unstable selection.
    ///
    /// `O(n log n)` construction. Every node is still the exact median of its sub-range, but the
    /// side on which ties with the median land is unspecified.
    Select,
}

/// A builder to create a [`KdTree`].
///
/// ```
/// use median_kdtree::kdtree::{KdTreeBuilder, KdTreeIndex};
/// use median_kdtree::Point;
///
/// let mut builder = KdTreeBuilder::new(2).unwrap();
/// builder.add_coords(&[0., 0.]).unwrap();
/// builder.add_coords(&[10., 10.]).unwrap();
/// builder.add_coords(&[5., 5.]).unwrap();
/// let tree = builder.finish();
///
/// let target = Point::try_new([4., 4.]).unwrap();
/// let nearest = tree.nearest(&target).unwrap().unwrap();
/// assert_eq!(nearest.point.coords(), &[5., 5.]);
/// assert_eq!(nearest.index, 2);
/// assert_eq!(nearest.distance_squared, 2.);
/// ```
#[derive(Debug, Clone)]
pub struct KdTreeBuilder<N: Coordinate> {
    dimension: usize,
    points: Vec<Point<N>>,
    strategy: MedianStrategy,
}

impl<N: Coordinate> KdTreeBuilder<N> {
    /// Create a new builder for points with `dimension` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::EmptyPoint`] if `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self> {
        Self::with_capacity(dimension, 0)
    }

    /// Create a new builder with room for `num_items` points.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::EmptyPoint`] if `dimension` is zero.
    pub fn with_capacity(dimension: usize, num_items: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(KdTreeError::EmptyPoint);
        }
        Ok(Self {
            dimension,
            points: Vec::with_capacity(num_items),
            strategy: MedianStrategy::default(),
        })
    }

    /// Choose how medians are located when the tree is built.
    pub fn median_strategy(mut self, strategy: MedianStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The dimension every added point must have.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of points added so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points have been added yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the index, returning its insertion index.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::DimensionMismatch`] if the point does not have the builder's
    /// dimension. The point is not added in that case.
    pub fn add(&mut self, point: Point<N>) -> Result<usize> {
        check_dimension(self.dimension, point.dimension())?;
        let index = self.points.len();
        self.points.push(point);
        Ok(index)
    }

    /// Add a point given by its coordinates, returning its insertion index.
    ///
    /// # Errors
    ///
    /// Fails if the coordinates do not form a valid point or have the wrong dimension.
    pub fn add_coords(&mut self, coords: &[N]) -> Result<usize> {
        self.add(Point::try_new(coords.iter().copied())?)
    }

    /// Add every point of `points`, stopping at the first one that is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::DimensionMismatch`] for the first point with the wrong dimension.
    /// Points before it stay added.
    pub fn extend(&mut self, points: impl IntoIterator<Item = Point<N>>) -> Result<()> {
        let points = points.into_iter();
        self.points.reserve(points.size_hint().0);
        for point in points {
            self.add(point)?;
        }
        Ok(())
    }

    /// Consume this builder, performing the k-d sort and generating a [`KdTree`] ready for
    /// queries.
    pub fn finish(self) -> KdTree<N> {
        debug!(
            num_items = self.points.len(),
            dimension = self.dimension,
            strategy = ?self.strategy,
            "building k-d tree"
        );

        let mut items: Vec<(usize, Point<N>)> = self.points.into_iter().enumerate().collect();

        // kd-sort the items so that every sub-range is laid out around its median
        sort(&mut items, self.dimension, 0, self.strategy);

        let (indices, points) = items.into_iter().unzip();
        KdTree {
            points,
            indices,
            dimension: Some(self.dimension),
        }
    }
}

/// Recursively place the median of `items` (by the axis for `depth`) at `items.len() / 2`, with
/// lesser items before it and greater items after it, then do the same for both halves.
fn sort<N: Coordinate>(
    items: &mut [(usize, Point<N>)],
    dimension: usize,
    depth: usize,
    strategy: MedianStrategy,
) {
    if items.len() <= 1 {
        return;
    }

    let axis = depth % dimension;
    let m = items.len() / 2;

    match strategy {
        MedianStrategy::Sort => items.sort_by(|(_, a), (_, b)| compare_on_axis(a, b, axis)),
        MedianStrategy::Select => {
            items.select_nth_unstable_by(m, |(_, a), (_, b)| compare_on_axis(a, b, axis));
        }
    }

    // the median itself stays in place and belongs to neither half
    let (left, right) = items.split_at_mut(m);
    sort(left, dimension, depth + 1, strategy);
    sort(&mut right[1..], dimension, depth + 1, strategy);
}

#[inline]
fn compare_on_axis<N: Coordinate>(a: &Point<N>, b: &Point<N>, axis: usize) -> Ordering {
    // Points only hold finite coordinates, so the comparison always succeeds.
    a.coordinate(axis)
        .partial_cmp(&b.coordinate(axis))
        .unwrap_or(Ordering::Equal)
}
