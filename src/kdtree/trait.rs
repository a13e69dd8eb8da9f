use geo_traits::CoordTrait;
use tracing::trace;

use crate::error::{check_dimension, Result};
use crate::kdtree::{KdTree, KdTreeRef, Node};
use crate::point::{sq_dist, Point};
use crate::r#type::Coordinate;

/// The result of a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, N: Coordinate> {
    /// The closest point in the tree
    pub point: &'a Point<N>,

    /// The insertion index of `point`
    pub index: usize,

    /// Squared Euclidean distance from the query target to `point`
    pub distance_squared: N,
}

impl<N: Coordinate> Neighbor<'_, N> {
    /// Euclidean distance from the query target to the neighbor.
    pub fn distance(&self) -> N {
        self.distance_squared.sqrt()
    }
}

/// A trait for searching and accessing data out of a KdTree.
pub trait KdTreeIndex<N: Coordinate>: Sized {
    /// The points of this tree, in kd-sorted order
    fn points(&self) -> &[Point<N>];

    /// The insertion index of each entry of [`KdTreeIndex::points`]
    fn indices(&self) -> &[usize];

    /// The number of coordinates of every point in this tree.
    ///
    /// This is `None` only for a tree built from an empty sequence of points.
    fn dimension(&self) -> Option<usize>;

    /// The number of items in this KdTree
    fn num_items(&self) -> usize {
        self.points().len()
    }

    /// Returns `true` if this tree holds no points.
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Access the root node of the KdTree for manual traversal.
    ///
    /// Returns `None` for an empty tree.
    fn root(&self) -> Option<Node<'_, N, Self>> {
        Node::from_root(self)
    }

    /// Find the point closest to `target`.
    ///
    /// Among several points at the same minimal distance, the first one reached by the search
    /// wins. Returns `Ok(None)` if and only if the tree is empty.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::DimensionMismatch`][crate::KdTreeError::DimensionMismatch] if
    /// `target` does not have the dimension of the tree. An empty tree of unknown dimension
    /// accepts any target.
    fn nearest(&self, target: &Point<N>) -> Result<Option<Neighbor<'_, N>>> {
        if let Some(dimension) = self.dimension() {
            check_dimension(dimension, target.dimension())?;
        }
        let Some(root) = self.root() else {
            return Ok(None);
        };

        let mut search = NearestSearch::new(target.coords());
        search.visit(root);
        trace!(
            visited = search.visited,
            pruned = search.pruned,
            "nearest neighbor search finished"
        );

        let distance_squared = search.best_dist;
        Ok(search.best.map(|node| Neighbor {
            point: node.point(),
            index: node.index(),
            distance_squared,
        }))
    }

    /// Find the point closest to `target`, without its index or distance.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::DimensionMismatch`][crate::KdTreeError::DimensionMismatch] if
    /// `target` does not have the dimension of the tree.
    fn find_nearest(&self, target: &Point<N>) -> Result<Option<&Point<N>>> {
        Ok(self.nearest(target)?.map(|neighbor| neighbor.point))
    }

    /// Find the point closest to any coordinate implementing [`CoordTrait`].
    ///
    /// # Errors
    ///
    /// Fails if `coord` is not a valid point or does not have the dimension of the tree.
    fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Option<Neighbor<'_, N>>> {
        let target = Point::try_new((0..coord.dim().size()).map(|n| coord.nth_or_panic(n)))?;
        self.nearest(&target)
    }
}

/// Branch-and-bound state of one nearest-neighbor query.
struct NearestSearch<'a, 't, N: Coordinate, T: KdTreeIndex<N>> {
    target: &'t [N],
    best: Option<Node<'a, N, T>>,
    best_dist: N,
    visited: usize,
    pruned: usize,
}

impl<'a, 't, N: Coordinate, T: KdTreeIndex<N>> NearestSearch<'a, 't, N, T> {
    fn new(target: &'t [N]) -> Self {
        Self {
            target,
            best: None,
            best_dist: N::infinity(),
            visited: 0,
            pruned: 0,
        }
    }

    fn visit(&mut self, node: Node<'a, N, T>) {
        self.visited += 1;

        let point = node.point();
        let axis = node.axis();

        let dist = sq_dist(self.target, point.coords());
        let (near, far) = if self.target[axis] < point.coordinate(axis) {
            (node.left_child(), node.right_child())
        } else {
            (node.right_child(), node.left_child())
        };

        // the root always seeds the best candidate, even at infinite distance
        if self.best.is_none() || dist < self.best_dist {
            self.best_dist = dist;
            self.best = Some(node);
        }

        if let Some(near) = near {
            self.visit(near);
        }

        if let Some(far) = far {
            // the splitting hyperplane bounds the distance to everything on its far side
            let axis_dist = self.target[axis] - point.coordinate(axis);
            if axis_dist * axis_dist < self.best_dist {
                self.visit(far);
            } else {
                self.pruned += 1;
            }
        }
    }
}

impl<N: Coordinate> KdTreeIndex<N> for KdTree<N> {
    fn points(&self) -> &[Point<N>] {
        &self.points
    }

    fn indices(&self) -> &[usize] {
        &self.indices
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }
}

impl<N: Coordinate> KdTreeIndex<N> for KdTreeRef<'_, N> {
    fn points(&self) -> &[Point<N>] {
        self.points
    }

    fn indices(&self) -> &[usize] {
        self.indices
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }
}
