//! Utilities to traverse the KdTree structure.

use std::marker::PhantomData;

use crate::kdtree::KdTreeIndex;
use crate::point::Point;
use crate::r#type::Coordinate;

/// A node in the KdTree.
///
/// A node covers a contiguous, non-empty range of the kd-sorted points. Its own point is the
/// median of that range along [`Node::axis`].
#[derive(Debug, Clone)]
pub struct Node<'a, N: Coordinate, T: KdTreeIndex<N>> {
    /// The tree that this node is a reference onto
    tree: &'a T,

    /// Number of coordinates of every point in the tree
    dimension: usize,

    /// Half-open range of kd-sorted points covered by this node
    left: usize,
    right: usize,

    depth: usize,

    phantom: PhantomData<N>,
}

impl<'a, N: Coordinate, T: KdTreeIndex<N>> Node<'a, N, T> {
    /// Returns `None` for an empty tree.
    pub(crate) fn from_root(tree: &'a T) -> Option<Self> {
        let dimension = tree.points().first()?.dimension();
        Some(Self {
            tree,
            dimension,
            left: 0,
            right: tree.points().len(),
            depth: 0,
            phantom: PhantomData,
        })
    }

    #[inline]
    fn child(&self, left: usize, right: usize) -> Option<Self> {
        (left < right).then(|| Self {
            tree: self.tree,
            dimension: self.dimension,
            left,
            right,
            depth: self.depth + 1,
            phantom: PhantomData,
        })
    }

    /// Note: this is the position in the kd-sorted points, not the insertion index.
    #[inline]
    pub(crate) fn middle_index(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    /// The median point stored at this node.
    #[inline]
    pub fn point(&self) -> &'a Point<N> {
        &self.tree.points()[self.middle_index()]
    }

    /// The original insertion index of [`Node::point`].
    #[inline]
    pub fn index(&self) -> usize {
        self.tree.indices()[self.middle_index()]
    }

    /// The axis this node splits its children on.
    #[inline]
    pub fn axis(&self) -> usize {
        self.depth % self.dimension
    }

    /// The depth of this node. The root has depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The number of points in the subtree rooted at this node, including its own.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left
    }

    /// The points of the subtree rooted at this node, in kd-sorted order.
    pub fn points(&self) -> &'a [Point<N>] {
        &self.tree.points()[self.left..self.right]
    }

    /// The child node holding the points before the median.
    ///
    /// Note that this **does not include** the point of the current node.
    pub fn left_child(&self) -> Option<Self> {
        self.child(self.left, self.middle_index())
    }

    /// The child node holding the points after the median.
    ///
    /// Note that this **does not include** the point of the current node.
    pub fn right_child(&self) -> Option<Self> {
        self.child(self.middle_index() + 1, self.right)
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.len() == 1
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}
