//! An implementation of an immutable, median-split K-D Tree.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;

pub use builder::{KdTreeBuilder, MedianStrategy};
pub use index::{KdTree, KdTreeRef};
pub use r#trait::{KdTreeIndex, Neighbor};
pub use traversal::Node;
