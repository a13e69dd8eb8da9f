#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod point;
mod r#type;

pub use error::{KdTreeError, Result};
pub use point::Point;
pub use r#type::Coordinate;
