pub mod geometry;

pub use geometry::{Offset, Point, Rect, Size};
