//! Label block description and measurement.
//!
//! A label's visual content is described as an immutable [`BlockNode`] tree
//! (text runs, stacked rows, weighted columns, bordered cells, barcodes) and
//! measured once with [`layout`] into a [`Block`]: a size plus a flat list of
//! positioned primitives that any canvas can paint.

mod error;

pub mod barcode;
pub mod block;
pub mod fonts;
pub mod layout;
pub mod node;
pub mod style;
pub mod text;

pub use barcode::{encode_code128, Bar, BarPattern};
pub use block::{Block, Primitive};
pub use error::BlockError;
pub use fonts::StandardFont;
pub use layout::layout;
pub use node::{BlockNode, Cell, Column, Mark};
pub use style::{HAlign, TextStyle, VAlign};

// Re-export geometry so downstream crates agree on one set of types
pub use shiplabel_types::{Offset, Point, Rect, Size};
