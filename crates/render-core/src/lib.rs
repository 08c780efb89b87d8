//! Core rendering abstractions for label sheets.
//!
//! This crate provides the seams the placement engine draws through:
//! - `Canvas` for painting measured blocks and decorations on one sheet
//! - `SheetBackend` for opening sheets, finalising them into artifacts and
//!   concatenating those artifacts into one document
//! - Error types for rendering operations
//! - Coordinate conversion helpers

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{Canvas, SheetBackend, YAxis};
