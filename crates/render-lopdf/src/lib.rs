//! PDF label sheets using lopdf.
//!
//! Each sheet is finalised into a standalone single-page PDF; concatenation
//! merges those PDFs, in order, into the final document.

mod backend;
mod canvas;
mod helpers;

pub use backend::LopdfBackend;
pub use canvas::LopdfCanvas;
pub use helpers::{font_resource_name, to_win_ansi};
