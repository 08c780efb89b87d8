use crate::error::RenderError;
use shiplabel_block::Block;
use shiplabel_types::{Point, Size};
use std::io::Write;

/// Direction in which a canvas's native Y coordinate grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YAxis {
    /// Origin at the bottom edge, as in PDF user space.
    Up,
    /// Origin at the top edge, as in raster images.
    Down,
}

/// One sheet being drawn. All coordinates are in the canvas's native space.
pub trait Canvas {
    fn size(&self) -> Size;

    fn y_axis(&self) -> YAxis {
        YAxis::Up
    }

    /// Paints `block` with its top-left corner at `top_left`.
    fn draw_block(&mut self, block: &Block, top_left: Point) -> Result<(), RenderError>;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f32,
        line_width: f32,
    ) -> Result<(), RenderError>;
}

/// Produces canvases and turns finished ones into storable artifacts.
pub trait SheetBackend {
    type Canvas: Canvas;

    fn open_sheet(&self, size: Size) -> Result<Self::Canvas, RenderError>;

    /// Finalises `canvas` into a standalone single-sheet artifact.
    fn finish_sheet(&self, canvas: Self::Canvas, out: &mut dyn Write) -> Result<(), RenderError>;

    /// Concatenates sheet artifacts, in order, into one document written to
    /// `out`. Zero sheets yield a valid empty document. Returns the page count.
    fn concatenate(&self, sheets: Vec<Vec<u8>>, out: &mut dyn Write) -> Result<usize, RenderError>;
}
