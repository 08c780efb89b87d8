//! Post-placement drawing. A decoration runs after a block has been drawn at
//! its final position and may add primitives relative to that placement.

use crate::sheet::PlacedBlock;
use shiplabel_block::{Block, Mark};
use shiplabel_render_core::{Canvas, RenderError};
use shiplabel_types::{Point, Rect};

pub trait Decoration {
    fn decorate(
        &self,
        canvas: &mut dyn Canvas,
        block: &Block,
        placed: &PlacedBlock,
    ) -> Result<(), RenderError>;
}

/// A stroked ring around the sequence number in the badge cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceRing {
    pub radius: f32,
    pub line_width: f32,
}

impl Default for SequenceRing {
    fn default() -> Self {
        Self { radius: 15.0, line_width: 1.0 }
    }
}

impl SequenceRing {
    /// Ring centre in block-local coordinates (y down): two thirds across the
    /// badge plus 10pt, 3pt below its vertical middle.
    pub fn local_center(badge: Rect) -> Point {
        Point::new(
            badge.x + badge.width * 2.0 / 3.0 + 10.0,
            badge.y + badge.height / 2.0 + 3.0,
        )
    }
}

impl Decoration for SequenceRing {
    fn decorate(
        &self,
        canvas: &mut dyn Canvas,
        block: &Block,
        placed: &PlacedBlock,
    ) -> Result<(), RenderError> {
        let Some(badge) = block.mark(Mark::SequenceBadge) else {
            return Ok(());
        };
        let center = placed.to_native(Self::local_center(badge));
        canvas.stroke_circle(center, self.radius, self.line_width)
    }
}
