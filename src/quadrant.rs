//! The four fixed regions of a sheet and the position-to-quadrant mapping.
//!
//! Rectangles here live in sheet layout space: origin at the sheet's visual
//! top-left corner, y growing downward.

use crate::error::LabelError;
use shiplabel_types::{Rect, Size};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The sheet edge a quadrant's vertical placement is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl Quadrant {
    /// In position order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Position in a group that maps to this quadrant.
    pub fn position(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::BottomLeft)
    }

    pub fn edge(self) -> VerticalEdge {
        match self {
            Quadrant::TopLeft | Quadrant::TopRight => VerticalEdge::Top,
            Quadrant::BottomLeft | Quadrant::BottomRight => VerticalEdge::Bottom,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        };
        f.write_str(name)
    }
}

pub fn quadrant_for(position: usize) -> Result<Quadrant, LabelError> {
    Quadrant::ALL
        .get(position)
        .copied()
        .ok_or(LabelError::InvalidPosition(position))
}

/// The half-width, half-height rectangle `quadrant` occupies on a sheet of
/// `sheet` size. The four rectangles tile the sheet exactly.
pub fn anchor_rect(quadrant: Quadrant, sheet: Size) -> Rect {
    let half_w = sheet.width / 2.0;
    let half_h = sheet.height / 2.0;
    let x = if quadrant.is_left() { 0.0 } else { half_w };
    let (y, height) = match quadrant.edge() {
        VerticalEdge::Top => (0.0, half_h),
        VerticalEdge::Bottom => (half_h, sheet.height - half_h),
    };
    let width = if quadrant.is_left() { half_w } else { sheet.width - half_w };
    Rect::new(x, y, width, height)
}
