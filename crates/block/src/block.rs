use crate::fonts::StandardFont;
use crate::node::Mark;
use shiplabel_types::{Rect, Size};

/// A drawing primitive positioned relative to the block's top-left corner,
/// with y growing downward.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text {
        x: f32,
        baseline: f32,
        text: String,
        font: StandardFont,
        size: f32,
    },
    StrokeRect { rect: Rect, line_width: f32 },
    FillRect { rect: Rect },
}

/// A measured, immutable label block ready to be placed on a sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub size: Size,
    pub primitives: Vec<Primitive>,
    pub marks: Vec<(Mark, Rect)>,
}

impl Block {
    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// First region tagged with `mark`, in block-local coordinates.
    pub fn mark(&self, mark: Mark) -> Option<Rect> {
        self.marks
            .iter()
            .find(|(m, _)| *m == mark)
            .map(|(_, rect)| *rect)
    }

    /// All text runs in drawing order, mostly useful for assertions.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
