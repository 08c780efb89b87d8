//! The declarative description of a block, built once and measured by
//! [`crate::layout`]. Nodes are plain values; nothing here knows about pages.

use crate::barcode::BarPattern;
use crate::style::{TextStyle, VAlign};

/// Default cell border stroke width in points.
pub const DEFAULT_BORDER_WIDTH: f32 = 0.5;
/// Default inner padding of a cell in points.
pub const DEFAULT_CELL_PADDING: f32 = 2.0;

/// Names a region of a block so that a post-placement step can find it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    SequenceBadge,
    Barcode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockNode {
    /// A run of text, wrapped to the available width.
    Text { text: String, style: TextStyle },
    /// Children stacked top to bottom, each with the full width.
    Rows(Vec<BlockNode>),
    /// Children side by side. Every column receives the height of the tallest.
    Columns(Vec<Column>),
    Cell(Box<Cell>),
    /// A 1D barcode drawn as filled bars, centred horizontally.
    Barcode {
        pattern: BarPattern,
        height: f32,
        max_module_width: f32,
    },
    Mark { mark: Mark, child: Box<BlockNode> },
    Spacer(f32),
}

impl BlockNode {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        BlockNode::Text { text: text.into(), style }
    }

    pub fn rows(children: Vec<BlockNode>) -> Self {
        BlockNode::Rows(children)
    }

    /// Columns from `(weight, child)` pairs. Weights are relative.
    pub fn columns(columns: Vec<(f32, BlockNode)>) -> Self {
        BlockNode::Columns(
            columns
                .into_iter()
                .map(|(weight, child)| Column { weight, child })
                .collect(),
        )
    }

    pub fn barcode(pattern: BarPattern, height: f32) -> Self {
        BlockNode::Barcode { pattern, height, max_module_width: 1.0 }
    }

    pub fn marked(self, mark: Mark) -> Self {
        BlockNode::Mark { mark, child: Box::new(self) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub weight: f32,
    pub child: BlockNode,
}

/// A bordered, padded box around one child.
///
/// When placed inside [`BlockNode::Columns`] the cell stretches to the row
/// height and positions its content with `valign`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub child: BlockNode,
    pub border: Option<f32>,
    pub padding: f32,
    pub fixed_height: Option<f32>,
    pub valign: VAlign,
}

impl Cell {
    pub fn new(child: BlockNode) -> Self {
        Self {
            child,
            border: Some(DEFAULT_BORDER_WIDTH),
            padding: DEFAULT_CELL_PADDING,
            fixed_height: None,
            valign: VAlign::Top,
        }
    }

    pub fn borderless(mut self) -> Self {
        self.border = None;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn fixed_height(mut self, height: f32) -> Self {
        self.fixed_height = Some(height);
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Outer height given the natural height of the content.
    pub fn outer_height(&self, content_height: f32) -> f32 {
        match self.fixed_height {
            Some(h) => h,
            None => content_height + 2.0 * self.padding,
        }
    }
}

impl From<Cell> for BlockNode {
    fn from(cell: Cell) -> Self {
        BlockNode::Cell(Box::new(cell))
    }
}
