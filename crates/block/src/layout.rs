//! Measures a [`BlockNode`] tree at a given width and flattens it into a
//! [`Block`].
//!
//! Layout runs in two steps per node: `measure` yields the natural height for
//! a width, `place` writes primitives into a rectangle that may be taller than
//! that height (columns stretch their children to the row height).

use crate::block::{Block, Primitive};
use crate::error::BlockError;
use crate::node::{BlockNode, Cell, Column, Mark};
use crate::style::{HAlign, VAlign};
use crate::text::wrap;
use shiplabel_types::{Rect, Size};

#[derive(Default)]
struct LayoutContext {
    primitives: Vec<Primitive>,
    marks: Vec<(Mark, Rect)>,
}

/// Lays `node` out at `width` points wide.
pub fn layout(node: &BlockNode, width: f32) -> Result<Block, BlockError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(BlockError::InvalidWidth(width));
    }
    let height = measure(node, width)?;
    let mut ctx = LayoutContext::default();
    place(node, Rect::new(0.0, 0.0, width, height), &mut ctx)?;
    log::trace!(
        "Laid out block {:.2}x{:.2} with {} primitives",
        width,
        height,
        ctx.primitives.len()
    );
    Ok(Block {
        size: Size::new(width, height),
        primitives: ctx.primitives,
        marks: ctx.marks,
    })
}

fn column_widths(columns: &[Column], width: f32) -> Result<Vec<f32>, BlockError> {
    let total: f32 = columns.iter().map(|c| c.weight.max(0.0)).sum();
    if columns.is_empty() || total <= 0.0 {
        return Err(BlockError::InvalidColumns);
    }
    Ok(columns
        .iter()
        .map(|c| width * c.weight.max(0.0) / total)
        .collect())
}

fn measure(node: &BlockNode, width: f32) -> Result<f32, BlockError> {
    match node {
        BlockNode::Text { text, style } => {
            let lines = wrap(text, style.font, style.size, width);
            Ok(lines.len() as f32 * style.line_height())
        }
        BlockNode::Rows(children) => children
            .iter()
            .map(|child| measure(child, width))
            .sum(),
        BlockNode::Columns(columns) => {
            let widths = column_widths(columns, width)?;
            let mut tallest: f32 = 0.0;
            for (column, w) in columns.iter().zip(widths) {
                tallest = tallest.max(measure(&column.child, w)?);
            }
            Ok(tallest)
        }
        BlockNode::Cell(cell) => {
            let inner = (width - 2.0 * cell.padding).max(0.0);
            Ok(cell.outer_height(measure(&cell.child, inner)?))
        }
        BlockNode::Barcode { height, .. } => Ok(*height),
        BlockNode::Mark { child, .. } => measure(child, width),
        BlockNode::Spacer(height) => Ok(*height),
    }
}

fn place(node: &BlockNode, rect: Rect, ctx: &mut LayoutContext) -> Result<(), BlockError> {
    match node {
        BlockNode::Text { text, style } => {
            for (i, line) in wrap(text, style.font, style.size, rect.width)
                .into_iter()
                .enumerate()
            {
                if line.text.trim().is_empty() {
                    continue;
                }
                let x = match style.align {
                    HAlign::Left => rect.x,
                    HAlign::Center => rect.x + (rect.width - line.width) / 2.0,
                    HAlign::Right => rect.right() - line.width,
                };
                let top = rect.y + i as f32 * style.line_height();
                ctx.primitives.push(Primitive::Text {
                    x,
                    baseline: top + style.baseline_offset(),
                    text: line.text,
                    font: style.font,
                    size: style.size,
                });
            }
        }
        BlockNode::Rows(children) => {
            let mut y = rect.y;
            for child in children {
                let h = measure(child, rect.width)?;
                place(child, Rect::new(rect.x, y, rect.width, h), ctx)?;
                y += h;
            }
        }
        BlockNode::Columns(columns) => {
            let widths = column_widths(columns, rect.width)?;
            let mut x = rect.x;
            for (column, w) in columns.iter().zip(widths) {
                place(&column.child, Rect::new(x, rect.y, w, rect.height), ctx)?;
                x += w;
            }
        }
        BlockNode::Cell(cell) => place_cell(cell, rect, ctx)?,
        BlockNode::Barcode { pattern, height, max_module_width } => {
            if pattern.total_modules == 0 {
                return Ok(());
            }
            let module = (rect.width / pattern.total_modules as f32).min(*max_module_width);
            let left = rect.x + (rect.width - module * pattern.total_modules as f32) / 2.0;
            for bar in &pattern.bars {
                ctx.primitives.push(Primitive::FillRect {
                    rect: Rect::new(
                        left + bar.start as f32 * module,
                        rect.y,
                        bar.width as f32 * module,
                        *height,
                    ),
                });
            }
        }
        BlockNode::Mark { mark, child } => {
            ctx.marks.push((*mark, rect));
            place(child, rect, ctx)?;
        }
        BlockNode::Spacer(_) => {}
    }
    Ok(())
}

fn place_cell(cell: &Cell, rect: Rect, ctx: &mut LayoutContext) -> Result<(), BlockError> {
    if let Some(line_width) = cell.border {
        ctx.primitives.push(Primitive::StrokeRect { rect, line_width });
    }
    let inner = Rect::new(
        rect.x + cell.padding,
        rect.y + cell.padding,
        (rect.width - 2.0 * cell.padding).max(0.0),
        (rect.height - 2.0 * cell.padding).max(0.0),
    );
    let content_height = measure(&cell.child, inner.width)?;
    let dy = match cell.valign {
        VAlign::Top => 0.0,
        VAlign::Middle => (inner.height - content_height) / 2.0,
        VAlign::Bottom => inner.height - content_height,
    };
    place(
        &cell.child,
        Rect::new(inner.x, inner.y + dy, inner.width, content_height),
        ctx,
    )
}
