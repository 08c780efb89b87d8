use crate::helpers::{circle_operations, font_resource_name, to_win_ansi};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use shiplabel_block::{Block, Primitive, StandardFont};
use shiplabel_render_core::{Canvas, RenderError};
use shiplabel_types::{Point, Size};

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(StandardFont, f32)>,
    line_width: Option<f32>,
}

/// Collects the content stream of one PDF sheet. Native space is PDF user
/// space: origin at the bottom-left corner, y growing upward.
pub struct LopdfCanvas {
    size: Size,
    content: Content,
    state: PageRenderState,
}

impl LopdfCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.content.operations
    }

    pub(crate) fn into_content(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        if self.state.font != Some((font, size)) {
            self.push(
                "Tf",
                vec![Object::Name(font_resource_name(font).as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((font, size));
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn draw_primitive(&mut self, primitive: &Primitive, top_left: Point) {
        match primitive {
            Primitive::Text { x, baseline, text, font, size } => {
                self.push("BT", vec![]);
                self.set_font(*font, *size);
                self.push("Td", vec![(top_left.x + x).into(), (top_left.y - baseline).into()]);
                self.push("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)]);
                self.push("ET", vec![]);
            }
            Primitive::StrokeRect { rect, line_width } => {
                self.set_line_width(*line_width);
                let bottom = top_left.y - rect.bottom();
                self.push(
                    "re",
                    vec![(top_left.x + rect.x).into(), bottom.into(), rect.width.into(), rect.height.into()],
                );
                self.push("S", vec![]);
            }
            Primitive::FillRect { rect } => {
                let bottom = top_left.y - rect.bottom();
                self.push(
                    "re",
                    vec![(top_left.x + rect.x).into(), bottom.into(), rect.width.into(), rect.height.into()],
                );
                self.push("f", vec![]);
            }
        }
    }
}

impl Canvas for LopdfCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_block(&mut self, block: &Block, top_left: Point) -> Result<(), RenderError> {
        for primitive in &block.primitives {
            self.draw_primitive(primitive, top_left);
        }
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, line_width: f32) -> Result<(), RenderError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::Other(format!("Invalid circle radius {}", radius)));
        }
        self.set_line_width(line_width);
        self.content.operations.extend(circle_operations(center, radius));
        Ok(())
    }
}
