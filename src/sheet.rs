//! Places one group of labels on one sheet.
//!
//! Each record's block is laid out at label width, centred inside the
//! quadrant for its position, and handed to the canvas in the canvas's
//! native coordinates. Quadrants in the upper half are measured from the
//! sheet's top edge, quadrants in the lower half from its bottom edge.

use crate::batcher::Group;
use crate::centering::center;
use crate::config::SheetConfig;
use crate::decoration::{Decoration, SequenceRing};
use crate::error::LabelError;
use crate::label::{BlockRenderer, StandardLabel};
use crate::quadrant::{anchor_rect, quadrant_for, Quadrant, VerticalEdge};
use shiplabel_block::Block;
use shiplabel_render_core::utils::flip_y;
use shiplabel_render_core::{Canvas, YAxis};
use shiplabel_types::{Offset, Point, Rect, Size};

/// Where one block ended up on a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBlock {
    pub quadrant: Quadrant,
    pub position: usize,
    pub record_index: usize,
    /// Top-left corner in sheet layout space (origin top-left, y down).
    pub layout_origin: Point,
    /// Top-left corner in the canvas's native space.
    pub native_origin: Point,
    pub size: Size,
    pub y_axis: YAxis,
}

impl PlacedBlock {
    /// Converts a block-local point (y down) to native coordinates.
    pub fn to_native(&self, local: Point) -> Point {
        match self.y_axis {
            YAxis::Up => Point::new(self.native_origin.x + local.x, self.native_origin.y - local.y),
            YAxis::Down => Point::new(self.native_origin.x + local.x, self.native_origin.y + local.y),
        }
    }

    /// The block's rectangle in sheet layout space.
    pub fn layout_rect(&self) -> Rect {
        Rect::new(self.layout_origin.x, self.layout_origin.y, self.size.width, self.size.height)
    }
}

/// Computes the placement of a block of `size` in `quadrant` without drawing.
pub fn place(quadrant: Quadrant, sheet: Size, size: Size, y_axis: YAxis) -> (Rect, Offset, Point) {
    let anchor = anchor_rect(quadrant, sheet);
    let offset = center(anchor, size.width, size.height);
    let x = anchor.x + offset.dx;
    let native_top = match (quadrant.edge(), y_axis) {
        (VerticalEdge::Top, YAxis::Up) => flip_y(anchor.y + offset.dy, sheet.height),
        (VerticalEdge::Top, YAxis::Down) => anchor.y + offset.dy,
        (VerticalEdge::Bottom, YAxis::Up) => flip_y(anchor.bottom(), sheet.height) + offset.dy + size.height,
        (VerticalEdge::Bottom, YAxis::Down) => anchor.bottom() - offset.dy - size.height,
    };
    (anchor, offset, Point::new(x, native_top))
}

/// The placements made on one sheet, in position order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSheet {
    pub group_index: usize,
    pub placements: Vec<PlacedBlock>,
}

impl RenderedSheet {
    pub fn occupied(&self) -> Vec<Quadrant> {
        self.placements.iter().map(|p| p.quadrant).collect()
    }

    pub fn blank(&self) -> Vec<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .filter(|q| !self.placements.iter().any(|p| p.quadrant == *q))
            .collect()
    }
}

pub struct SheetAssembler<R = StandardLabel> {
    renderer: R,
    label_margin: f32,
    decorations: Vec<Box<dyn Decoration>>,
}

impl SheetAssembler<StandardLabel> {
    /// The reference label and decorations as configured.
    pub fn standard(config: &SheetConfig) -> Self {
        Self::from_config(StandardLabel::new(), config)
    }
}

impl<R: BlockRenderer> SheetAssembler<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            label_margin: SheetConfig::default().label_margin,
            decorations: Vec::new(),
        }
    }

    pub fn from_config(renderer: R, config: &SheetConfig) -> Self {
        let mut assembler = Self::new(renderer).label_margin(config.label_margin);
        if config.sequence_ring {
            assembler = assembler.with_decoration(SequenceRing::default());
        }
        assembler
    }

    pub fn label_margin(mut self, margin: f32) -> Self {
        self.label_margin = margin;
        self
    }

    pub fn with_decoration(mut self, decoration: impl Decoration + 'static) -> Self {
        self.decorations.push(Box::new(decoration));
        self
    }

    pub fn label_width(&self, sheet: Size) -> f32 {
        sheet.width / 2.0 - self.label_margin
    }

    fn render_block(&self, group: &Group<'_>, position: usize, width: f32) -> Result<Block, LabelError> {
        let record = &group.records[position];
        self.renderer
            .render(record, width)
            .map_err(|source| LabelError::LabelRender {
                group_index: group.index,
                position,
                record_index: group.record_index(position),
                source,
            })
    }

    /// Draws every record of `group` onto `canvas`, a sheet of `sheet` size.
    pub fn assemble<C: Canvas>(
        &self,
        group: &Group<'_>,
        sheet: Size,
        canvas: &mut C,
    ) -> Result<RenderedSheet, LabelError> {
        let width = self.label_width(sheet);
        let y_axis = canvas.y_axis();
        let mut placements = Vec::with_capacity(group.len());

        for (position, _) in group.positions() {
            let quadrant = quadrant_for(position)?;
            let block = self.render_block(group, position, width)?;
            let (anchor, offset, native_origin) = place(quadrant, sheet, block.size, y_axis);

            canvas.draw_block(&block, native_origin)?;

            let placed = PlacedBlock {
                quadrant,
                position,
                record_index: group.record_index(position),
                layout_origin: anchor.origin().translate(offset),
                native_origin,
                size: block.size,
                y_axis,
            };
            for decoration in &self.decorations {
                decoration.decorate(&mut *canvas, &block, &placed)?;
            }
            log::debug!(
                "Group {} position {} -> {} at ({:.2}, {:.2}), block {:.2}x{:.2}",
                group.index,
                position,
                quadrant,
                native_origin.x,
                native_origin.y,
                block.width(),
                block.height()
            );
            placements.push(placed);
        }

        Ok(RenderedSheet { group_index: group.index, placements })
    }
}
