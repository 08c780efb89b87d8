use crate::fonts::StandardFont;

/// Ratio between line advance and font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: StandardFont,
    pub size: f32,
    pub align: HAlign,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self { font: StandardFont::Helvetica, size, align: HAlign::Left }
    }

    pub fn bold(size: f32) -> Self {
        Self { font: StandardFont::HelveticaBold, size, align: HAlign::Left }
    }

    pub fn italic(size: f32) -> Self {
        Self { font: StandardFont::HelveticaOblique, size, align: HAlign::Left }
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }

    /// Distance from the top of a line box to the baseline.
    pub fn baseline_offset(&self) -> f32 {
        self.size * 0.9
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(12.0)
    }
}
