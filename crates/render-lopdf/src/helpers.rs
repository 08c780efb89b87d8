use lopdf::content::Operation;
use lopdf::{dictionary, Dictionary, Object};
use shiplabel_block::StandardFont;
use shiplabel_types::Point;

/// Cubic Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Resource name the content stream uses for `font`.
pub fn font_resource_name(font: StandardFont) -> &'static str {
    match font {
        StandardFont::Helvetica => "F1",
        StandardFont::HelveticaBold => "F2",
        StandardFont::HelveticaOblique => "F3",
    }
}

/// The `/Font` resource dictionary covering every standard font.
pub(crate) fn font_resources() -> Dictionary {
    let mut fonts = Dictionary::new();
    for font in StandardFont::ALL {
        fonts.set(
            font_resource_name(font),
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            },
        );
    }
    fonts
}

/// Encodes `s` for a WinAnsiEncoding font. Only printable ASCII and Latin-1
/// map to the same byte; everything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

/// Path operations for a full circle built from four Bezier arcs, followed by
/// a stroke.
pub(crate) fn circle_operations(center: Point, radius: f32) -> Vec<Operation> {
    let (cx, cy, r) = (center.x, center.y, radius);
    let k = KAPPA * r;
    let curve = |pts: [f32; 6]| Operation::new("c", pts.iter().map(|v| Object::Real(*v)).collect());
    vec![
        Operation::new("m", vec![(cx + r).into(), cy.into()]),
        curve([cx + r, cy + k, cx + k, cy + r, cx, cy + r]),
        curve([cx - k, cy + r, cx - r, cy + k, cx - r, cy]),
        curve([cx - r, cy - k, cx - k, cy - r, cx, cy - r]),
        curve([cx + k, cy - r, cx + r, cy - k, cx + r, cy]),
        Operation::new("S", vec![]),
    ]
}
