/// Convert a layout Y coordinate (top origin) to a PDF Y coordinate (bottom origin).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
