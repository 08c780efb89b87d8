use crate::fonts::StandardFont;

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub width: f32,
}

/// Greedy word wrapping. Explicit `\n` always breaks; a word wider than
/// `max_width` gets a line of its own and overflows rather than being split.
///
/// Always returns at least one line, so empty text still occupies a line box.
pub fn wrap(text: &str, font: StandardFont, size: f32, max_width: f32) -> Vec<Line> {
    let space = font.text_width(" ", size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width = font.text_width(word, size);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(Line { text: std::mem::take(&mut current), width: current_width });
                current.push_str(word);
                current_width = word_width;
            }
        }
        lines.push(Line { text: current, width: current_width });
    }

    lines
}
