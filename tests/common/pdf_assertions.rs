use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

/// A `Tj` together with the position set by the preceding `Td`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

/// Decoded content operations of `page` (1-based).
pub fn page_content(doc: &LopdfDocument, page: u32) -> Content {
    let page_id = *doc.get_pages().get(&page).expect("page exists");
    let bytes = doc.get_page_content(page_id).expect("page has content");
    Content::decode(&bytes).expect("content stream decodes")
}

pub fn text_runs(doc: &LopdfDocument, page: u32) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let (mut x, mut y) = (0.0, 0.0);
    for op in page_content(doc, page).operations {
        match op.operator.as_str() {
            "Td" if op.operands.len() == 2 => {
                x = number(&op.operands[0]).unwrap_or(0.0);
                y = number(&op.operands[1]).unwrap_or(0.0);
            }
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    runs.push(TextRun { x, y, text: String::from_utf8_lossy(bytes).into_owned() });
                }
            }
            _ => {}
        }
    }
    runs
}

/// Count of stroked circles (paths starting with `m` followed by four `c`).
pub fn circle_count(doc: &LopdfDocument, page: u32) -> usize {
    let ops: Vec<String> = page_content(doc, page)
        .operations
        .into_iter()
        .map(|op| op.operator)
        .collect();
    ops.windows(6)
        .filter(|w| w[0] == "m" && w[1..5].iter().all(|op| op == "c") && w[5] == "S")
        .count()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = doc.get_pages().get(&page_num).copied()?;
    let page_dict = doc.get_object(page_id).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = number(&arr[2])? - number(&arr[0])?;
    let height = number(&arr[3])? - number(&arr[1])?;
    Some((width, height))
}
