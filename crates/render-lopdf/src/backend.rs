use crate::canvas::LopdfCanvas;
use crate::helpers::font_resources;
use lopdf::{dictionary, Document, Object, Stream};
use shiplabel_pdf_composer::{concatenate, PDF_VERSION};
use shiplabel_render_core::{RenderError, SheetBackend};
use shiplabel_types::Size;
use std::io::Write;

/// Writes each sheet as a one-page PDF and merges sheets with
/// `shiplabel-pdf-composer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

fn single_page_document(canvas: LopdfCanvas) -> Result<Document, RenderError> {
    let size = shiplabel_render_core::Canvas::size(&canvas);
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let resources_id = doc.add_object(dictionary! {
        "Font" => font_resources(),
    });
    let content = canvas.into_content().encode()?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    let media_box: Vec<Object> = vec![0.0f32.into(), 0.0f32.into(), size.width.into(), size.height.into()];
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box,
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1i64,
        }
        .into(),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    Ok(doc)
}

impl SheetBackend for LopdfBackend {
    type Canvas = LopdfCanvas;

    fn open_sheet(&self, size: Size) -> Result<LopdfCanvas, RenderError> {
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(RenderError::Other(format!(
                "Sheet size must be positive, got {}x{}",
                size.width, size.height
            )));
        }
        Ok(LopdfCanvas::new(size))
    }

    fn finish_sheet(&self, canvas: LopdfCanvas, out: &mut dyn Write) -> Result<(), RenderError> {
        let ops = canvas.operations().len();
        let mut doc = single_page_document(canvas)?;
        let mut writer = out;
        doc.save_to(&mut writer)?;
        log::trace!("Finished sheet with {} content operations", ops);
        Ok(())
    }

    fn concatenate(&self, sheets: Vec<Vec<u8>>, out: &mut dyn Write) -> Result<usize, RenderError> {
        let mut documents = Vec::with_capacity(sheets.len());
        for (index, bytes) in sheets.iter().enumerate() {
            let doc = Document::load_mem(bytes).map_err(|e| RenderError::BadArtifact {
                index,
                reason: e.to_string(),
            })?;
            documents.push(doc);
        }

        let mut merged = concatenate(documents).map_err(|e| RenderError::Pdf(e.to_string()))?;
        let pages = merged.get_pages().len();
        let mut writer = out;
        merged.save_to(&mut writer)?;
        log::debug!("Concatenated {} sheet(s) into a {}-page document", sheets.len(), pages);
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiplabel_block::{layout, BlockNode, TextStyle};
    use shiplabel_render_core::Canvas;
    use shiplabel_types::Point;

    const A4: Size = Size { width: 595.28, height: 841.89 };

    fn sheet_with_text(backend: &LopdfBackend, text: &str) -> Vec<u8> {
        let mut canvas = backend.open_sheet(A4).unwrap();
        let block = layout(&BlockNode::text(text, TextStyle::bold(12.0)), 200.0).unwrap();
        canvas.draw_block(&block, Point::new(30.0, 800.0)).unwrap();
        let mut bytes = Vec::new();
        backend.finish_sheet(canvas, &mut bytes).unwrap();
        bytes
    }

    fn page_content(doc: &Document, page: u32) -> String {
        let id = *doc.get_pages().get(&page).unwrap();
        String::from_utf8_lossy(&doc.get_page_content(id).unwrap()).into_owned()
    }

    #[test]
    fn finished_sheet_is_a_single_page_pdf() {
        let backend = LopdfBackend::new();
        let bytes = sheet_with_text(&backend, "SHIPMENT-1");
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        assert!(page_content(&doc, 1).contains("SHIPMENT-1"));
    }

    #[test]
    fn media_box_matches_sheet_size() {
        let backend = LopdfBackend::new();
        let doc = Document::load_mem(&sheet_with_text(&backend, "x")).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        assert!((media_box[2].as_f32().unwrap() - A4.width).abs() < 0.01);
        assert!((media_box[3].as_f32().unwrap() - A4.height).abs() < 0.01);
    }

    #[test]
    fn zero_sheets_concatenate_to_empty_document() {
        let mut out = Vec::new();
        let pages = LopdfBackend::new().concatenate(vec![], &mut out).unwrap();
        assert_eq!(pages, 0);
        let doc = Document::load_mem(&out).unwrap();
        assert!(doc.get_pages().is_empty());
    }

    #[test]
    fn concatenation_keeps_sheet_order() {
        let backend = LopdfBackend::new();
        let sheets = vec![sheet_with_text(&backend, "FIRST"), sheet_with_text(&backend, "SECOND")];
        let mut out = Vec::new();
        assert_eq!(backend.concatenate(sheets, &mut out).unwrap(), 2);
        let doc = Document::load_mem(&out).unwrap();
        assert!(page_content(&doc, 1).contains("FIRST"));
        assert!(page_content(&doc, 2).contains("SECOND"));
    }

    #[test]
    fn unreadable_artifact_is_reported_by_index() {
        let backend = LopdfBackend::new();
        let sheets = vec![sheet_with_text(&backend, "ok"), b"not a pdf".to_vec()];
        let mut out = Vec::new();
        match backend.concatenate(sheets, &mut out) {
            Err(RenderError::BadArtifact { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected BadArtifact, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_sheet_size_is_rejected() {
        assert!(LopdfBackend::new().open_sheet(Size::new(0.0, 10.0)).is_err());
    }
}
