//! PDF composition utilities for concatenating sheet documents.
//!
//! This crate provides low-level PDF manipulation using lopdf:
//! - Deep object copying with cycle detection
//! - Appending the pages of one document to another, preserving order
//! - Construction of an empty document with a valid page tree

mod error;

pub use error::ComposerError;

use lopdf::{dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

pub const PDF_VERSION: &str = "1.7";

/// A helper struct to manage the state of copying objects between documents.
struct ObjectCopier<'a> {
    source_doc: &'a Document,
    target_doc: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source_doc: &'a Document, target_doc: &'a mut Document) -> Self {
        Self { source_doc, target_doc, id_map: HashMap::new() }
    }

    /// Deep copies an object and everything it references. Each source object
    /// is copied once; the id is reserved before recursing so reference cycles
    /// terminate.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }

        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let obj = self.source_doc.get_object(source_id)?.clone();
        let new_obj = self.remap_references(obj)?;
        self.target_doc.objects.insert(new_id, new_obj);

        Ok(new_id)
    }

    /// Copies a page dictionary without following its `/Parent` link, so the
    /// source page tree is not dragged along.
    fn copy_page(&mut self, page_id: ObjectId, new_parent: ObjectId) -> Result<ObjectId, lopdf::Error> {
        let mut page = self.source_doc.get_object(page_id)?.as_dict()?.clone();
        page.remove(b"Parent");

        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(page_id, new_id);

        let mut remapped = self.remap_references(Object::Dictionary(page))?;
        if let Object::Dictionary(dict) = &mut remapped {
            dict.set("Parent", Object::Reference(new_parent));
        }
        self.target_doc.objects.insert(new_id, remapped);
        Ok(new_id)
    }

    /// Replaces every `Object::Reference` with the id of its copy.
    fn remap_references(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(Object::Reference(self.copy_object(id)?)),
            Object::Array(arr) => {
                let new_arr = arr
                    .into_iter()
                    .map(|o| self.remap_references(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(new_arr))
            }
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            _ => Ok(obj),
        }
    }
}

/// Creates a document with a catalog and an empty page tree.
pub fn empty_document() -> Document {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();
    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0i64,
        }
        .into(),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn pages_root(doc: &Document) -> Result<ObjectId, ComposerError> {
    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    let root_dict = doc.get_object(root_id)?.as_dict()?;
    root_dict
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|_| ComposerError::MalformedPageTree("catalog has no /Pages reference".into()))
}

/// Appends all pages of `source`, in page order, to the end of `target`.
/// Returns the number of pages appended.
pub fn append_document(target: &mut Document, source: &Document) -> Result<usize, ComposerError> {
    let source_pages = source.get_pages();
    if source_pages.is_empty() {
        return Ok(0);
    }

    let pages_id = pages_root(target)?;
    let mut copier = ObjectCopier::new(source, target);
    let mut new_page_refs = Vec::with_capacity(source_pages.len());

    // BTreeMap iteration is ordered by page number.
    for page_id in source_pages.values() {
        let new_page_id = copier.copy_page(*page_id, pages_id)?;
        new_page_refs.push(Object::Reference(new_page_id));
    }

    let appended = new_page_refs.len();
    let pages_dict = target.get_object_mut(pages_id)?.as_dict_mut()?;
    let mut kids = pages_dict.get(b"Kids")?.as_array()?.clone();
    let previous_count = pages_dict.get(b"Count")?.as_i64()?;
    kids.extend(new_page_refs);
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", previous_count + appended as i64);

    log::debug!("Appended {} page(s); document now has {}", appended, previous_count + appended as i64);
    Ok(appended)
}

/// Concatenates `documents` in order into a fresh document.
pub fn concatenate<I>(documents: I) -> Result<Document, ComposerError>
where
    I: IntoIterator<Item = Document>,
{
    let mut target = empty_document();
    for source in documents {
        append_document(&mut target, &source)?;
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Stream, StringFormat};

    /// Creates a simple document with `num_pages` pages, each showing
    /// "<prefix> <n>".
    fn create_dummy_pdf(num_pages: u32, text_prefix: &str) -> Document {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids = vec![];
        for i in 1..=num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![100.into(), 700.into()]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            format!("{} {}", text_prefix, i).into_bytes(),
                            StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id.into());
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => num_pages as i64,
        };
        doc.objects.insert(pages_id, pages_dict.into());

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc
    }

    fn page_text(doc: &Document, page_num: u32) -> String {
        let page_id = *doc.get_pages().get(&page_num).unwrap();
        String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned()
    }

    #[test]
    fn test_empty_document_has_no_pages() {
        let doc = empty_document();
        assert!(doc.get_pages().is_empty());
        let mut bytes = Vec::new();
        let mut doc = doc;
        doc.save_to(&mut bytes).unwrap();
        let reloaded = Document::load_mem(&bytes).unwrap();
        assert!(reloaded.get_pages().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut target = create_dummy_pdf(2, "Target Page");
        let source = create_dummy_pdf(3, "Source Page");

        let appended = append_document(&mut target, &source).unwrap();
        assert_eq!(appended, 3);
        assert_eq!(target.get_pages().len(), 5);
        assert!(page_text(&target, 2).contains("Target Page 2"));
        assert!(page_text(&target, 3).contains("Source Page 1"));
        assert!(page_text(&target, 5).contains("Source Page 3"));
    }

    #[test]
    fn test_appended_pages_point_at_target_tree() {
        let mut target = empty_document();
        let source = create_dummy_pdf(1, "Only");
        append_document(&mut target, &source).unwrap();

        let pages_id = pages_root(&target).unwrap();
        let page_id = *target.get_pages().get(&1).unwrap();
        let page = target.get_object(page_id).unwrap().as_dict().unwrap();
        assert_eq!(page.get(b"Parent").unwrap().as_reference().unwrap(), pages_id);
    }

    #[test]
    fn test_concatenate_sheets_in_order() {
        let sheets = (0..3).map(|i| create_dummy_pdf(1, &format!("Sheet {}", i)));
        let doc = concatenate(sheets).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
        for i in 0..3u32 {
            assert!(page_text(&doc, i + 1).contains(&format!("Sheet {} 1", i)));
        }
    }

    #[test]
    fn test_append_empty_source_is_noop() {
        let mut target = create_dummy_pdf(1, "Target");
        assert_eq!(append_document(&mut target, &empty_document()).unwrap(), 0);
        assert_eq!(target.get_pages().len(), 1);
    }
}
