#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use shiplabel::{DocumentAssembler, DocumentBuildError, LabelRecord, MemorySink, SheetConfig};
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text runs drawn on `page` (1-based).
    pub fn text_runs(&self, page: u32) -> Vec<pdf_assertions::TextRun> {
        pdf_assertions::text_runs(&self.doc, page)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Config whose scratch directories are created under `scratch`.
pub fn config_with_scratch(scratch: &Path) -> SheetConfig {
    SheetConfig { scratch_dir: Some(scratch.to_path_buf()), ..SheetConfig::default() }
}

/// Builds `records` into memory with the reference label.
pub fn build_in_memory(
    records: &[LabelRecord],
    config: SheetConfig,
) -> Result<GeneratedPdf, DocumentBuildError> {
    let mut sink = MemorySink::new();
    DocumentAssembler::new(config).build(records, &mut sink)?;
    let bytes = sink.into_bytes().unwrap_or_default();
    Ok(GeneratedPdf::from_bytes(bytes).expect("build produced an unreadable PDF"))
}

/// Number of entries directly inside `dir`.
pub fn entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}
