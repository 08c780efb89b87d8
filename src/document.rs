//! Drives a whole build: batching, one sheet artifact per group, and the
//! final concatenation into the sink.
//!
//! Intermediate sheets live in a scratch directory created for the build
//! and removed before `build` returns, on success and on failure alike. On
//! failure the sink is discarded, so no partial document is left behind.

use crate::batcher::{batch, Group};
use crate::config::{EmptyInputPolicy, SheetConfig};
use crate::error::{DocumentBuildError, LabelError};
use crate::label::{BlockRenderer, StandardLabel};
use crate::record::LabelRecord;
use crate::sheet::SheetAssembler;
use crate::sink::OutputSink;
use shiplabel_render_core::SheetBackend;
use shiplabel_render_lopdf::LopdfBackend;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Outcome of a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub labels: usize,
    pub sheets: usize,
}

pub struct DocumentAssembler<B = LopdfBackend, R = StandardLabel> {
    backend: B,
    sheets: SheetAssembler<R>,
    config: SheetConfig,
}

impl DocumentAssembler<LopdfBackend, StandardLabel> {
    /// PDF output with the reference label.
    pub fn new(config: SheetConfig) -> Self {
        let sheets = SheetAssembler::standard(&config);
        Self { backend: LopdfBackend::new(), sheets, config }
    }
}

impl<B: SheetBackend, R: BlockRenderer> DocumentAssembler<B, R> {
    pub fn with_parts(backend: B, sheets: SheetAssembler<R>, config: SheetConfig) -> Self {
        Self { backend, sheets, config }
    }

    /// Renders `records` four to a sheet and writes the document to `sink`.
    pub fn build(
        &self,
        records: &[LabelRecord],
        sink: &mut dyn OutputSink,
    ) -> Result<BuildSummary, DocumentBuildError> {
        log::info!("Building label document: {} record(s) -> {}", records.len(), sink.location().display());
        match self.try_build(records, sink) {
            Ok(summary) => {
                log::info!(
                    "Wrote {} label(s) on {} sheet(s) to {}",
                    summary.labels,
                    summary.sheets,
                    sink.location().display()
                );
                Ok(summary)
            }
            Err(cause) => {
                sink.discard();
                log::warn!("Label document build failed: {}", cause);
                Err(cause.into())
            }
        }
    }

    fn try_build(
        &self,
        records: &[LabelRecord],
        sink: &mut dyn OutputSink,
    ) -> Result<BuildSummary, LabelError> {
        if records.is_empty() && self.config.empty_input == EmptyInputPolicy::Reject {
            return Err(LabelError::EmptyInput);
        }

        let scratch = self.scratch_dir()?;
        let groups = batch(records);
        let mut artifacts = Vec::with_capacity(groups.len());
        for group in &groups {
            let path = scratch.path().join(format!("sheet_{}.pdf", group.index));
            self.write_sheet(group, &path)?;
            log::debug!("Sheet {} written to {}", group.index, path.display());
            artifacts.push(path);
        }

        let sheets = artifacts
            .iter()
            .map(|path| std::fs::read(path).map_err(|e| LabelError::io("reading sheet", path, e)))
            .collect::<Result<Vec<_>, _>>()?;

        let location = sink.location();
        let mut out = BufWriter::new(sink.stage()?);
        let pages = self
            .backend
            .concatenate(sheets, &mut out)
            .map_err(|e| LabelError::writing("writing document", &location, e))?;
        out.flush().map_err(|e| LabelError::io("writing document", &location, e))?;
        drop(out);

        close_scratch(scratch)?;
        sink.commit()?;

        Ok(BuildSummary { labels: records.len(), sheets: pages })
    }

    fn scratch_dir(&self) -> Result<TempDir, LabelError> {
        let parent = self.config.scratch_parent();
        let dir = tempfile::Builder::new()
            .prefix("shiplabel-")
            .tempdir_in(&parent)
            .map_err(|e| LabelError::io("creating scratch directory", &parent, e))?;
        log::debug!("Scratch directory {}", dir.path().display());
        Ok(dir)
    }

    fn write_sheet(&self, group: &Group<'_>, path: &Path) -> Result<(), LabelError> {
        let size = self.config.sheet_size();
        let mut canvas = self.backend.open_sheet(size)?;
        self.sheets.assemble(group, size, &mut canvas)?;

        let file = File::create(path).map_err(|e| LabelError::io("creating sheet", path, e))?;
        let mut writer = BufWriter::new(file);
        self.backend
            .finish_sheet(canvas, &mut writer)
            .map_err(|e| LabelError::writing("writing sheet", path, e))?;
        writer.flush().map_err(|e| LabelError::io("writing sheet", path, e))?;
        Ok(())
    }
}

fn close_scratch(scratch: TempDir) -> Result<(), LabelError> {
    let path: PathBuf = scratch.path().to_path_buf();
    scratch
        .close()
        .map_err(|e| LabelError::io("removing scratch directory", &path, e))?;
    log::debug!("Removed scratch directory {}", path.display());
    Ok(())
}
