//! Destinations for the finished document.
//!
//! A sink is written in two phases: the document is streamed into a staged
//! writer, then either committed or discarded. Nothing becomes visible at the
//! destination before `commit`.

use crate::error::LabelError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait OutputSink {
    /// Starts a fresh staged output, dropping anything staged before.
    fn stage(&mut self) -> Result<&mut dyn Write, LabelError>;

    /// Makes the staged output the final artifact.
    fn commit(&mut self) -> Result<(), LabelError>;

    /// Throws the staged output away. Safe to call when nothing is staged.
    fn discard(&mut self);

    /// Where the output goes, for error messages and logs.
    fn location(&self) -> PathBuf;
}

/// Writes to a file path atomically: output is staged in a temporary file
/// next to the target and renamed over it on commit.
#[derive(Debug)]
pub struct FileSink {
    target: PathBuf,
    staged: Option<NamedTempFile>,
}

impl FileSink {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self { target: target.into(), staged: None }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    fn staging_dir(&self) -> &Path {
        match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl OutputSink for FileSink {
    fn stage(&mut self) -> Result<&mut dyn Write, LabelError> {
        let file = NamedTempFile::new_in(self.staging_dir())
            .map_err(|e| LabelError::io("staging output", self.staging_dir(), e))?;
        Ok(self.staged.insert(file))
    }

    fn commit(&mut self) -> Result<(), LabelError> {
        let Some(mut staged) = self.staged.take() else {
            return Err(LabelError::io(
                "committing output",
                &self.target,
                std::io::Error::other("nothing was staged"),
            ));
        };
        staged
            .flush()
            .map_err(|e| LabelError::io("flushing output", &self.target, e))?;
        staged
            .persist(&self.target)
            .map_err(|e| LabelError::io("persisting output", &self.target, e.error))?;
        log::debug!("Committed {}", self.target.display());
        Ok(())
    }

    fn discard(&mut self) {
        if let Some(staged) = self.staged.take() {
            if let Err(e) = staged.close() {
                log::warn!("Could not remove staged output for {}: {}", self.target.display(), e);
            }
        }
    }

    fn location(&self) -> PathBuf {
        self.target.clone()
    }
}

/// Keeps the committed document in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    staged: Option<Vec<u8>>,
    committed: Option<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.committed.as_deref()
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        self.committed
    }
}

impl OutputSink for MemorySink {
    fn stage(&mut self) -> Result<&mut dyn Write, LabelError> {
        Ok(self.staged.insert(Vec::new()))
    }

    fn commit(&mut self) -> Result<(), LabelError> {
        match self.staged.take() {
            Some(bytes) => {
                self.committed = Some(bytes);
                Ok(())
            }
            None => Err(LabelError::io(
                "committing output",
                self.location(),
                std::io::Error::other("nothing was staged"),
            )),
        }
    }

    fn discard(&mut self) {
        self.staged = None;
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}
