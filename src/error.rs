use shiplabel_block::BlockError;
use shiplabel_render_core::RenderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    /// A position outside a group. Groups built by the batcher never produce one.
    #[error("Position {0} is outside a four-label group (expected 0..=3).")]
    InvalidPosition(usize),

    #[error("Label at group {group_index}, position {position} (record {record_index}) could not be rendered: {source}")]
    LabelRender {
        group_index: usize,
        position: usize,
        record_index: usize,
        #[source]
        source: BlockError,
    },

    #[error("I/O error while {context} ({}): {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Canvas error: {0}")]
    Canvas(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No label records were supplied.")]
    EmptyInput,
}

impl LabelError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LabelError::Io { context, path: path.into(), source }
    }

    /// A backend failure while it was writing to `path`. Writer errors become
    /// [`LabelError::Io`] naming the step; the rest stay canvas errors.
    pub(crate) fn writing(context: &'static str, path: impl Into<PathBuf>, err: RenderError) -> Self {
        match err {
            RenderError::Io(source) => LabelError::io(context, path, source),
            other => LabelError::Canvas(other),
        }
    }

    /// `(group_index, position)` of the label that failed, if this is a
    /// render failure.
    pub fn label_position(&self) -> Option<(usize, usize)> {
        match self {
            LabelError::LabelRender { group_index, position, .. } => Some((*group_index, *position)),
            _ => None,
        }
    }
}

/// Terminal failure of a document build, wrapping the first error that
/// aborted it.
#[derive(Error, Debug)]
#[error("Document build failed: {cause}")]
pub struct DocumentBuildError {
    #[source]
    cause: LabelError,
}

impl DocumentBuildError {
    pub fn cause(&self) -> &LabelError {
        &self.cause
    }
}

impl From<LabelError> for DocumentBuildError {
    fn from(cause: LabelError) -> Self {
        DocumentBuildError { cause }
    }
}
