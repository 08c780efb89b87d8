//! Shipping label sheets.
//!
//! Records are split into groups of four ([`batcher`]); each group becomes
//! one sheet with a label centred in every quadrant ([`quadrant`],
//! [`centering`], [`sheet`]); the sheets are concatenated into one document
//! written to an [`OutputSink`] ([`document`]).
//!
//! ```no_run
//! use shiplabel::{DocumentAssembler, FileSink, LabelRecord, SheetConfig};
//!
//! let records = LabelRecord::samples(10);
//! let assembler = DocumentAssembler::new(SheetConfig::default());
//! assembler.build(&records, &mut FileSink::new("labels.pdf"))?;
//! # Ok::<(), shiplabel::DocumentBuildError>(())
//! ```

pub mod batcher;
pub mod centering;
pub mod config;
pub mod decoration;
pub mod document;
pub mod error;
pub mod label;
pub mod quadrant;
pub mod record;
pub mod sheet;
pub mod sink;

pub use batcher::{batch, locate, Group, GROUP_SIZE};
pub use centering::center;
pub use config::{EmptyInputPolicy, PageSize, SheetConfig};
pub use decoration::{Decoration, SequenceRing};
pub use document::{BuildSummary, DocumentAssembler};
pub use error::{DocumentBuildError, LabelError};
pub use label::{BlockRenderer, StandardLabel};
pub use quadrant::{anchor_rect, quadrant_for, Quadrant};
pub use record::LabelRecord;
pub use sheet::{PlacedBlock, RenderedSheet, SheetAssembler};
pub use sink::{FileSink, MemorySink, OutputSink};

pub use shiplabel_render_core::{Canvas, SheetBackend, YAxis};
pub use shiplabel_render_lopdf::LopdfBackend;
