//! Markdown to DOCX conversion orchestrator.
//!
//! All document generation is delegated to an external conversion engine
//! (Pandoc by default); this crate only discovers inputs, derives output
//! paths, and drives the engine one file at a time, synchronously and in a
//! deterministic order.

pub mod batch;
pub mod convert;
pub mod discover;
pub mod engine;
pub mod error;
pub mod outpath;

pub use batch::{run_folder, run_single_file};
pub use convert::convert_file;
pub use discover::collect_markdown_files;
pub use engine::{ConversionEngine, ConversionJob, EngineError, PandocEngine};
pub use error::{ConvertError, ConvertResult};
