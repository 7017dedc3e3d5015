use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

/// Errors surfaced by the conversion pipeline.
///
/// Every component fails fast and propagates these unchanged; only the
/// command-line boundary renders them.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A source file or reference document does not exist or is not a
    /// regular file.
    #[error("file not found: {0}")]
    MissingInput(PathBuf),

    /// The folder-mode root does not exist or is not a directory.
    #[error("not a directory: {0}")]
    InvalidRoot(PathBuf),

    /// The external engine was unavailable or reported a conversion
    /// failure. Never retried.
    #[error("conversion failed for {path}")]
    Engine {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
