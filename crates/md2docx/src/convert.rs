use std::fs;
use std::path::Path;

use crate::engine::{ConversionEngine, ConversionJob};
use crate::error::{ConvertError, ConvertResult};

/// Convert one Markdown file, writing (or overwriting) `destination`.
///
/// The source and the optional reference document must both exist before the
/// engine is invoked; nothing is created on disk when a precondition fails.
/// Missing parent directories of the destination are created.
pub fn convert_file(
    engine: &dyn ConversionEngine,
    source: &Path,
    destination: &Path,
    reference_doc: Option<&Path>,
) -> ConvertResult<()> {
    if !source.is_file() {
        return Err(ConvertError::MissingInput(source.to_path_buf()));
    }
    if let Some(reference) = reference_doc {
        if !reference.is_file() {
            return Err(ConvertError::MissingInput(reference.to_path_buf()));
        }
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    log::info!("converting {} -> {}", source.display(), destination.display());
    let job = ConversionJob::markdown_to_docx(source, destination, reference_doc);
    engine.convert(&job).map_err(|err| ConvertError::Engine {
        path: source.to_path_buf(),
        source: err,
    })
}
