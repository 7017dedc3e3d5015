//! Single-file and folder-mode orchestration.

use std::path::{Path, PathBuf};

use crate::convert::convert_file;
use crate::discover::collect_markdown_files;
use crate::engine::ConversionEngine;
use crate::error::{ConvertError, ConvertResult};
use crate::outpath::{batch_output, single_output};

/// Convert one Markdown file, returning the path of the generated document.
///
/// With no explicit `output` the document is written beside the input with a
/// `.docx` extension.
pub fn run_single_file(
    engine: &dyn ConversionEngine,
    input: &Path,
    output: Option<&Path>,
    reference_doc: Option<&Path>,
) -> ConvertResult<PathBuf> {
    let destination = single_output(input, output);
    convert_file(engine, input, &destination, reference_doc)?;
    Ok(destination)
}

/// Convert every Markdown file under `root`, in discovery order.
///
/// Zero discovered files yields an empty list, not an error; the caller
/// decides what that means. The run stops at the first failure and
/// propagates it: later files are never attempted, and documents already
/// written stay on disk but no partial list is returned.
pub fn run_folder(
    engine: &dyn ConversionEngine,
    root: &Path,
    output_dir: Option<&Path>,
    recursive: bool,
    reference_doc: Option<&Path>,
) -> ConvertResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ConvertError::InvalidRoot(root.to_path_buf()));
    }
    let root = root.canonicalize()?;

    let inputs = collect_markdown_files(&root, recursive)?;

    let mut outputs = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let destination = batch_output(input, &root, output_dir);
        convert_file(engine, input, &destination, reference_doc)?;
        outputs.push(destination);
    }

    Ok(outputs)
}
