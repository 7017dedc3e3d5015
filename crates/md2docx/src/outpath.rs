//! Destination-path derivation for single-file and batch conversions.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Extension used for generated documents.
pub const DOCX_EXTENSION: &str = "docx";

/// Destination for a single-file conversion: the explicit output when given
/// (made absolute), otherwise the input with its extension swapped for
/// `.docx`, beside the input.
pub fn single_output(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(output) => absolutize(output),
        None => input.with_extension(DOCX_EXTENSION),
    }
}

/// Destination for one file of a batch run.
///
/// Without an output directory the document lands beside its source. With an
/// output directory the source's path relative to `root` is flattened into a
/// single file name: `sub/note.md` becomes `sub_note.docx`, so outputs from
/// different subdirectories do not clash in the flat output directory. An
/// input outside `root` falls back to its bare file name.
///
/// Known limitation: two distinct relative paths can still flatten to the
/// same name (a literal underscore colliding with a separator); the later
/// write then silently overwrites the earlier one.
pub fn batch_output(input: &Path, root: &Path, output_dir: Option<&Path>) -> PathBuf {
    let Some(output_dir) = output_dir else {
        return input.with_extension(DOCX_EXTENSION);
    };

    let relative = match input.strip_prefix(root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => PathBuf::from(input.file_name().unwrap_or(input.as_os_str())),
    };
    let stem = flatten(&relative.with_extension(""));
    absolutize(output_dir).join(format!("{stem}.{DOCX_EXTENSION}"))
}

/// Join the normal components of a relative path with underscores.
fn flatten(relative: &Path) -> String {
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("_")
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
