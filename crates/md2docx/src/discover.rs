use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ConvertError, ConvertResult};

/// Return true when the path carries a `.md` extension (case-insensitive).
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("md"))
}

/// Enumerate candidate Markdown files under `root`.
///
/// Non-recursive mode lists direct children only; recursive mode walks the
/// whole tree. An empty result is not an error. The result is sorted by
/// resolved absolute path so batch output order is reproducible across runs.
pub fn collect_markdown_files(root: &Path, recursive: bool) -> ConvertResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ConvertError::InvalidRoot(root.to_path_buf()));
    }
    let root = root.canonicalize()?;

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(&root).max_depth(max_depth) {
        let entry = entry.map_err(|err| ConvertError::Io(err.into()))?;
        if entry.file_type().is_file() && is_markdown_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    log::debug!("discovered {} markdown file(s) under {}", files.len(), root.display());
    Ok(files)
}
