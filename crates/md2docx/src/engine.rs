//! The boundary to the external document-conversion engine.
//!
//! The rest of the crate only depends on the [`ConversionEngine`] trait;
//! [`PandocEngine`] is the default implementation and shells out to the
//! `pandoc` executable.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Source-format hint handed to the engine. `hard_line_breaks` keeps single
/// newlines visible as line breaks in the generated document instead of
/// merging them into one paragraph.
pub const MARKDOWN_FORMAT: &str = "markdown+hard_line_breaks";

/// Target format identifier.
pub const DOCX_FORMAT: &str = "docx";

/// Fully-resolved description of one conversion handed to the engine.
#[derive(Clone, Debug)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub from_format: String,
    pub to_format: String,
    /// Extra search path for resources referenced relatively from the
    /// source, e.g. `![alt](flowchart.png)`.
    pub resource_dir: PathBuf,
    /// Existing document whose styles (fonts, headings, margins) are applied
    /// to the output.
    pub reference_doc: Option<PathBuf>,
}

impl ConversionJob {
    /// Build the standard Markdown-to-DOCX job for `source`, resolving
    /// resources against the source file's directory.
    pub fn markdown_to_docx(
        source: &Path,
        destination: &Path,
        reference_doc: Option<&Path>,
    ) -> Self {
        let resource_dir = source
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            from_format: MARKDOWN_FORMAT.to_string(),
            to_format: DOCX_FORMAT.to_string(),
            resource_dir,
            reference_doc: reference_doc.map(Path::to_path_buf),
        }
    }
}

/// Errors reported by a conversion engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine executable could not be found or started.
    #[error("conversion engine '{program}' is not available")]
    Unavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The engine ran but reported a failure.
    #[error("engine exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("i/o error while driving the engine: {0}")]
    Io(#[from] io::Error),
}

/// An external collaborator able to produce the converted output file.
pub trait ConversionEngine {
    fn convert(&self, job: &ConversionJob) -> Result<(), EngineError>;
}

/// Pandoc invoked as a subprocess.
#[derive(Clone, Debug)]
pub struct PandocEngine {
    program: PathBuf,
}

impl Default for PandocEngine {
    fn default() -> Self {
        Self {
            program: PathBuf::from("pandoc"),
        }
    }
}

impl PandocEngine {
    /// Engine resolving `pandoc` on `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using a specific executable instead of the `PATH` lookup.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ConversionEngine for PandocEngine {
    fn convert(&self, job: &ConversionJob) -> Result<(), EngineError> {
        let mut command = Command::new(&self.program);
        command
            .arg(&job.source)
            .arg("--from")
            .arg(&job.from_format)
            .arg("--to")
            .arg(&job.to_format)
            .arg("--output")
            .arg(&job.destination)
            .arg("--resource-path")
            .arg(&job.resource_dir);
        if let Some(reference) = &job.reference_doc {
            command.arg("--reference-doc").arg(reference);
        }

        log::debug!("invoking {command:?}");
        let output = command.output().map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                EngineError::Unavailable {
                    program: self.program.display().to_string(),
                    source: err,
                }
            } else {
                EngineError::Io(err)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(EngineError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_resolves_resources_beside_the_source() {
        let job = ConversionJob::markdown_to_docx(
            Path::new("/docs/guide/intro.md"),
            Path::new("/out/intro.docx"),
            None,
        );

        assert_eq!(job.resource_dir, Path::new("/docs/guide"));
        assert_eq!(job.from_format, MARKDOWN_FORMAT);
        assert_eq!(job.to_format, DOCX_FORMAT);
        assert!(job.reference_doc.is_none());
    }

    #[test]
    fn job_for_bare_file_name_falls_back_to_current_dir() {
        let job = ConversionJob::markdown_to_docx(
            Path::new("notes.md"),
            Path::new("notes.docx"),
            Some(Path::new("styles.docx")),
        );

        assert_eq!(job.resource_dir, Path::new("."));
        assert_eq!(job.reference_doc.as_deref(), Some(Path::new("styles.docx")));
    }

    #[test]
    fn missing_executable_is_reported_as_unavailable() {
        let engine = PandocEngine::with_program("/nonexistent/md2docx-test-pandoc");
        let job = ConversionJob::markdown_to_docx(
            Path::new("notes.md"),
            Path::new("notes.docx"),
            None,
        );

        match engine.convert(&job) {
            Err(EngineError::Unavailable { program, .. }) => {
                assert!(program.contains("md2docx-test-pandoc"));
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }
}
