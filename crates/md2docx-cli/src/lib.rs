//! Command-line surface: argument parsing, result reporting, exit codes.

use std::error::Error as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use md2docx::{run_folder, run_single_file, ConvertError, PandocEngine};

#[derive(Parser)]
#[command(
    name = "md2docx",
    version,
    about = "Convert Markdown (.md) files to Word (.docx). Single file or whole folder.",
    after_help = "Examples:\n  \
        md2docx --file readme.md\n  \
        md2docx --file readme.md --output report.docx\n  \
        md2docx --folder ./docs\n  \
        md2docx --folder ./docs --recursive --output-dir ./docx"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["file", "folder"])))]
pub struct Cli {
    /// Path to a single .md file to convert
    #[arg(short = 'f', long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Path to a folder; convert all .md files inside (see --recursive)
    #[arg(short = 'd', long, value_name = "PATH")]
    folder: Option<PathBuf>,

    /// Output .docx path (single-file mode only). Default: same dir, same name.
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output directory for folder mode. Default: same dir as each .md file.
    #[arg(long, value_name = "PATH")]
    output_dir: Option<PathBuf>,

    /// In folder mode, include .md files in subdirectories
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Optional reference .docx for styles (fonts, headings, margins)
    #[arg(long, value_name = "PATH")]
    reference_doc: Option<PathBuf>,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    env_logger::init();
    let cli = Cli::parse();
    let engine = PandocEngine::new();
    let reference_doc = cli.reference_doc.as_deref();

    let outcome = if let Some(file) = &cli.file {
        run_single_file(&engine, file, cli.output.as_deref(), reference_doc)
            .map(|path| vec![path])
    } else if let Some(folder) = &cli.folder {
        run_folder(
            &engine,
            folder,
            cli.output_dir.as_deref(),
            cli.recursive,
            reference_doc,
        )
    } else {
        unreachable!("clap enforces exactly one mode");
    };

    match outcome {
        Ok(outputs) if outputs.is_empty() => {
            // Informational, but still an unsuccessful run.
            eprintln!("No .md files found.");
            Ok(1)
        }
        Ok(outputs) => {
            for path in &outputs {
                println!("Created: {}", path.display());
            }
            Ok(0)
        }
        Err(
            err @ (ConvertError::MissingInput(_)
            | ConvertError::InvalidRoot(_)
            | ConvertError::Engine { .. }),
        ) => {
            eprintln!("error: {}", render_chain(&err));
            Ok(1)
        }
        // Anything unanticipated propagates with full detail.
        Err(err) => Err(err.into()),
    }
}

/// Render an error and its cause chain as a single line.
fn render_chain(err: &ConvertError) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line.replace('\n', " ")
}
