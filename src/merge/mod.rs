//! Markdown merger
//!
//! This module handles:
//! - Validating the input directory and finding its Markdown files
//! - Rendering the merged document (see [`document`])
//! - Publishing it atomically (see [`output`])
//!
//! Both recoverable conditions (missing directory, no Markdown files) are
//! detected before the output is opened, so neither leaves a file behind.

pub mod discovery;
pub mod document;
pub mod output;

use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::MergeJob;
use crate::error::{self, MergeError, Result};
use crate::ui::ProgressReporter;

pub use discovery::{ExcludeSet, SourceFile};
use document::DocumentWriter;
use output::AtomicOutput;

/// Outcome of a successful merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of articles written
    pub files_merged: usize,
    /// Merged file names, in output order
    pub articles: Vec<String>,
    /// Where the document was written
    pub output_file: PathBuf,
}

/// Determine which files a job would merge, in order
///
/// Fails with [`MergeError::InputDirNotFound`], [`MergeError::InputNotADirectory`] or
/// [`MergeError::NoMarkdownFiles`] without touching the output path.
pub fn plan(job: &MergeJob) -> Result<Vec<SourceFile>> {
    if !job.input_dir.exists() {
        return Err(MergeError::InputDirNotFound {
            path: job.input_dir.display().to_string(),
        });
    }
    if !job.input_dir.is_dir() {
        return Err(MergeError::InputNotADirectory {
            path: job.input_dir.display().to_string(),
        });
    }

    let exclude = ExcludeSet::new(&job.exclude)?;
    let files = discovery::discover(&job.input_dir, &exclude, Some(&job.output_file))?;

    if files.is_empty() {
        return Err(MergeError::NoMarkdownFiles {
            path: job.input_dir.display().to_string(),
        });
    }

    Ok(files)
}

/// Merge every Markdown file of `job.input_dir` into `job.output_file`
pub fn merge(job: &MergeJob, reporter: &mut dyn ProgressReporter) -> Result<MergeReport> {
    let files = plan(job)?;
    reporter.start(files.len() as u64);

    match write_document(job, &files, reporter) {
        Ok(output_file) => {
            reporter.finish();
            info!(files = files.len(), output = %output_file.display(), "merge complete");
            Ok(MergeReport {
                files_merged: files.len(),
                articles: files.into_iter().map(|f| f.name).collect(),
                output_file,
            })
        }
        Err(e) => {
            reporter.abandon();
            Err(e)
        }
    }
}

fn write_document(
    job: &MergeJob,
    files: &[SourceFile],
    reporter: &mut dyn ProgressReporter,
) -> Result<PathBuf> {
    let output = AtomicOutput::create(&job.output_file)?;
    let target = output.target().to_path_buf();
    let write_err = |e: std::io::Error| error::fs::write_failed(&target, e);

    let mut doc = DocumentWriter::new(BufWriter::new(output), job.separator.as_str());
    doc.write_header(&job.ai_context, &job.ai_prompt)
        .map_err(write_err)?;

    for (i, file) in files.iter().enumerate() {
        reporter.update_file(&file.name);
        debug!(file = %file.name, "merging article");

        let content =
            fs::read_to_string(&file.path).map_err(|e| error::fs::read_failed(&file.path, e))?;

        doc.write_article(file.title(), &content)
            .map_err(write_err)?;

        if i + 1 < files.len() {
            doc.write_delimiter().map_err(write_err)?;
        }
    }

    doc.flush().map_err(write_err)?;
    let output = doc
        .into_inner()
        .into_inner()
        .map_err(|e| write_err(e.into_error()))?;

    output.commit()
}
