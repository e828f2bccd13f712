//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while articles are merged
//! - Interactive progress bars using indicatif
//! - Silent progress for dry-run and quiet mode
//! - Styled status lines (see [`status`])

pub mod status;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress reporter trait for a merge run
pub trait ProgressReporter {
    /// Begin reporting for a known number of articles
    fn start(&mut self, total_files: u64);

    /// Show the article currently being merged and advance
    fn update_file(&mut self, file_name: &str);

    /// Finish progress
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
///
/// The bar draws to stderr and stays hidden when stderr is not a terminal.
#[derive(Default)]
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total_files: u64) {
        let file_pb = ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr());
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            file_pb.set_style(style.progress_chars("#>-"));
        }
        self.file_pb = Some(file_pb);
    }

    fn update_file(&mut self, file_name: &str) {
        if let Some(ref file_pb) = self.file_pb {
            // Truncate long names for display
            let display_name = if file_name.chars().count() > 50 {
                let tail: String = file_name
                    .chars()
                    .rev()
                    .take(47)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("...{tail}")
            } else {
                file_name.to_string()
            };
            file_pb.set_message(display_name);
            file_pb.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.abandon();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation used with `--quiet`, `--dry-run` and in tests.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total_files: u64) {}

    fn update_file(&mut self, _file_name: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
