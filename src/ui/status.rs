//! Styled status lines printed to the user

use std::path::Path;

use console::Style;

use crate::error::MergeError;
use crate::merge::{MergeReport, SourceFile};

/// Print the success summary of a merge
pub fn print_success(report: &MergeReport) {
    println!(
        "{}",
        Style::new().green().bold().apply_to(format!(
            "Successfully merged {} files into {}.",
            report.files_merged,
            report.output_file.display()
        ))
    );
    println!("The final file is now structured for efficient AI processing.");
}

/// Print a recoverable condition (missing directory, no files) as a notice
pub fn print_notice(err: &MergeError) {
    let prefix = match err {
        MergeError::InputDirNotFound { .. } | MergeError::InputNotADirectory { .. } => "Error: ",
        _ => "",
    };
    eprintln!(
        "{}",
        Style::new()
            .yellow()
            .for_stderr()
            .apply_to(format!("{prefix}{err}"))
    );
}

/// Print the articles a dry run would merge
pub fn print_plan(files: &[SourceFile], output_file: &Path) {
    println!(
        "{} {} files would be merged into {}:",
        Style::new().bold().apply_to("Dry run:"),
        files.len(),
        output_file.display()
    );
    for (i, file) in files.iter().enumerate() {
        println!(
            "  {:>3}. {} {}",
            i + 1,
            Style::new().yellow().apply_to(&file.name),
            Style::new().dim().apply_to(format!("(Article: {})", file.title()))
        );
    }
}
