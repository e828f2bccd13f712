//! Error types and handling for mdmerge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Job configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mdmerge operations
#[derive(Error, Diagnostic, Debug)]
pub enum MergeError {
    // Input errors
    #[error("The directory '{path}' does not exist.")]
    #[diagnostic(
        code(mdmerge::input::dir_not_found),
        help("Check the input directory path, or pass --strict to treat this as a failure")
    )]
    InputDirNotFound { path: String },

    #[error("The path '{path}' is not a directory.")]
    #[diagnostic(
        code(mdmerge::input::not_a_directory),
        help("Pass the directory that holds the Markdown files, not a single file")
    )]
    InputNotADirectory { path: String },

    #[error("No Markdown files found in the directory: {path}")]
    #[diagnostic(
        code(mdmerge::input::no_markdown_files),
        help("Only files ending in '.md' directly inside the directory are merged")
    )]
    NoMarkdownFiles { path: String },

    #[error("Missing required argument: {name}")]
    #[diagnostic(
        code(mdmerge::input::missing_argument),
        help("Pass it on the command line or set it in the --config file")
    )]
    MissingArgument { name: String },

    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    #[diagnostic(code(mdmerge::input::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(mdmerge::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(mdmerge::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(mdmerge::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(mdmerge::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(mdmerge::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(mdmerge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mdmerge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mdmerge::fs::io_error))]
    IoError { message: String },
}

impl MergeError {
    /// Whether the run may stop cleanly (exit 0) on this error.
    ///
    /// A missing or unusable input directory and an empty input set are
    /// reported to the user but are not failures unless `--strict` is given.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MergeError::InputDirNotFound { .. }
                | MergeError::InputNotADirectory { .. }
                | MergeError::NoMarkdownFiles { .. }
        )
    }
}

impl From<serde_yaml::Error> for MergeError {
    fn from(err: serde_yaml::Error) -> Self {
        MergeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MergeError>;
