//! Resolution of a merge job from command line arguments and a job file
//!
//! Precedence is: command line flag, then environment variable, then the job
//! file, then built-in defaults. The header texts are read from the
//! environment here, not by clap: `--context-file` must outrank an exported
//! `MDMERGE_CONTEXT`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{DEFAULT_SEPARATOR, JobFile};
use crate::cli::MergeArgs;
use crate::error::{self, MergeError, Result};

/// Environment variable supplying the AI context text
pub const CONTEXT_ENV: &str = "MDMERGE_CONTEXT";

/// Environment variable supplying the AI prompt text
pub const PROMPT_ENV: &str = "MDMERGE_PROMPT";

/// Header texts taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvText {
    pub context: Option<String>,
    pub prompt: Option<String>,
}

impl EnvText {
    /// Read [`CONTEXT_ENV`] and [`PROMPT_ENV`]; unset or non UTF-8 values are ignored
    pub fn from_env() -> Self {
        Self {
            context: env::var(CONTEXT_ENV).ok(),
            prompt: env::var(PROMPT_ENV).ok(),
        }
    }
}

/// Fully resolved settings for one merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeJob {
    /// Directory whose `.md` files are merged
    pub input_dir: PathBuf,
    /// Destination document, created or overwritten
    pub output_file: PathBuf,
    /// Leading "AI Context" block; omitted when empty
    pub ai_context: String,
    /// Leading "AI Prompt" block; omitted when empty
    pub ai_prompt: String,
    /// Delimiter placed between sections
    pub separator: String,
    /// Glob patterns of file names to leave out
    pub exclude: Vec<String>,
}

impl MergeJob {
    /// Create a job with default header blocks and separator
    pub fn new(input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_file: output_file.into(),
            ai_context: String::new(),
            ai_prompt: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            exclude: Vec::new(),
        }
    }

    /// Set the AI context block
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.ai_context = context.into();
        self
    }

    /// Set the AI prompt block
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.ai_prompt = prompt.into();
        self
    }

    /// Set the section separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Add an exclusion glob
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Resolve a job from parsed arguments, loading `--config` if given
    pub fn resolve(args: &MergeArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                debug!(config = %path.display(), "loading job file");
                JobFile::load(path)?
            }
            None => JobFile::default(),
        };
        Self::from_parts(args, &EnvText::from_env(), file)
    }

    /// Combine arguments, environment texts and an already loaded job file
    pub fn from_parts(args: &MergeArgs, env: &EnvText, file: JobFile) -> Result<Self> {
        let input_dir = args
            .input_dir
            .clone()
            .or(file.input_dir)
            .ok_or_else(|| MergeError::MissingArgument {
                name: "input_dir".to_string(),
            })?;

        let output_file = args
            .output_file
            .clone()
            .or(file.output_file)
            .ok_or_else(|| MergeError::MissingArgument {
                name: "output_file".to_string(),
            })?;

        let ai_context = resolve_text(
            args.context.as_deref(),
            args.context_file.as_deref(),
            env.context.as_deref(),
            file.context,
            file.context_file,
        )?;

        let ai_prompt = resolve_text(
            args.prompt.as_deref(),
            args.prompt_file.as_deref(),
            env.prompt.as_deref(),
            file.prompt,
            file.prompt_file,
        )?;

        let separator = args
            .separator
            .clone()
            .or(file.separator)
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());

        let exclude = file.exclude.into_iter().chain(args.exclude.iter().cloned());

        Ok(exclude.fold(
            Self::new(input_dir, output_file)
                .with_context(ai_context)
                .with_prompt(ai_prompt)
                .with_separator(separator),
            Self::with_exclude,
        ))
    }
}

/// Pick a header text: CLI text, CLI file, environment, then the job file
fn resolve_text(
    cli_text: Option<&str>,
    cli_file: Option<&Path>,
    env_text: Option<&str>,
    file_text: Option<String>,
    file_path: Option<PathBuf>,
) -> Result<String> {
    if let Some(text) = cli_text {
        return Ok(text.to_string());
    }
    if let Some(path) = cli_file {
        return read_text_file(path);
    }
    if let Some(text) = env_text {
        return Ok(text.to_string());
    }
    if let Some(text) = file_text {
        return Ok(text);
    }
    match file_path {
        Some(path) => read_text_file(&path),
        None => Ok(String::new()),
    }
}

fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))
}
