//! Configuration handling for mdmerge
//!
//! This module contains:
//! - `mdmerge.yaml` - optional job file ([`JobFile`])
//! - [`MergeJob`] - the fully resolved settings a merge runs with

pub mod job;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

pub use job::MergeJob;

/// Separator used between sections when none is configured
pub const DEFAULT_SEPARATOR: &str = "---";

/// Merge settings read from a YAML job file
///
/// Every field is optional; command line flags and environment variables take
/// precedence over values set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl JobFile {
    /// Parse a job file from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let job: Self = serde_yaml::from_str(yaml)?;
        job.validate()?;
        Ok(job)
    }

    /// Load a job file from disk
    ///
    /// Relative paths inside the file are resolved against the directory the
    /// file lives in, so a job file can be used from any working directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::config::not_found(path));
        }

        let content =
            fs::read_to_string(path).map_err(|e| error::config::read_failed(path, e))?;

        let job = Self::from_yaml(&content).map_err(|e| match e {
            error::MergeError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path, reason)
            }
            other => other,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(job.rebased(base))
    }

    /// Validate mutually exclusive fields
    pub fn validate(&self) -> Result<()> {
        if self.context.is_some() && self.context_file.is_some() {
            return Err(error::config::invalid(
                "only one of 'context' and 'context_file' may be set",
            ));
        }
        if self.prompt.is_some() && self.prompt_file.is_some() {
            return Err(error::config::invalid(
                "only one of 'prompt' and 'prompt_file' may be set",
            ));
        }
        Ok(())
    }

    fn rebased(self, base: &Path) -> Self {
        let rebase = |p: Option<PathBuf>| p.map(|p| if p.is_absolute() { p } else { base.join(p) });
        Self {
            input_dir: rebase(self.input_dir),
            output_file: rebase(self.output_file),
            context_file: rebase(self.context_file),
            prompt_file: rebase(self.prompt_file),
            ..self
        }
    }
}
