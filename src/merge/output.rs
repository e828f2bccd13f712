//! Atomic output file
//!
//! The merged document is written to a temporary file next to the
//! destination and renamed over it only once every article has been written.
//! A failed run therefore never leaves a truncated or header-only document,
//! and an existing output file is kept intact until the replacement is ready.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{self, Result};

/// A pending output file that becomes visible on [`AtomicOutput::commit`]
///
/// Dropping it without committing removes the temporary file.
pub struct AtomicOutput {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicOutput {
    /// Create a temporary file in the directory of `target`
    pub fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = tempfile::Builder::new()
            .prefix(".mdmerge-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| error::fs::write_failed(target, e))?;

        apply_permissions(&temp, target).map_err(|e| error::fs::write_failed(target, e))?;

        debug!(temp = %temp.path().display(), target = %target.display(), "opened temporary output");

        Ok(Self {
            target: target.to_path_buf(),
            temp,
        })
    }

    /// Path the document will be published at
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Flush to disk and move the temporary file over the target
    pub fn commit(mut self) -> Result<PathBuf> {
        self.temp
            .flush()
            .map_err(|e| error::fs::write_failed(&self.target, e))?;
        self.temp
            .as_file()
            .sync_all()
            .map_err(|e| error::fs::write_failed(&self.target, e))?;

        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| error::fs::write_failed(&target, e.error))?;

        debug!(target = %target.display(), "published output");
        Ok(target)
    }
}

impl Write for AtomicOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}

/// Give the temporary file the permissions a plainly created file would have,
/// or those of the file it replaces.
#[cfg(unix)]
fn apply_permissions(temp: &NamedTempFile, target: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    temp.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn apply_permissions(temp: &NamedTempFile, target: &Path) -> io::Result<()> {
    if let Ok(meta) = fs::metadata(target) {
        temp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(())
}
