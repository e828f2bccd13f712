//! Input discovery for a merge
//!
//! This module handles:
//! - Listing the Markdown files directly inside the input directory
//! - Dropping names that match an exclusion glob
//! - Ordering the result by file name
//!
//! Only the top level of the directory is read; subdirectories are ignored.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, MergeError, Result};

/// Suffix a file name must end with to be merged
pub const MARKDOWN_SUFFIX: &str = ".md";

/// A Markdown file selected for merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name within the input directory
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
}

impl SourceFile {
    /// Article title: the file name without its final extension
    pub fn title(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.name)
    }
}

/// Compiled exclusion globs, matched against bare file names
#[derive(Debug, Default)]
pub struct ExcludeSet {
    globs: Vec<Glob<'static>>,
}

impl ExcludeSet {
    /// Compile exclusion patterns
    pub fn new(patterns: &[String]) -> Result<Self> {
        let globs = patterns
            .iter()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(Glob::into_owned)
                    .map_err(|e| MergeError::InvalidPattern {
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { globs })
    }

    /// Check whether a file name matches any exclusion pattern
    pub fn is_excluded(&self, name: &str) -> bool {
        let candidate = CandidatePath::from(name);
        self.globs
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }
}

/// Collect the Markdown files in `input_dir`, sorted by name
///
/// `skip` names a path that must never be treated as input, normally the
/// output file when it is written into the input directory.
pub fn discover(
    input_dir: &Path,
    exclude: &ExcludeSet,
    skip: Option<&Path>,
) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Broken symlinks and unreadable entries are skipped; an unreadable
            // input directory is fatal.
            Err(e) if e.depth() > 0 => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
            Err(e) => {
                return Err(error::fs::io_error(format!(
                    "Failed to list directory '{}': {}",
                    input_dir.display(),
                    e
                )));
            }
        };

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping entry with non UTF-8 name");
            continue;
        };

        if !name.ends_with(MARKDOWN_SUFFIX) {
            continue;
        }

        if !entry.file_type().is_file() {
            debug!(name, "skipping non-file entry");
            continue;
        }

        if exclude.is_excluded(name) {
            debug!(name, "excluded by pattern");
            continue;
        }

        if skip.is_some_and(|skip| same_file(entry.path(), skip)) {
            debug!(name, "skipping output file");
            continue;
        }

        files.push(SourceFile {
            name: name.to_string(),
            path: entry.path().to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(count = files.len(), dir = %input_dir.display(), "discovered markdown files");

    Ok(files)
}

/// Compare two paths after canonicalization; a path that cannot be
/// canonicalized (for instance one that does not exist yet) matches nothing.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[SourceFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    fn setup(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in files {
            fs::write(temp.path().join(name), format!("content of {name}")).unwrap();
        }
        temp
    }

    #[test]
    fn test_only_md_files_are_kept() {
        let temp = setup(&["a.md", "b.md", "c.txt", "notes.markdown", "upper.MD"]);
        let files = discover(temp.path(), &ExcludeSet::default(), None).unwrap();
        assert_eq!(names(&files), vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_sorted_lexicographically() {
        let temp = setup(&["b.md", "a.md", "B.md", "10.md", "2.md"]);
        let files = discover(temp.path(), &ExcludeSet::default(), None).unwrap();
        assert_eq!(names(&files), vec!["10.md", "2.md", "B.md", "a.md", "b.md"]);
    }

    #[test]
    fn test_subdirectories_are_not_traversed() {
        let temp = setup(&["top.md"]);
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/inner.md"), "inner").unwrap();
        fs::create_dir(temp.path().join("folder.md")).unwrap();

        let files = discover(temp.path(), &ExcludeSet::default(), None).unwrap();
        assert_eq!(names(&files), vec!["top.md"]);
    }

    // Some unix filesystems (APFS) refuse non UTF-8 names outright
    #[cfg(target_os = "linux")]
    #[test]
    fn test_unusable_entries_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::os::unix::fs::symlink;

        let temp = setup(&["ok.md"]);
        let target = TempDir::new().unwrap();
        fs::write(target.path().join("shared.md"), "shared").unwrap();

        fs::write(temp.path().join(OsStr::from_bytes(b"caf\xe9.md")), "latin-1").unwrap();
        symlink(temp.path().join("gone.md"), temp.path().join("dangling.md")).unwrap();
        symlink(target.path().join("shared.md"), temp.path().join("linked.md")).unwrap();

        let files = discover(temp.path(), &ExcludeSet::default(), None).unwrap();
        assert_eq!(names(&files), vec!["linked.md", "ok.md"]);
        assert_eq!(fs::read_to_string(&files[0].path).unwrap(), "shared");
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        let files = discover(temp.path(), &ExcludeSet::default(), None).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_exclude_patterns() {
        let temp = setup(&["draft-intro.md", "guide.md", "README.md"]);
        let exclude =
            ExcludeSet::new(&["draft-*.md".to_string(), "README.md".to_string()]).unwrap();
        let files = discover(temp.path(), &exclude, None).unwrap();
        assert_eq!(names(&files), vec!["guide.md"]);
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let result = ExcludeSet::new(&["[unclosed".to_string()]);
        assert!(matches!(result, Err(MergeError::InvalidPattern { .. })));
    }

    #[test]
    fn test_skip_output_file() {
        let temp = setup(&["a.md", "merged.md"]);
        let output = temp.path().join("merged.md");
        let files = discover(temp.path(), &ExcludeSet::default(), Some(&output)).unwrap();
        assert_eq!(names(&files), vec!["a.md"]);
    }

    #[test]
    fn test_skip_nonexistent_output_is_ignored() {
        let temp = setup(&["a.md"]);
        let output = temp.path().join("missing.md");
        let files = discover(temp.path(), &ExcludeSet::default(), Some(&output)).unwrap();
        assert_eq!(names(&files), vec!["a.md"]);
    }

    #[test]
    fn test_title_strips_final_extension() {
        let file = |name: &str| SourceFile {
            name: name.to_string(),
            path: PathBuf::from(name),
        };
        assert_eq!(file("intro.md").title(), "intro");
        assert_eq!(file("v1.2-notes.md").title(), "v1.2-notes");
        assert_eq!(file(".md").title(), ".md");
    }
}
