//! File system errors

use std::path::Path;

use super::MergeError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> MergeError {
    MergeError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> MergeError {
    MergeError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MergeError {
    MergeError::IoError {
        message: message.into(),
    }
}
