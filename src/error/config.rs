//! Configuration errors

use std::path::Path;

use super::MergeError;

/// Creates a config not found error
pub fn not_found(path: &Path) -> MergeError {
    MergeError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> MergeError {
    MergeError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> MergeError {
    MergeError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> MergeError {
    MergeError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
