//! File system errors

use std::io;
use std::path::Path;

use super::MaterialError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> MaterialError {
    MaterialError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: &io::Error) -> MaterialError {
    MaterialError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: &io::Error) -> MaterialError {
    MaterialError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a stdin read failed error
pub fn stdin_failed(err: &io::Error) -> MaterialError {
    MaterialError::StdinReadFailed {
        reason: err.to_string(),
    }
}
