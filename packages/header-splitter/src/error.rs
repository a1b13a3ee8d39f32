//! Error types for the header splitter.
//!
//! Every variant is fatal: the generator aborts the whole run on the first
//! error and does not try to continue with the remaining versions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the header splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Invalid SDK version format.
    #[error("Invalid SDK version: '{0}'. Expected dotted digits (e.g., 1.0.12)")]
    InvalidVersion(String),

    /// The version list was empty.
    #[error("No SDK versions given")]
    NoVersions,

    /// An input header could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An interface header could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created or cleaned.
    #[error("Failed to prepare output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitterError::InvalidVersion("1.x".to_string());
        assert!(err.to_string().contains("1.x"));
        assert!(err.to_string().contains("1.0.12"));
    }

    #[test]
    fn test_input_read_includes_path() {
        let err = SplitterError::InputRead {
            path: PathBuf::from("openvr-1.0.7.h"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read openvr-1.0.7.h: not found"
        );
    }
}
