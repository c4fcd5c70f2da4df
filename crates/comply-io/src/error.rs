//! I/O error types.
//!
//! Every variant carries the path it concerns so a failed load can be
//! traced to the offending document.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing catalog documents.
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be read.
    #[error("reading file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for the expected shape.
    #[error("parsing JSON from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The value could not be encoded as JSON.
    #[error("encoding JSON for {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file could not be written.
    #[error("writing file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("creating directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A framework directory does not exist or is not a directory.
    #[error("framework directory not found: {path}")]
    NotADirectory { path: PathBuf },
}

/// Result type alias for catalog I/O.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_directory_display() {
        let err = IoError::NotADirectory {
            path: PathBuf::from("/tmp/no-such-framework"),
        };
        assert!(format!("{err}").contains("/tmp/no-such-framework"));
    }

    #[test]
    fn read_error_includes_path_and_cause() {
        let err = IoError::Read {
            path: PathBuf::from("data/mappings.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("data/mappings.json"));
        assert!(msg.contains("denied"));
    }
}
