//! Single-document JSON read and write.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{IoError, IoResult};

/// Read a JSON file into a strongly-typed value.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> IoResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| IoError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode a value as JSON text with a trailing newline.
///
/// `indent` selects two-space pretty printing; otherwise the output is
/// compact.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, indent: bool) -> serde_json::Result<String> {
    let mut text = if indent {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    Ok(text)
}

/// Write a value to a JSON file, replacing any existing content.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, indent: bool) -> IoResult<()> {
    let text = to_json_string(value, indent).map_err(|e| IoError::Encode {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, text).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
