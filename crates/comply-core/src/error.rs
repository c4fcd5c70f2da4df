//! # Error Types
//!
//! Errors raised by `comply-core`. The store itself never fails once built;
//! the only fallible operations here are string-to-enum conversions used
//! when parsing loosely-typed input (command-line values, research findings).

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplyError {
    /// A string did not match any variant of a closed enumeration.
    #[error("invalid {kind} value: {value:?} (expected one of: {expected})")]
    InvalidValue {
        /// The enumeration being parsed, e.g. "zone".
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },
}

impl ComplyError {
    pub(crate) fn invalid(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::InvalidValue {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_message_names_kind_and_choices() {
        let err = ComplyError::invalid("zone", "purple", &["red", "yellow", "green"]);
        let msg = err.to_string();
        assert!(msg.contains("zone"));
        assert!(msg.contains("\"purple\""));
        assert!(msg.contains("red, yellow, green"));
    }
}
