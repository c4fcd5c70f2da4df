//! Output formats shared by every subcommand.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// How a command renders its result on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable fixed-width tables and reports.
    #[default]
    Table,
    /// Pretty-printed JSON with two-space indentation.
    Json,
}

/// Encode a value as pretty JSON followed by a newline.
pub fn json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    comply_io::to_json_string(value, true).context("failed to encode JSON output")
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    print!("{}", json_string(value)?);
    Ok(())
}

/// A horizontal rule of `width` dashes.
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}
