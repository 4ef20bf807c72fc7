//! Utility functions for CLI operations.
//!
//! Path input handling (tilde expansion) and shared output formatting.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use fspath::{fs, FileType, PurePath};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Prepare a user-supplied path argument: expand a leading tilde, leave
/// everything else exactly as typed (no canonicalization, so paths that do
/// not exist yet stay usable).
pub fn input_path(raw: &str) -> Result<PurePath, CliError> {
    Ok(fs::expand_tilde(raw)?)
}

/// Render a timestamp in the local timezone.
pub fn format_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Short type tag used in listings.
pub fn type_tag(file_type: Option<FileType>) -> &'static str {
    match file_type {
        Some(FileType::Regular) => "file",
        Some(FileType::Directory) => "dir",
        Some(FileType::Symlink) => "link",
        Some(FileType::Block) => "block",
        Some(FileType::Character) => "char",
        Some(FileType::Fifo) => "fifo",
        Some(FileType::Socket) => "socket",
        Some(FileType::Unknown) => "other",
        None => "?",
    }
}

/// Serialize a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::InvalidArguments(format!("cannot serialize output: {e}")))?;
    println!("{rendered}");
    Ok(())
}
