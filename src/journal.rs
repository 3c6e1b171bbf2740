//! Append-only log of user input.
//!
//! Structure:
//! - Pure functions: entry preparation
//! - Effect functions: the append itself
//!
//! The file is opened per entry and closed when the writer drops, so a
//! failure never leaves a handle behind. Parent directories are never
//! created; a missing directory is reported as a write failure.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Line terminator appended after each entry.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator appended after each entry.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Notice text when the input trims to nothing.
pub const EMPTY_INPUT_MESSAGE: &str = "Input field is empty!";

/// Notice text after a successful append.
pub const LOGGED_MESSAGE: &str = "Logged to file successfully!";

// ============================================================================
// TYPES
// ============================================================================

/// Why an entry was not logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// Input was empty or whitespace only. No I/O was attempted.
    EmptyInput,
    /// Opening or writing the log file failed.
    Write { path: PathBuf, message: String },
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Trim raw input into a loggable entry.
///
/// Returns None when nothing is left after trimming.
pub fn prepare_entry(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Append one line to `path`, creating the file if absent.
///
/// # Errors
/// Returns the underlying error if the file cannot be opened or written.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_ENDING.as_bytes())?;
    writer.flush()
}

/// Trim `raw` and append it to the log at `path`.
///
/// Returns the line that was written.
pub fn log_input(path: &Path, raw: &str) -> Result<String, LogError> {
    let entry = prepare_entry(raw).ok_or(LogError::EmptyInput)?;

    append_line(path, entry).map_err(|e| LogError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(entry.to_string())
}

// ============================================================================
// DISPLAY
// ============================================================================

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::EmptyInput => write!(f, "{}", EMPTY_INPUT_MESSAGE),
            LogError::Write { message, .. } => write!(f, "Error writing to file: {}", message),
        }
    }
}

impl std::error::Error for LogError {}

// ============================================================================
// TESTS
// ============================================================================
