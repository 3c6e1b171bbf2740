//! Log file location.
//!
//! Encodes where the log lives relative to the user's home as named
//! constants, with a pure path builder and a thin effectful lookup.
//!
//! Nothing here touches the filesystem beyond asking the platform for
//! the home directory: the path is neither validated nor created.

use std::path::{Path, PathBuf};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Directory under home that holds the log.
pub const DOCUMENTS_DIR_REL: &str = "Documents";

/// Log file name.
pub const LOG_FILENAME: &str = "log.txt";

// ============================================================================
// TYPES
// ============================================================================

/// Error resolving the log location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Could not determine home directory.
    HomeNotFound,
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Compute the log file path from a home directory.
///
/// Pure function — no I/O.
pub fn log_path_in(home: &Path) -> PathBuf {
    home.join(DOCUMENTS_DIR_REL).join(LOG_FILENAME)
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Resolve `<home>/Documents/log.txt` for the current user.
pub fn default_log_path() -> Result<PathBuf, PathError> {
    let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
    Ok(log_path_in(&home))
}

// ============================================================================
// DISPLAY
// ============================================================================

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeNotFound => write!(f, "Could not determine home directory"),
        }
    }
}

impl std::error::Error for PathError {}

// ============================================================================
// TESTS
// ============================================================================
