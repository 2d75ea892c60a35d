//! Error types for esverify

use std::path::PathBuf;

/// Errors that can occur while loading a bitstream for checking
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
