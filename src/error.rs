//! Error types for directory tree hashing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by digest computation.
///
/// Per-file disappearance during traversal is deliberately absent: a file
/// deleted between enumeration and digesting contributes the empty-input
/// digest instead of failing the run.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Unsupported digest mode: {0}")]
    UnsupportedMode(String),

    #[error("Not a directory: {0:?}")]
    InvalidInput(PathBuf),

    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
