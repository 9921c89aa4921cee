//! Configuration System
//!
//! Optional TOML configuration for the CLI. Every field has a default, so
//! an empty file (or no file at all) yields the documented defaults.
//! Precedence is CLI flags > config file > defaults; the merge happens in
//! the binary, this module only loads and defaults.

use crate::algorithm::{Algorithm, DigestMode};
use crate::api::Options;
use crate::error::HashError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirhashConfig {
    /// Hash algorithm (md5, sha1, sha256, sha512)
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Digest mode (content, metadata)
    #[serde(default)]
    pub digest_mode: DigestMode,

    /// Exclude hidden files and files under hidden directories
    #[serde(default)]
    pub ignore_hidden: bool,

    /// Descend into symlinked directories
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Exact file names to exclude
    #[serde(default)]
    pub excluded_files: HashSet<String>,

    /// Extensions to exclude, without the leading dot
    #[serde(default)]
    pub excluded_extensions: HashSet<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DirhashConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, HashError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| HashError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| HashError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Digest options carried by this configuration.
    pub fn options(&self) -> Options {
        Options {
            algorithm: self.algorithm,
            digest_mode: self.digest_mode,
            ignore_hidden: self.ignore_hidden,
            follow_symlinks: self.follow_symlinks,
            excluded_files: self.excluded_files.clone(),
            excluded_extensions: self.excluded_extensions.clone(),
        }
    }
}
