//! CLI parse: clap types for dirhash. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Dirhash CLI - Deterministic content hash for directory trees
#[derive(Parser)]
#[command(name = "dirhash")]
#[command(about = "Deterministic content hash for directory trees")]
#[command(version)]
pub struct Cli {
    /// Directory to hash
    pub path: PathBuf,

    /// Hash algorithm (md5, sha1, sha256, sha512)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Digest mode (content, metadata)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Exact file name to exclude (repeatable)
    #[arg(long = "exclude-file")]
    pub exclude_files: Vec<String>,

    /// File extension to exclude, without the leading dot (repeatable)
    #[arg(long = "exclude-ext")]
    pub exclude_extensions: Vec<String>,

    /// Exclude hidden files and files under hidden directories
    #[arg(long)]
    pub ignore_hidden: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
