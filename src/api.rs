//! Public entry point: hash a directory tree to a single digest.

use crate::algorithm::{Algorithm, DigestMode};
use crate::error::HashError;
use crate::tree::filter::Filter;
use crate::tree::hasher;
use crate::tree::path::relative_path_string;
use crate::tree::walker::Walker;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Digest configuration. `Default` matches the documented defaults:
/// MD5, content mode, nothing excluded, hidden files included, symlinks
/// not followed.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub algorithm: Algorithm,
    pub digest_mode: DigestMode,
    pub ignore_hidden: bool,
    pub follow_symlinks: bool,
    pub excluded_files: HashSet<String>,
    pub excluded_extensions: HashSet<String>,
}

/// Compute one deterministic digest for the contents of a directory tree.
///
/// Files are enumerated recursively, filtered by the selection rules in
/// `options`, reduced to per-file digests in the chosen mode, and combined
/// order-independently into the final lowercase hex digest. In content mode
/// the result depends only on file bytes and the relative tree structure,
/// never on names or on where the tree lives on disk.
#[instrument(skip(options), fields(algorithm = %options.algorithm, mode = %options.digest_mode))]
pub fn dirhash(path: impl AsRef<Path> + std::fmt::Debug, options: &Options) -> Result<String, HashError> {
    let root = path.as_ref();

    let filter = Filter {
        ignore_hidden: options.ignore_hidden,
        excluded_files: options.excluded_files.clone(),
        excluded_extensions: options.excluded_extensions.clone(),
    };

    let walker = Walker::new(root.to_path_buf(), options.follow_symlinks);
    let files = walker.files()?;
    let total = files.len();

    let mut digests = Vec::with_capacity(total);
    for file in files {
        if !filter.includes(relative(root, &file).as_path()) {
            continue;
        }
        let digest = match options.digest_mode {
            DigestMode::Content => hasher::content_digest(&file, options.algorithm)?,
            DigestMode::Metadata => hasher::metadata_digest(root, &file, options.algorithm)?,
        };
        digests.push(digest);
    }

    debug!(total, included = digests.len(), "digested tree");
    Ok(crate::tree::aggregate::reduce(digests, options.algorithm))
}

fn relative(root: &Path, file: &Path) -> PathBuf {
    PathBuf::from(relative_path_string(root, file))
}
