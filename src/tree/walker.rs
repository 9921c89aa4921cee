//! Filesystem walker for traversing directory structures

use crate::error::HashError;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Recursive top-down directory walker.
pub struct Walker {
    root: PathBuf,
    follow_symlinks: bool,
}

impl Walker {
    pub fn new(root: PathBuf, follow_symlinks: bool) -> Self {
        Self {
            root,
            follow_symlinks,
        }
    }

    /// Walk the tree and collect every file path under the root.
    ///
    /// Fails with `InvalidInput` before any traversal if the root is missing
    /// or not a directory. Symlink directories are not descended into unless
    /// `follow_symlinks` is set. A symlink to a regular file participates
    /// regardless of the flag; digesting opens the target. Enumeration order
    /// is whatever the filesystem yields; callers must not depend on it.
    pub fn files(&self) -> Result<Vec<PathBuf>, HashError> {
        if !self.root.is_dir() {
            return Err(HashError::InvalidInput(self.root.clone()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(self.follow_symlinks) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            } else if entry.file_type().is_symlink() && entry.path().is_file() {
                // Without follow_links, walkdir reports symlinks as symlink
                // entries. Ones pointing at regular files still count;
                // broken symlinks do not.
                files.push(entry.into_path());
            }
        }

        debug!(root = %self.root.display(), count = files.len(), "walk complete");
        Ok(files)
    }
}
