//! Selection policy for walked files
//!
//! Decides which files participate in the aggregate digest. Directories are
//! never pruned from recursion here; only files are filtered. A directory
//! whose name matches an excluded extension is still descended into.

use std::collections::HashSet;
use std::path::{Component, Path};

/// File selection rules. All rules must pass for a file to be included.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Exclude files with a hidden (`.`-prefixed) segment anywhere in their
    /// relative path, including the file name itself.
    pub ignore_hidden: bool,
    /// Exact file names to exclude (e.g. "README.md").
    pub excluded_files: HashSet<String>,
    /// Extensions to exclude, without the leading dot (e.g. "tmp").
    pub excluded_extensions: HashSet<String>,
}

impl Filter {
    /// Whether a file at this root-relative path participates in the digest.
    pub fn includes(&self, relative: &Path) -> bool {
        if self.ignore_hidden && has_hidden_segment(relative) {
            return false;
        }

        let Some(name) = relative.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };

        // Extension is the substring after the final dot. A name with no
        // dot has no extension and cannot match.
        if let Some((_, ext)) = name.rsplit_once('.') {
            if self.excluded_extensions.contains(ext) {
                return false;
            }
        }

        !self.excluded_files.contains(name.as_ref())
    }
}

/// Check each path segment for a leading `.` rather than pattern-matching
/// the joined string, so the check holds across platform separators.
fn has_hidden_segment(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
