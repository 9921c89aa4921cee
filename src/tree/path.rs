//! Path normalization for deterministic hashing

use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Render a file's path relative to the walk root as a stable string.
///
/// The result uses `/` as separator on every platform and is normalized to
/// Unicode NFC, so the same tree produces the same string regardless of
/// where it lives on disk or how the filesystem encoded the names.
pub fn relative_path_string(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    joined.nfc().collect()
}
