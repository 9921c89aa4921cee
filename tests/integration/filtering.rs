//! Integration tests for the file selection rules
//!
//! The key check: an excluded file must not feed the digest at all, so the
//! digest with the file present equals the digest with it absent.

use dirhash::{dirhash, Options};
use std::fs;
use tempfile::TempDir;

fn write_base(root: &std::path::Path) {
    fs::write(root.join("keep.txt"), "kept content").unwrap();
}

/// Test that a hidden file is excluded when ignore_hidden is set
#[test]
fn test_hidden_file_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_base(root);

    let options = Options {
        ignore_hidden: true,
        ..Options::default()
    };
    let without = dirhash(root, &options).unwrap();

    fs::write(root.join(".env"), "SECRET=1").unwrap();
    let with = dirhash(root, &options).unwrap();

    assert_eq!(without, with);

    // Without ignore_hidden the file participates
    let default_digest = dirhash(root, &Options::default()).unwrap();
    assert_ne!(default_digest, without);
}

/// Test that files under a hidden directory are excluded
#[test]
fn test_files_under_hidden_directory_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_base(root);

    let options = Options {
        ignore_hidden: true,
        ..Options::default()
    };
    let without = dirhash(root, &options).unwrap();

    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git").join("config"), "[core]").unwrap();
    let with = dirhash(root, &options).unwrap();

    assert_eq!(without, with);
}

/// Test that an excluded extension removes the file from the digest
#[test]
fn test_excluded_extension() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_base(root);

    let options = Options {
        excluded_extensions: ["tmp".to_string()].into_iter().collect(),
        ..Options::default()
    };
    let without = dirhash(root, &options).unwrap();

    fs::write(root.join("notes.tmp"), "scratch").unwrap();
    let with = dirhash(root, &options).unwrap();

    assert_eq!(without, with);
}

/// Test that an exact excluded file name removes the file from the digest
#[test]
fn test_excluded_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_base(root);

    let options = Options {
        excluded_files: ["README.md".to_string()].into_iter().collect(),
        ..Options::default()
    };
    let without = dirhash(root, &options).unwrap();

    fs::write(root.join("README.md"), "# readme").unwrap();
    let with = dirhash(root, &options).unwrap();

    assert_eq!(without, with);
}

/// Test that a directory named like an excluded extension is still
/// descended into; only files are filtered
#[test]
fn test_directories_never_pruned() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_base(root);

    let options = Options {
        excluded_extensions: ["tmp".to_string()].into_iter().collect(),
        ..Options::default()
    };
    let before = dirhash(root, &options).unwrap();

    fs::create_dir(root.join("build.tmp")).unwrap();
    fs::write(root.join("build.tmp").join("artifact.txt"), "inside").unwrap();
    let after = dirhash(root, &options).unwrap();

    // The file inside the .tmp-named directory participates
    assert_ne!(before, after);
}

/// Test that a symlink to a regular file contributes its target's content
/// digest even when symlinks are not followed
#[cfg(unix)]
#[test]
fn test_file_symlink_digested_without_follow() {
    let temp_linked = TempDir::new().unwrap();
    let temp_plain = TempDir::new().unwrap();
    let temp_copied = TempDir::new().unwrap();

    fs::write(temp_linked.path().join("real.txt"), "shared bytes").unwrap();
    std::os::unix::fs::symlink(
        temp_linked.path().join("real.txt"),
        temp_linked.path().join("alias.txt"),
    )
    .unwrap();

    fs::write(temp_plain.path().join("real.txt"), "shared bytes").unwrap();

    fs::write(temp_copied.path().join("real.txt"), "shared bytes").unwrap();
    fs::write(temp_copied.path().join("copy.txt"), "shared bytes").unwrap();

    let options = Options::default();
    let linked = dirhash(temp_linked.path(), &options).unwrap();
    let plain = dirhash(temp_plain.path(), &options).unwrap();
    let copied = dirhash(temp_copied.path(), &options).unwrap();

    // The symlink adds a second per-file digest, so the tree no longer
    // hashes like a single file; it hashes like two files with the bytes.
    assert_ne!(linked, plain);
    assert_eq!(linked, copied);
}

/// Test symlinked directories are only traversed with follow_symlinks
#[cfg(unix)]
#[test]
fn test_follow_symlinks() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_base(root);

    fs::create_dir(root.join("real")).unwrap();
    fs::write(root.join("real").join("inner.txt"), "inner").unwrap();
    std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

    let skipped = dirhash(root, &Options::default()).unwrap();
    let followed = dirhash(
        root,
        &Options {
            follow_symlinks: true,
            ..Options::default()
        },
    )
    .unwrap();

    assert_ne!(skipped, followed);
}
