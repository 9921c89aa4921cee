//! Per-file digest computation
//!
//! Two reductions of a file to a hex digest: content mode streams the
//! file's bytes, metadata mode hashes the relative path plus stat fields.
//! A file that disappears between enumeration and digesting yields the
//! algorithm's empty-input digest in both modes; the race with deletion is
//! a defined degenerate case, not an error.

use crate::algorithm::Algorithm;
use crate::error::HashError;
use crate::tree::path::relative_path_string;
use std::fs::{self, File, Metadata};
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::trace;

const BLOCK_SIZE: usize = 64 * 1024;

/// Digest a file's bytes with sequential fixed-size block reads.
///
/// The file handle is scoped to this call and closed on every exit path.
pub fn content_digest(path: &Path, algorithm: Algorithm) -> Result<String, HashError> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!(path = %path.display(), "file vanished before read, using empty digest");
            return Ok(algorithm.empty_digest());
        }
        Err(e) => return Err(e.into()),
    };

    let mut hasher = algorithm.hasher();
    let mut block = vec![0u8; BLOCK_SIZE];
    loop {
        let n = file.read(&mut block)?;
        if n == 0 {
            break;
        }
        hasher.update(&block[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Digest a file's identity from its relative path and stat attributes,
/// without reading its content.
///
/// Fields are fed as decimal strings in a fixed order: size, mtime seconds,
/// mtime nanoseconds, permission mode bits, uid, gid. The order is part of
/// the digest definition and must not change.
pub fn metadata_digest(
    root: &Path,
    path: &Path,
    algorithm: Algorithm,
) -> Result<String, HashError> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!(path = %path.display(), "file vanished before stat, using empty digest");
            return Ok(algorithm.empty_digest());
        }
        Err(e) => return Err(e.into()),
    };

    let mut hasher = algorithm.hasher();
    hasher.update(relative_path_string(root, path).as_bytes());
    for field in stat_fields(&metadata) {
        hasher.update(field.as_bytes());
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(unix)]
fn stat_fields(metadata: &Metadata) -> [String; 6] {
    use std::os::unix::fs::MetadataExt;
    [
        metadata.size().to_string(),
        metadata.mtime().to_string(),
        metadata.mtime_nsec().to_string(),
        metadata.mode().to_string(),
        metadata.uid().to_string(),
        metadata.gid().to_string(),
    ]
}

#[cfg(not(unix))]
fn stat_fields(metadata: &Metadata) -> [String; 6] {
    use std::time::UNIX_EPOCH;
    let mtime = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .unwrap_or_default();
    // No mode/uid/gid outside unix; fixed zeros keep the field order stable.
    [
        metadata.len().to_string(),
        mtime.as_secs().to_string(),
        mtime.subsec_nanos().to_string(),
        u32::from(metadata.permissions().readonly()).to_string(),
        "0".to_string(),
        "0".to_string(),
    ]
}
