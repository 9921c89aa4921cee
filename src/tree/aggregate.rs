//! Order-independent reduction of per-file digests
//!
//! Digests are sorted lexicographically before being fed into a fresh
//! accumulator, so the result is independent of filesystem enumeration
//! order. Any future parallel digesting must keep this sort.

use crate::algorithm::Algorithm;

/// Combine an unordered collection of hex digests into one digest.
///
/// An empty collection yields the algorithm's empty-input digest.
pub fn reduce(mut digests: Vec<String>, algorithm: Algorithm) -> String {
    digests.sort();

    let mut hasher = algorithm.hasher();
    for digest in &digests {
        hasher.update(digest.as_bytes());
    }
    hex::encode(hasher.finalize())
}
