//! Hash algorithm and digest mode registries.
//!
//! Both registries are fixed at compile time: an unknown name fails during
//! parsing, before any filesystem access. The same `Algorithm` drives both
//! the per-file digests and the final aggregate so the two stages can never
//! disagree on hash family.

use crate::error::HashError;
use digest::DynDigest;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Create a fresh accumulator for this algorithm.
    pub fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            Algorithm::Md5 => Box::new(Md5::new()),
            Algorithm::Sha1 => Box::new(Sha1::new()),
            Algorithm::Sha256 => Box::new(Sha256::new()),
            Algorithm::Sha512 => Box::new(Sha512::new()),
        }
    }

    /// Digest of zero bytes, as lowercase hex.
    ///
    /// Used for files that disappear between enumeration and digesting, and
    /// for trees with no qualifying files.
    pub fn empty_digest(&self) -> String {
        hex::encode(self.hasher().finalize())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            other => Err(HashError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Md5
    }
}

/// How a file's identity is reduced to a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestMode {
    /// Digest the file's bytes.
    Content,
    /// Digest the file's relative path and stat attributes, not its bytes.
    /// Faster, but blind to content changes that leave metadata unchanged.
    Metadata,
}

impl DigestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestMode::Content => "content",
            DigestMode::Metadata => "metadata",
        }
    }
}

impl fmt::Display for DigestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestMode {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(DigestMode::Content),
            "metadata" => Ok(DigestMode::Metadata),
            other => Err(HashError::UnsupportedMode(other.to_string())),
        }
    }
}

impl Default for DigestMode {
    fn default() -> Self {
        DigestMode::Content
    }
}
