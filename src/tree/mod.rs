//! Directory tree hashing
//!
//! Walks a directory tree, reduces each qualifying file to a digest, and
//! combines the digests into one order-independent result.

pub mod aggregate;
pub mod filter;
pub mod hasher;
pub mod path;
pub mod walker;
