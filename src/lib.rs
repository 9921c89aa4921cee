//! Dirhash: Deterministic Directory Tree Hashing
//!
//! Reduces a directory tree to a single hex digest that depends only on
//! file contents and relative structure, for change detection, cache keys,
//! and integrity checks.

pub mod algorithm;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;

pub use algorithm::{Algorithm, DigestMode};
pub use api::{dirhash, Options};
pub use error::HashError;
