//! Command-line interface: argument definitions and output mapping.

pub mod output;
pub mod parse;

pub use output::map_error;
pub use parse::Cli;
