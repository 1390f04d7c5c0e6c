//! CLI module
//!
//! Command-line interface for batch lookups.
//!
//! # Modes
//!
//! - `--dns` - Reverse DNS for each IP address on stdin
//! - `--subs` - Subdomains of each domain on stdin
//! - `--cname` - CNAME records pointing at each domain on stdin

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{RunSummary, Runner};
