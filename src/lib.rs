// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # ipthc
//!
//! Batch lookups against the ip.thc.org text API: reverse DNS by IP
//! address, subdomain enumeration and CNAME lookups by domain.
//!
//! ## Features
//!
//! - **Response Parsing**: Splits `;` metadata from data rows, strips ANSI color
//! - **Auto-Pagination**: Follows next-page links or re-requests with a larger size
//! - **Rate Limiting**: Minimum spacing between every outgoing request
//! - **Partial Results**: A failed continuation keeps the pages already fetched
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ipthc::{LookupConfig, ResponseParser, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = LookupConfig::default().build_fetcher()?;
//!
//!     let body = fetcher.query_subdomains("segfault.net").await?;
//!     for line in ResponseParser::new(false).parse(&body).data_lines {
//!         println!("{line}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! stdin ─► validate ─► Fetcher ─┬─► HttpClient (rate limit, timeout)
//!                               ├─► ResponseParser
//!                               └─► PageAdvance (link, then size)
//!                                         │
//!                    stdout ◄─ data lines ◄┘   errors ─► ErrorLogger
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Query modes and policies
pub mod types;

/// HTTP client with rate limiting
pub mod http;

/// Response parsing
pub mod parse;

/// Page advance strategies
pub mod pagination;

/// Paginating fetcher
pub mod fetch;

/// Input validation
pub mod validate;

/// Failed-input log file
pub mod error_log;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::LookupConfig;
pub use fetch::{AggregatedResult, Fetcher, FetcherConfig};
pub use parse::{ParsedPage, ResponseParser};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
