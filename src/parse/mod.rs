//! Response parsing module
//!
//! # Overview
//!
//! The lookup service answers with plain text: one result per line, plus
//! comment lines starting with `;` that carry metadata. Two of those are
//! machine readable and drive pagination:
//!
//! ```text
//! ;;Entries: 4/12
//! ;;Next Page: https://ip.thc.org/sb/example.com?l=100&p=2
//! ```
//!
//! Result lines may carry ANSI color escapes, which are stripped.

mod parser;
mod types;

pub use parser::{strip_ansi, ResponseParser, COMMENT_MARKER};
pub use types::ParsedPage;
