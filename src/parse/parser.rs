//! Response parser
//!
//! Splits a response body into metadata and data lines and picks the
//! pagination markers out of the metadata.

use super::types::ParsedPage;
use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;

/// Marker that starts a metadata line
pub const COMMENT_MARKER: char = ';';

/// `;;Entries: <current>/<total>`
static ENTRIES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";;Entries:\s*(\d+)/(\d+)").unwrap());

/// `;;Next Page: ... <url>`, the URL ends at whitespace, a quote or a bracket
static NEXT_PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#";;Next Page:.*?(https?://[^\s'"<>]+)"#).unwrap());

/// ANSI color escapes (SGR sequences)
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

/// Remove ANSI color escape sequences from a line
pub fn strip_ansi(line: &str) -> String {
    ANSI_REGEX.replace_all(line, "").into_owned()
}

/// Parser for lookup service responses
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser {
    /// Echo metadata lines to stderr while parsing
    echo_metadata: bool,
}

impl ResponseParser {
    /// Create a new parser
    pub fn new(echo_metadata: bool) -> Self {
        Self { echo_metadata }
    }

    /// Parse a body, echoing metadata lines to stderr when enabled
    pub fn parse(&self, body: &str) -> ParsedPage {
        if self.echo_metadata {
            let stderr = io::stderr();
            let mut sink = stderr.lock();
            self.parse_with_sink(body, &mut sink)
        } else {
            self.parse_with_sink(body, &mut io::sink())
        }
    }

    /// Parse a body, echoing metadata lines into `sink` when enabled.
    ///
    /// Parsing never fails; a sink that refuses writes only loses the echo.
    pub fn parse_with_sink<W: Write + ?Sized>(&self, body: &str, sink: &mut W) -> ParsedPage {
        let mut page = ParsedPage::default();

        for line in body.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed.starts_with(COMMENT_MARKER) {
                let cleaned = strip_ansi(trimmed);

                if let Some(caps) = ENTRIES_REGEX.captures(&cleaned) {
                    // Counters too large for u64 are ignored, same as a missing line
                    if let (Ok(current), Ok(total)) = (caps[1].parse(), caps[2].parse()) {
                        page.current_count = current;
                        page.total_count = total;
                    }
                }

                if let Some(caps) = NEXT_PAGE_REGEX.captures(&cleaned) {
                    page.next_page_link = Some(caps[1].to_string());
                }

                if self.echo_metadata {
                    let _ = writeln!(sink, "{trimmed}");
                }

                page.metadata_lines.push(trimmed.to_string());
                continue;
            }

            // A line made only of color codes is not a result
            let cleaned = strip_ansi(trimmed);
            if !cleaned.is_empty() {
                page.data_lines.push(cleaned);
            }
        }

        page
    }
}
