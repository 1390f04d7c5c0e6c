//! Parsed page types
//!
//! The structured form of one response body.

/// Structured extraction of one response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Result lines, ANSI escapes removed, in payload order
    pub data_lines: Vec<String>,
    /// Comment lines (`;...`), trimmed but otherwise untouched
    pub metadata_lines: Vec<String>,
    /// Entries in this page, 0 when the service did not say
    pub current_count: u64,
    /// Entries available in total, 0 when the service did not say
    pub total_count: u64,
    /// Link to the next page, if the service reported one
    pub next_page_link: Option<String>,
}

impl ParsedPage {
    /// Whether the service has more results than this page holds.
    ///
    /// A next-page link always means more. Without one, counters of 0/0 are
    /// read as "not reported" and the page is taken as complete.
    pub fn has_more(&self) -> bool {
        if self.next_page_link.is_some() {
            return true;
        }
        if self.current_count == 0 && self.total_count == 0 {
            return false;
        }
        self.current_count < self.total_count
    }
}
