//! Fetcher types
//!
//! Configuration for the fetcher and the accumulator that collects pages.

use crate::pagination::{DEFAULT_MAX_PAGES, DEFAULT_SIZE_PARAM};
use crate::parse::ParsedPage;
use crate::types::PaginationFailurePolicy;

/// Configuration for a fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Fixed page size sent with every query; disables auto-pagination
    pub page_size: Option<u32>,
    /// Cap on pages fetched per query, first page included
    pub max_pages: u32,
    /// Query parameter carrying the page size hint
    pub size_param: String,
    /// What to do when a continuation page fails
    pub failure_policy: PaginationFailurePolicy,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            page_size: None,
            max_pages: DEFAULT_MAX_PAGES,
            size_param: DEFAULT_SIZE_PARAM.to_string(),
            failure_policy: PaginationFailurePolicy::default(),
        }
    }
}

impl FetcherConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed page size. Zero means auto-paginate.
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = (size > 0).then_some(size);
        self
    }

    /// Set the page cap
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Set the continuation failure policy
    #[must_use]
    pub fn with_failure_policy(mut self, policy: PaginationFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

/// Data collected across all pages of one query
#[derive(Debug, Clone, Default)]
pub struct AggregatedResult {
    /// Metadata lines of the first page
    pub metadata: Vec<String>,
    /// Data lines in fetch order
    pub collected_data: Vec<String>,
    /// Pages fetched successfully, first page included
    pub page_count: u32,
    /// False when pagination stopped before the service reported the end
    pub complete: bool,
}

impl AggregatedResult {
    /// Start an accumulator from the first page
    pub fn seeded(first: &ParsedPage) -> Self {
        Self {
            metadata: first.metadata_lines.clone(),
            collected_data: first.data_lines.clone(),
            page_count: 1,
            complete: true,
        }
    }

    /// Append a continuation page's data lines as-is, returning how many
    pub fn append_page(&mut self, page: &ParsedPage) -> usize {
        self.collected_data.extend_from_slice(&page.data_lines);
        self.page_count += 1;
        page.data_lines.len()
    }

    /// Mark that pagination stopped before the result set was complete
    pub fn mark_incomplete(&mut self) {
        self.complete = false;
    }

    /// Re-serialize as response text: first-page metadata, then all data.
    ///
    /// Metadata lines come out trimmed, as the parser stored them, not as the
    /// raw first body had them. Re-parsing gives the same lines either way.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in self.metadata.iter().chain(&self.collected_data) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
