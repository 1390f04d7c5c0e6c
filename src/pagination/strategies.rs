//! Page advance strategy implementations
//!
//! The lookup service has been seen paginating two ways: an explicit
//! `;;Next Page:` link, or only an entries counter, in which case the whole
//! result set can be re-requested with a larger size hint.

use super::types::{NextPage, PageAdvance, PaginationState, DEFAULT_SIZE_PARAM};
use crate::parse::ParsedPage;

// ============================================================================
// Next Link
// ============================================================================

/// Follows the `;;Next Page:` link reported in the page metadata
#[derive(Debug, Clone, Default)]
pub struct NextLinkAdvance;

impl PageAdvance for NextLinkAdvance {
    fn next_page(&self, page: &ParsedPage, _state: &mut PaginationState) -> NextPage {
        match &page.next_page_link {
            Some(link) if !link.is_empty() => NextPage::with_url(link.clone()),
            _ => NextPage::Done,
        }
    }
}

// ============================================================================
// Enlarged Size
// ============================================================================

/// Re-requests the query endpoint with the size hint set to the total count.
///
/// Only re-requests while the total keeps growing; a repeat of the last size
/// ends pagination.
#[derive(Debug, Clone)]
pub struct EnlargedSizeAdvance {
    /// Query parameter name for the size hint
    pub size_param: String,
}

impl Default for EnlargedSizeAdvance {
    fn default() -> Self {
        Self {
            size_param: DEFAULT_SIZE_PARAM.to_string(),
        }
    }
}

impl EnlargedSizeAdvance {
    /// Create a new size advance using `size_param`
    pub fn new(size_param: impl Into<String>) -> Self {
        Self {
            size_param: size_param.into(),
        }
    }
}

impl PageAdvance for EnlargedSizeAdvance {
    fn next_page(&self, page: &ParsedPage, state: &mut PaginationState) -> NextPage {
        if !page.has_more() || page.total_count == 0 {
            return NextPage::Done;
        }

        // A capped page answers the same size with the same rows again
        if state.last_size == Some(page.total_count) {
            return NextPage::Done;
        }

        state.record_size(page.total_count);
        NextPage::with_param(&self.size_param, page.total_count.to_string())
    }
}

// ============================================================================
// Link, then Size
// ============================================================================

/// Follows a next-page link when the page has one, otherwise falls back to
/// re-requesting with an enlarged size hint.
#[derive(Debug, Clone, Default)]
pub struct LinkThenSizeAdvance {
    link: NextLinkAdvance,
    size: EnlargedSizeAdvance,
}

impl LinkThenSizeAdvance {
    /// Create with a custom size parameter name
    pub fn new(size_param: impl Into<String>) -> Self {
        Self {
            link: NextLinkAdvance,
            size: EnlargedSizeAdvance::new(size_param),
        }
    }
}

impl PageAdvance for LinkThenSizeAdvance {
    fn next_page(&self, page: &ParsedPage, state: &mut PaginationState) -> NextPage {
        if page.next_page_link.is_some() {
            return self.link.next_page(page, state);
        }
        self.size.next_page(page, state)
    }
}
