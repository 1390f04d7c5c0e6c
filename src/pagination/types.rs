//! Pagination types and traits
//!
//! Defines the page-advance abstraction shared by all strategies.

use crate::parse::ParsedPage;
use std::collections::HashMap;

/// Query parameter the lookup service reads as a page size hint
pub const DEFAULT_SIZE_PARAM: &str = "l";

/// Hard cap on pages fetched for one query, first page included
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these parameters
    Continue {
        /// Query parameters to add/replace
        query_params: HashMap<String, String>,
        /// Absolute URL to fetch instead of the query endpoint
        url: Option<String>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a single parameter
    pub fn with_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = HashMap::new();
        params.insert(key.into(), value.into());
        Self::Continue {
            query_params: params,
            url: None,
        }
    }

    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue {
            query_params: HashMap::new(),
            url: Some(url.into()),
        }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Size hint sent with the latest re-request
    pub last_size: Option<u64>,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a re-request with a size hint
    pub fn record_size(&mut self, size: u64) {
        self.last_size = Some(size);
    }
}

/// A way of getting from one page to the next.
///
/// Implementations only decide *what* to request; the fetcher issues the
/// request, enforces the page cap and handles failures.
pub trait PageAdvance: Send + Sync {
    /// Look at the latest parsed page and decide where the next one is
    fn next_page(&self, page: &ParsedPage, state: &mut PaginationState) -> NextPage;
}
