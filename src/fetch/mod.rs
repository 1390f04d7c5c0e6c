//! Paginating fetcher module
//!
//! Runs one lookup query to completion.
//!
//! # Overview
//!
//! The fetcher provides:
//! - `Fetcher` - issues the first request and follows pages until done
//! - `FetcherConfig` - page size, page cap and failure policy
//! - `AggregatedResult` - the data collected across pages
//!
//! A failed first request is an error. Once one page is in hand, a failed
//! continuation stops pagination and, under the default best-effort policy,
//! the partial result is returned as success.

mod types;

pub use types::{AggregatedResult, FetcherConfig};

use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{LinkThenSizeAdvance, NextPage, PageAdvance, PaginationState};
use crate::parse::{ParsedPage, ResponseParser};
use crate::types::{PaginationFailurePolicy, QueryMode};
use tracing::{debug, info, warn};

/// Fetches complete lookup results, following pagination
pub struct Fetcher {
    /// HTTP client (owns the rate limiter)
    client: HttpClient,
    /// Fetcher configuration
    config: FetcherConfig,
    /// How to reach the next page
    advance: Box<dyn PageAdvance>,
    /// Internal parser, never echoes
    parser: ResponseParser,
}

impl Fetcher {
    /// Create a new fetcher
    pub fn new(client: HttpClient, config: FetcherConfig) -> Self {
        let advance = Box::new(LinkThenSizeAdvance::new(config.size_param.clone()));
        Self {
            client,
            config,
            advance,
            parser: ResponseParser::new(false),
        }
    }

    /// Replace the page advance strategy
    #[must_use]
    pub fn with_advance(mut self, advance: Box<dyn PageAdvance>) -> Self {
        self.advance = advance;
        self
    }

    /// Reverse DNS lookup for an IP address
    pub async fn query_dns(&self, ip: &str) -> Result<String> {
        self.query(QueryMode::Dns, ip).await
    }

    /// Subdomain enumeration for a domain
    pub async fn query_subdomains(&self, domain: &str) -> Result<String> {
        self.query(QueryMode::Subs, domain).await
    }

    /// CNAME lookup for a domain
    pub async fn query_cname(&self, domain: &str) -> Result<String> {
        self.query(QueryMode::Cname, domain).await
    }

    /// Run a lookup of the given kind with the configured page size
    pub async fn query(&self, mode: QueryMode, input: &str) -> Result<String> {
        self.fetch_all(&mode.endpoint(input), self.config.page_size)
            .await
    }

    /// Fetch an endpoint and, unless a page size is forced, every page after it.
    ///
    /// Returns the first body untouched when no pagination happens, otherwise
    /// the first page's metadata followed by all collected data lines.
    pub async fn fetch_all(&self, endpoint: &str, page_size: Option<u32>) -> Result<String> {
        let page_size = page_size.filter(|size| *size > 0);

        let mut request = RequestConfig::new();
        if let Some(size) = page_size {
            request = request.query(&self.config.size_param, size.to_string());
        }

        let body = self.client.get_text_with_config(endpoint, request).await?;
        let first = self.parser.parse(&body);

        if page_size.is_some() {
            debug!("Page size fixed, not paginating {}", endpoint);
            return Ok(body);
        }

        if !first.has_more() {
            return Ok(body);
        }

        info!(
            "Auto-pagination: fetching all {} results...",
            first.total_count
        );

        let result = self.paginate(endpoint, first).await?;
        Ok(result.to_text())
    }

    /// Follow pages after the first until done, capped, or failed.
    ///
    /// Data lines are appended exactly as each page returned them.
    pub async fn paginate(&self, endpoint: &str, first: ParsedPage) -> Result<AggregatedResult> {
        let mut result = AggregatedResult::seeded(&first);
        let mut state = PaginationState::new();
        let mut latest = first;

        loop {
            if result.page_count >= self.config.max_pages {
                if latest.has_more() {
                    info!("Reached maximum page limit ({})", self.config.max_pages);
                    result.mark_incomplete();
                }
                break;
            }

            let (query_params, url) = match self.advance.next_page(&latest, &mut state) {
                NextPage::Continue { query_params, url } => (query_params, url),
                NextPage::Done => {
                    if latest.has_more() {
                        info!(
                            "No way to reach the remaining results ({}/{})",
                            latest.current_count, latest.total_count
                        );
                        result.mark_incomplete();
                    }
                    break;
                }
            };

            info!("Fetching page {}...", result.page_count + 1);

            let mut request = RequestConfig::new();
            for (key, value) in query_params {
                request = request.query(key, value);
            }
            let target = url.as_deref().unwrap_or(endpoint);

            match self.client.get_text_with_config(target, request).await {
                Ok(body) => {
                    latest = self.parser.parse(&body);
                    let added = result.append_page(&latest);
                    debug!(
                        "Page {} added {} lines ({} total)",
                        result.page_count,
                        added,
                        result.collected_data.len()
                    );
                }
                Err(e) => match self.config.failure_policy {
                    PaginationFailurePolicy::BestEffort => {
                        warn!("Pagination failed: {}", e);
                        result.mark_incomplete();
                        break;
                    }
                    PaginationFailurePolicy::FailFast => return Err(e),
                },
            }
        }

        Ok(result)
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("client", &self.client)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
