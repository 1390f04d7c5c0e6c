//! HTTP client module
//!
//! Provides the rate-limited HTTP client used to talk to the lookup service.
//!
//! # Features
//!
//! - **Rate Limiting**: Minimum spacing between requests using governor
//! - **Fixed Timeout**: One timeout for every request, no retries
//! - **Error Classification**: Transport, timeout and status errors are distinct

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
