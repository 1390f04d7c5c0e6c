//! Common types used throughout ipthc
//!
//! Query modes and the policy enums shared by the fetcher, the config
//! layer and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Query Mode
// ============================================================================

/// Kind of lookup performed for every input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Reverse DNS: domains pointing at an IP address
    Dns,
    /// Subdomain enumeration for a domain
    Subs,
    /// Domains with a CNAME pointing at a domain
    Cname,
}

impl QueryMode {
    /// Short name used in logs and the error log
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Dns => "dns",
            QueryMode::Subs => "subs",
            QueryMode::Cname => "cname",
        }
    }

    /// Endpoint path for an identifier, relative to the service base URL
    pub fn endpoint(&self, input: &str) -> String {
        match self {
            QueryMode::Dns => format!("/{input}"),
            QueryMode::Subs => format!("/sb/{input}"),
            QueryMode::Cname => format!("/cn/{input}"),
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Pagination Failure Policy
// ============================================================================

/// What to do when a continuation page cannot be fetched.
///
/// A failed first page is always an error; this only governs pages 2..N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationFailurePolicy {
    /// Stop paginating and return what was collected so far
    #[default]
    BestEffort,
    /// Return the continuation error to the caller
    FailFast,
}
