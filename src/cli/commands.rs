//! CLI arguments and config overlay

use crate::config::LookupConfig;
use crate::error::Result;
use crate::types::{PaginationFailurePolicy, QueryMode};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Batch lookups against ip.thc.org, one input per stdin line
#[derive(Parser, Debug, Clone)]
#[command(name = "ipthc")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["dns", "subs", "cname"])
))]
pub struct Cli {
    /// Reverse DNS lookup mode (stdin: IP addresses)
    #[arg(long)]
    pub dns: bool,

    /// Subdomain enumeration mode (stdin: domains)
    #[arg(long)]
    pub subs: bool,

    /// CNAME lookup mode (stdin: domains)
    #[arg(long)]
    pub cname: bool,

    /// Verbose mode (show API metadata and errors)
    #[arg(short, long)]
    pub verbose: bool,

    /// Results limit per request (0 for auto-pagination to fetch all)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Delay between requests in seconds
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate_limit: Option<f64>,

    /// Lookup service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// File that failed inputs are appended to
    #[arg(long)]
    pub error_log: Option<PathBuf>,

    /// Fail the whole query when a continuation page fails
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// The selected query mode
    pub fn mode(&self) -> QueryMode {
        if self.dns {
            QueryMode::Dns
        } else if self.subs {
            QueryMode::Subs
        } else {
            QueryMode::Cname
        }
    }

    /// Build the effective config: file (or defaults) overlaid with flags
    pub fn lookup_config(&self) -> Result<LookupConfig> {
        let mut config = match &self.config {
            Some(path) => LookupConfig::from_file(path)?,
            None => LookupConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(limit) = self.limit {
            config.page_size = limit;
        }
        if let Some(rate_limit) = self.rate_limit {
            config.rate_limit_secs = rate_limit;
        }
        if let Some(error_log) = &self.error_log {
            config.error_log.clone_from(error_log);
        }
        if self.fail_fast {
            config.pagination_failure = PaginationFailurePolicy::FailFast;
        }

        config.validate()?;
        Ok(config)
    }
}
