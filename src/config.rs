//! Configuration for the lookup tool
//!
//! Settings come from built-in defaults, optionally overlaid with a YAML
//! file, then with command-line flags.
//!
//! ```yaml
//! base_url: https://ip.thc.org
//! page_size: 0            # 0 = auto-paginate
//! rate_limit_secs: 1.0
//! timeout_secs: 30
//! max_pages: 100
//! pagination_failure: best_effort
//! error_log: ipthc-errors.log
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::error_log::DEFAULT_ERROR_LOG;
use crate::fetch::{Fetcher, FetcherConfig};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::pagination::DEFAULT_MAX_PAGES;
use crate::types::PaginationFailurePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Default lookup service
pub const DEFAULT_BASE_URL: &str = "https://ip.thc.org";

/// Default delay between requests, in seconds
pub const DEFAULT_RATE_LIMIT_SECS: f64 = 1.0;

/// Default request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Lookup Config
// ============================================================================

/// Complete tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// Base URL of the lookup service
    pub base_url: String,

    /// Results per request; 0 auto-paginates to fetch everything
    pub page_size: i64,

    /// Minimum delay between requests in seconds; 0 disables it
    pub rate_limit_secs: f64,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum pages fetched for one query
    pub max_pages: u32,

    /// What to do when a continuation page fails
    pub pagination_failure: PaginationFailurePolicy,

    /// Where failed inputs are recorded
    pub error_log: PathBuf,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 0,
            rate_limit_secs: DEFAULT_RATE_LIMIT_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_pages: DEFAULT_MAX_PAGES,
            pagination_failure: PaginationFailurePolicy::default(),
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
        }
    }
}

impl LookupConfig {
    /// Parse a config from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.page_size < 0 {
            return Err(Error::invalid_value("limit", "limit cannot be negative"));
        }
        if self.page_size > i64::from(u32::MAX) {
            return Err(Error::invalid_value("limit", "limit is too large"));
        }
        if self.rate_limit_secs < 0.0 || !self.rate_limit_secs.is_finite() {
            return Err(Error::invalid_value(
                "rate_limit",
                "rate limit cannot be negative",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "timeout must be positive"));
        }
        if self.max_pages == 0 {
            return Err(Error::invalid_value("max_pages", "at least one page is required"));
        }
        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs));
        builder = match RateLimiterConfig::from_secs_f64(self.rate_limit_secs) {
            Some(rate_limit) => builder.rate_limit(rate_limit),
            None => builder.no_rate_limit(),
        };
        builder.build()
    }

    /// Fetcher settings derived from this config
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::new()
            .with_page_size(u32::try_from(self.page_size).unwrap_or(0))
            .with_max_pages(self.max_pages)
            .with_failure_policy(self.pagination_failure)
    }

    /// Validate and build a ready-to-use fetcher
    pub fn build_fetcher(&self) -> Result<Fetcher> {
        self.validate()?;
        let client = HttpClient::with_config(self.http_client_config())?;
        Ok(Fetcher::new(client, self.fetcher_config()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LookupConfig::default();
        assert_eq!(config.base_url, "https://ip.thc.org");
        assert_eq!(config.page_size, 0);
        assert!((config.rate_limit_secs - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.error_log, PathBuf::from("ipthc-errors.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = LookupConfig::from_yaml(
            "base_url: http://localhost:8080\npage_size: 200\npagination_failure: fail_fast\n",
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.page_size, 200);
        assert_eq!(config.pagination_failure, PaginationFailurePolicy::FailFast);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let err = LookupConfig::from_yaml("retries: 3\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rate_limit_secs: 0.5\nmax_pages: 10").unwrap();

        let config = LookupConfig::from_file(file.path()).unwrap();
        assert!((config.rate_limit_secs - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.max_pages, 10);
    }

    #[test]
    fn test_from_missing_file() {
        let err = LookupConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = LookupConfig {
            page_size: -1,
            ..Default::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("limit cannot be negative"));

        let config = LookupConfig {
            rate_limit_secs: -0.5,
            ..Default::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("rate limit cannot be negative"));

        let config = LookupConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let config = LookupConfig {
            base_url: "ftp://ip.thc.org".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_client_config() {
        let config = LookupConfig {
            rate_limit_secs: 0.0,
            timeout_secs: 5,
            ..Default::default()
        };
        let http = config.http_client_config();
        assert_eq!(http.base_url.as_deref(), Some("https://ip.thc.org"));
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert!(http.rate_limit.is_none());

        let http = LookupConfig::default().http_client_config();
        assert_eq!(
            http.rate_limit.map(|r| r.min_interval),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_fetcher_config() {
        let config = LookupConfig {
            page_size: 50,
            max_pages: 7,
            ..Default::default()
        };
        let fetcher = config.fetcher_config();
        assert_eq!(fetcher.page_size, Some(50));
        assert_eq!(fetcher.max_pages, 7);

        assert_eq!(LookupConfig::default().fetcher_config().page_size, None);
    }

    #[test]
    fn test_build_fetcher_validates() {
        let config = LookupConfig {
            page_size: -5,
            ..Default::default()
        };
        assert!(config.build_fetcher().is_err());
        assert!(LookupConfig::default().build_fetcher().is_ok());
    }
}
