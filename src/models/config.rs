//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and upstream location settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Page interpretation settings
    #[serde(default)]
    pub parser: ParserConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.base_url.trim().is_empty() {
            return Err(AppError::validation("fetcher.base_url is empty"));
        }
        self.fetcher.base()?;
        if self.fetcher.listing_path.trim().is_empty() {
            return Err(AppError::validation("fetcher.listing_path is empty"));
        }
        if self.fetcher.site_id.trim().is_empty() {
            return Err(AppError::validation("fetcher.site_id is empty"));
        }
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if self.fetcher.max_concurrent == 0 {
            return Err(AppError::validation("fetcher.max_concurrent must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client and upstream location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Site root; room links on the listing page resolve against it
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the aggregate listing page, relative to `base_url`
    #[serde(default = "defaults::listing_path")]
    pub listing_path: String,

    /// Site identifier used when none is given explicitly
    #[serde(default = "defaults::site_id")]
    pub site_id: String,

    /// User-Agent prefix; a random numeric suffix is appended per request
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent room fetches for bulk callers
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl FetcherConfig {
    /// Parsed site root.
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| AppError::config(format!("invalid base_url '{}': {e}", self.base_url)))
    }

    /// Listing page URL for `site_id`.
    pub fn listing_url(&self, site_id: &str) -> Result<Url> {
        let mut url = self.base()?.join(&self.listing_path).map_err(|e| {
            AppError::config(format!("invalid listing_path '{}': {e}", self.listing_path))
        })?;
        url.query_pairs_mut().clear().append_pair("s", site_id);
        Ok(url)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            listing_path: defaults::listing_path(),
            site_id: defaults::site_id(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Listing and room page interpretation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// A listing with this many rooms or fewer is treated as a degraded
    /// upstream response rather than real data
    #[serde(default = "defaults::min_location_count")]
    pub min_location_count: usize,

    /// Leading token removed from room names (matched after capitalization)
    #[serde(default = "defaults::name_prefix")]
    pub name_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_location_count: defaults::min_location_count(),
            name_prefix: defaults::name_prefix(),
        }
    }
}

mod defaults {
    // Fetcher defaults
    pub fn base_url() -> String {
        "http://classic.laundryview.com/".into()
    }
    pub fn listing_path() -> String {
        "lvs.php".into()
    }
    pub fn site_id() -> String {
        "328".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/604.1.38 \
         (KHTML, like Gecko) Version/11.0 Safari/604.1.38"
            .into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn max_concurrent() -> usize {
        4
    }

    // Parser defaults
    pub fn min_location_count() -> usize {
        10
    }
    pub fn name_prefix() -> String {
        "Parc ".into()
    }
}
