// src/services/fetcher.rs

//! Raw HTML retrieval.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::FetcherConfig;
use crate::utils::http::{connection_error, create_async_client, user_agent};

/// Upper bound (exclusive) of the numeric User-Agent suffix.
const USER_AGENT_SUFFIX_RANGE: u32 = 1000;

/// Source of the numeric suffix appended to each request's User-Agent.
pub trait SuffixSource: Send + Sync {
    fn next_suffix(&self) -> u32;
}

/// Suffix source backed by a seedable PRNG.
pub struct RandomSuffix {
    rng: Mutex<fastrand::Rng>,
}

impl RandomSuffix {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Deterministic sequence, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for RandomSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.u32(0..USER_AGENT_SUFFIX_RANGE)
    }
}

/// Something that can turn a URL into an HTML document.
#[async_trait]
pub trait HtmlFetcher: Send + Sync {
    async fn fetch_html(&self, url: &Url) -> Result<String>;
}

/// Production fetcher over `reqwest`.
///
/// Requests bypass caches and carry a randomized User-Agent; there is no
/// retry. Transport errors, timeouts and non-UTF-8 bodies surface as
/// [`AppError::Connection`].
pub struct ReqwestFetcher {
    client: Client,
    user_agent: String,
    suffix: Arc<dyn SuffixSource>,
}

impl ReqwestFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Self::with_suffix_source(config, Arc::new(RandomSuffix::new()))
    }

    pub fn with_suffix_source(
        config: &FetcherConfig,
        suffix: Arc<dyn SuffixSource>,
    ) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            user_agent: config.user_agent.clone(),
            suffix,
        })
    }
}

#[async_trait]
impl HtmlFetcher for ReqwestFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String> {
        let agent = user_agent(&self.user_agent, self.suffix.next_suffix());
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, agent)
            .send()
            .await
            .map_err(|e| connection_error(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            // The upstream serves its placeholder page with error statuses;
            // the parsers decide what it means.
            log::warn!("GET {url} returned {status}; parsing body anyway");
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| connection_error(url.as_str(), e))?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| AppError::connection(format!("response from {url} is not valid UTF-8")))
    }
}
