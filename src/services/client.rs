// src/services/client.rs

//! Fetch-and-parse facade.
//!
//! Each call fetches fresh HTML and parses it from scratch. Nothing is
//! cached between calls and nothing is shared, so calls may run
//! concurrently.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use url::Url;

use crate::error::Result;
use crate::models::{Config, Location, RoomMachines};
use crate::parsing::{parse_locations, parse_room};
use crate::services::fetcher::{HtmlFetcher, ReqwestFetcher};

/// Client for the campus laundry pages.
pub struct LaundryClient<F = ReqwestFetcher> {
    config: Arc<Config>,
    base: Url,
    fetcher: F,
}

impl LaundryClient<ReqwestFetcher> {
    /// Create a client that talks to the configured upstream over HTTP.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(&config.fetcher)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: HtmlFetcher> LaundryClient<F> {
    /// Create a client over an arbitrary HTML source.
    pub fn with_fetcher(config: Arc<Config>, fetcher: F) -> Result<Self> {
        let base = config.fetcher.base()?;
        Ok(Self {
            config,
            base,
            fetcher,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch and parse the room listing for `site_id`, sorted by name.
    pub async fn fetch_locations(&self, site_id: &str) -> Result<Vec<Location>> {
        let url = self.config.fetcher.listing_url(site_id)?;
        let html = self.fetcher.fetch_html(&url).await?;
        let locations = parse_locations(&html, &self.base, &self.config.parser)?;
        log::info!("Parsed {} rooms from {}", locations.len(), url);
        Ok(locations)
    }

    /// Fetch the listing for the configured default site.
    pub async fn fetch_default_locations(&self) -> Result<Vec<Location>> {
        self.fetch_locations(&self.config.fetcher.site_id).await
    }

    /// Fetch and parse the washers and dryers of one room.
    pub async fn fetch_machines(&self, location: &Location) -> Result<RoomMachines> {
        let html = self.fetcher.fetch_html(&location.url).await?;
        let machines = parse_room(&html)?;
        log::debug!(
            "Parsed {} washers and {} dryers for {}",
            machines.washers.len(),
            machines.dryers.len(),
            location.name
        );
        Ok(machines)
    }

    /// Fetch many rooms concurrently, bounded by `fetcher.max_concurrent`.
    ///
    /// Results come back in input order; one room failing does not affect
    /// the others.
    pub async fn fetch_rooms<'a>(
        &self,
        locations: &'a [Location],
    ) -> Vec<(&'a Location, Result<RoomMachines>)> {
        let concurrency = self.config.fetcher.max_concurrent.max(1);
        stream::iter(locations)
            .map(|location| async move { (location, self.fetch_machines(location).await) })
            .buffered(concurrency)
            .collect()
            .await
    }
}
