//! Service layer for the laundry scraper.
//!
//! This module contains the fetch boundary:
//! - HTML retrieval (`HtmlFetcher`, `ReqwestFetcher`)
//! - User-Agent suffix randomization (`SuffixSource`, `RandomSuffix`)
//! - The fetch-and-parse facade (`LaundryClient`)

mod client;
mod fetcher;

pub use client::LaundryClient;
pub use fetcher::{HtmlFetcher, RandomSuffix, ReqwestFetcher, SuffixSource};
