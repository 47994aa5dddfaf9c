// src/models/mod.rs

//! Domain models for the laundry scraper.
//!
//! Every entity is immutable and rebuilt wholesale on each fetch.

mod config;
mod location;
mod machine;

// Re-export all public types
pub use config::{Config, FetcherConfig, ParserConfig};
pub use location::Location;
pub use machine::{Machine, RoomMachines, Status, StatusTone};
