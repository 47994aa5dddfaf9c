// src/lib.rs

//! Campus laundry scraper library.
//!
//! Turns the upstream's room listing page into [`models::Location`]s and
//! each room's status page into [`models::Machine`]s. Fetching lives in
//! [`services`]; the HTML and free-text parsers in [`parsing`] are pure.

pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod utils;

pub use error::{AppError, ErrorCategory, Result};
pub use models::{Config, Location, Machine, RoomMachines, Status, StatusTone};
pub use services::LaundryClient;
