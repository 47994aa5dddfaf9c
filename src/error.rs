// src/error.rs

//! Unified error handling for the laundry scraper.
//!
//! Fetch and parse failures are flat, mutually exclusive kinds. A call
//! surfaces exactly one of them; per-item failures inside the location
//! listing are wrapped in [`AppError::LocationDetail`] so the underlying
//! cause stays reachable through `source()`.

use std::fmt;

use thiserror::Error;

/// Result type alias for laundry operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failure that fits no other kind
    #[error("Unknown error: {0}")]
    Unknown(String),

    /// Transport failure, timeout, or an undecodable body
    #[error("Connection error: {0}")]
    Connection(String),

    /// Listing page anchors and availability spans do not pair up
    #[error("Listing mismatch: {anchors} room links vs {availability} availability entries")]
    ElementsMismatch { anchors: usize, availability: usize },

    /// Room link could not be resolved against the site base URL
    #[error("Unresolvable room link '{href}'")]
    LocationUrl { href: String },

    /// A single room entry in the listing failed to parse
    #[error("Room entry #{index} is malformed")]
    LocationDetail {
        index: usize,
        #[source]
        source: Box<AppError>,
    },

    /// Availability text too short to carry counts
    #[error("Availability text too short: '{0}'")]
    AvailabilityLength(String),

    /// Availability text missing a marker or holding a non-numeric count
    #[error("Availability text unreadable: '{0}'")]
    AvailabilityIndex(String),

    /// Machine ordinal could not be parsed
    #[error("Machine descriptor unreadable: '{0}'")]
    MachineDetail(String),

    /// Room page lacks the machine tables entirely
    #[error("Machine list unavailable: {0}")]
    MachineList(String),

    /// Upstream served a degraded/placeholder listing
    #[error("Upstream returned only {count} rooms; service looks degraded")]
    ServerSide { count: usize, document: String },

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested room is not on the listing
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

/// Coarse grouping used to pick user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network trouble; retrying may help.
    Connectivity,
    /// Upstream is up but serving degraded content.
    ServiceDown,
    /// Page structure or content was not understood.
    Parse,
    /// Local setup problem.
    Setup,
    /// The requested room does not exist.
    NotFound,
}

impl AppError {
    /// Create a connection error.
    pub fn connection(message: impl fmt::Display) -> Self {
        Self::Connection(message.to_string())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap a per-room failure so the whole listing call fails.
    pub fn location_detail(index: usize, source: AppError) -> Self {
        Self::LocationDetail {
            index,
            source: Box::new(source),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Connection(_) => ErrorCategory::Connectivity,
            Self::ServerSide { .. } => ErrorCategory::ServiceDown,
            Self::Unknown(_)
            | Self::ElementsMismatch { .. }
            | Self::LocationUrl { .. }
            | Self::LocationDetail { .. }
            | Self::AvailabilityLength(_)
            | Self::AvailabilityIndex(_)
            | Self::MachineDetail(_)
            | Self::MachineList(_)
            | Self::Selector { .. } => ErrorCategory::Parse,
            Self::Io(_) | Self::Toml(_) | Self::Config(_) | Self::Validation(_) => {
                ErrorCategory::Setup
            }
            Self::RoomNotFound(_) => ErrorCategory::NotFound,
        }
    }

    /// Short message suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Connectivity => {
                "Could not reach the laundry service. Check your connection and try again."
            }
            ErrorCategory::ServiceDown => {
                "The laundry service is currently unavailable. Please try again later."
            }
            ErrorCategory::Parse => "The laundry service returned a page that could not be read.",
            ErrorCategory::Setup => "The local configuration is invalid.",
            ErrorCategory::NotFound => "No laundry room matches that name.",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn location_detail_keeps_source() {
        let err = AppError::location_detail(3, AppError::AvailabilityLength("(1)".into()));
        let source = err.source().expect("source");
        assert!(source.to_string().contains("(1)"));
        assert!(!err.to_string().contains("(1)"));
        assert_eq!(err.category(), ErrorCategory::Parse);
    }

    #[test]
    fn missing_room_reads_as_not_found() {
        let err = AppError::RoomNotFound("no room named 'x' on site 328".into());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.user_message(), "No laundry room matches that name.");
    }

    #[test]
    fn server_side_display_omits_document() {
        let err = AppError::ServerSide {
            count: 2,
            document: "<html>placeholder</html>".into(),
        };
        assert!(!err.to_string().contains("placeholder"));
        assert_eq!(err.category(), ErrorCategory::ServiceDown);
    }

    #[test]
    fn connectivity_and_service_down_messages_differ() {
        let conn = AppError::connection("timed out");
        let down = AppError::ServerSide {
            count: 0,
            document: String::new(),
        };
        assert_ne!(conn.user_message(), down.user_message());
        assert_ne!(
            conn.user_message(),
            AppError::MachineList("x".into()).user_message()
        );
    }
}
