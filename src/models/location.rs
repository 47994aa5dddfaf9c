//! Laundry room data structure.

use serde::{Deserialize, Serialize};
use url::Url;

/// A laundry room listed on the campus overview page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Absolute URL of the room's machine-status page
    pub url: Url,

    /// Display name, capitalized with ordinal suffixes fixed
    pub name: String,

    /// Washers currently free
    pub available_washers: u32,

    /// Dryers currently free
    pub available_dryers: u32,
}

impl Location {
    /// Case-insensitive name comparison used when looking a room up by name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }

    /// One-line summary, e.g. `"Allison 1st Floor (3 W / 5 D)"`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({} W / {} D)",
            self.name, self.available_washers, self.available_dryers
        )
    }
}
