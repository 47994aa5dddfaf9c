//! CSS selectors for the listing and room pages.

use scraper::Selector;

use crate::error::{AppError, Result};

/// Room links on the listing page.
pub const LOCATION_LINK: &str = "a[href*='laundry_room.php?lr']";

/// Availability summaries on the listing page, one per room link.
pub const LOCATION_AVAILABILITY: &str = "span[class*='user-avail']";

/// Container of the room page's washer and dryer tables.
pub const MONITOR: &str = "#classic_monitor";

/// Every row of the washer table (first column of the monitor table),
/// including the rows nested inside progress bars, in document order.
pub const WASHER_ROWS: &str =
    "#classic_monitor > table > tbody > tr > td:nth-child(1) > table > tbody tr";

/// Every row of the dryer table (second column of the monitor table).
pub const DRYER_ROWS: &str =
    "#classic_monitor > table > tbody > tr > td:nth-child(2) > table > tbody tr";

/// Machine ordinal cell in a descriptor row.
pub const MACHINE_NUMBER: &str = "td.bgdesc";

/// Progress bar image in a descriptor row; its `width` encodes elapsed time.
pub const PROGRESS_BAR: &str = "td.bgruntime img";

/// Free-text status in the last row of a machine group.
pub const STATUS_TEXT: &str = "td > div > span";

/// Compile a selector, mapping failures into the crate error type.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_selectors_compile() {
        for s in [
            LOCATION_LINK,
            LOCATION_AVAILABILITY,
            MONITOR,
            WASHER_ROWS,
            DRYER_ROWS,
            MACHINE_NUMBER,
            PROGRESS_BAR,
            STATUS_TEXT,
        ] {
            assert!(parse_selector(s).is_ok(), "selector failed: {s}");
        }
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(matches!(
            parse_selector("[[invalid"),
            Err(AppError::Selector { .. })
        ));
    }
}
