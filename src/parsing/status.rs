//! Free-text status classification.
//!
//! The upstream renders each machine's state as an English phrase. Rules
//! are tried in order and the first match wins; a rule whose keywords
//! match but whose number does not parse falls through to the next one.

use crate::models::Status;
use crate::utils::text::{integer_between, normalize_whitespace};

/// Progress bar width, in pixels, that corresponds to a complete cycle.
pub const PROGRESS_BAR_MAX_WIDTH: f64 = 240.0;

const ACTIVE: (&str, &str) = ("remaining ", " min");
const CYCLE_ENDED: (&str, &str) = ("cycle ended ", " minutes ago");
const EXTENDED: (&str, &str) = ("extended cycle running for ", " mins");
const OUT_OF_SERVICE: &str = "out of service";
const AVAILABLE: &str = "available";

/// Map a status phrase and the optional progress bar `width` attribute to a
/// [`Status`].
pub fn classify_status(phrase: &str, progress_width: Option<&str>) -> Status {
    let phrase = normalize_whitespace(phrase);

    if let Some(time) = integer_between(&phrase, ACTIVE.0, ACTIVE.1) {
        return Status::Active {
            time,
            progress: progress_fraction(progress_width),
        };
    }
    if let Some(time) = integer_between(&phrase, CYCLE_ENDED.0, CYCLE_ENDED.1) {
        return Status::CycleEnded { time };
    }
    if let Some(time) = integer_between(&phrase, EXTENDED.0, EXTENDED.1) {
        return Status::ExtendedCycle { time };
    }
    if phrase.contains(OUT_OF_SERVICE) {
        return Status::OutOfService;
    }
    if phrase.contains(AVAILABLE) {
        return Status::Available;
    }

    log::warn!("Unrecognized machine status phrase: {phrase:?}");
    Status::Unknown
}

/// Elapsed fraction from a bar width; absent or unreadable widths count as 0.
fn progress_fraction(width: Option<&str>) -> f64 {
    width
        .map(|w| w.trim().trim_end_matches("px").trim())
        .and_then(|w| w.parse::<f64>().ok())
        .filter(|w| w.is_finite() && *w >= 0.0)
        .map_or(0.0, |w| w / PROGRESS_BAR_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_with_width() {
        assert_eq!(
            classify_status("remaining 12 min", Some("120")),
            Status::Active {
                time: 12,
                progress: 0.5
            }
        );
    }

    #[test]
    fn test_active_progress_defaults_and_overflow() {
        assert_eq!(
            classify_status("est. time remaining 7 min", None),
            Status::Active {
                time: 7,
                progress: 0.0
            }
        );
        assert_eq!(
            classify_status("remaining 7 min", Some("wide")),
            Status::Active {
                time: 7,
                progress: 0.0
            }
        );
        assert_eq!(
            classify_status("remaining 1 min", Some("300")),
            Status::Active {
                time: 1,
                progress: 1.25
            }
        );
    }

    #[test]
    fn test_terminal_states() {
        assert_eq!(
            classify_status("cycle ended 4 minutes ago", None),
            Status::CycleEnded { time: 4 }
        );
        assert_eq!(
            classify_status("extended cycle running for 30 mins", None),
            Status::ExtendedCycle { time: 30 }
        );
        assert_eq!(classify_status("out of service", None), Status::OutOfService);
        assert_eq!(classify_status("available", None), Status::Available);
    }

    #[test]
    fn test_substring_matching_tolerates_surrounding_text() {
        assert_eq!(
            classify_status("  machine\n available  now ", None),
            Status::Available
        );
        assert_eq!(
            classify_status("cycle ended 1 5 minutes ago", None),
            Status::CycleEnded { time: 15 }
        );
    }

    #[test]
    fn test_bad_number_falls_through() {
        // Active keywords match but the number does not; the later
        // "available" rule still applies.
        assert_eq!(
            classify_status("remaining ?? min, then available", Some("120")),
            Status::Available
        );
        assert_eq!(
            classify_status("cycle ended soon minutes ago", None),
            Status::Unknown
        );
    }

    #[test]
    fn test_rule_order() {
        // Both "out of service" and "available" appear: the earlier rule wins.
        assert_eq!(
            classify_status("out of service (not available)", None),
            Status::OutOfService
        );
    }

    #[test]
    fn test_unrecognized_phrase() {
        assert_eq!(classify_status("door open", None), Status::Unknown);
        assert_eq!(classify_status("", None), Status::Unknown);
    }
}
