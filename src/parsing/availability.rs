//! Washer/dryer counts from the listing page's availability summary.

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{AppError, Result};
use crate::utils::text::strip_whitespace;

/// Parse a summary such as `"(3 W / 5 D)"` into `(washers, dryers)`.
///
/// The outermost character on each side is a format marker and is dropped
/// before the `" W"`, `"/ "` and `" D"` markers are located.
pub fn parse_availability(text: &str) -> Result<(u32, u32)> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= 5 {
        return Err(AppError::AvailabilityLength(text.to_string()));
    }
    let inner = graphemes[1..graphemes.len() - 1].concat();

    read_counts(&inner).ok_or_else(|| AppError::AvailabilityIndex(text.to_string()))
}

fn read_counts(inner: &str) -> Option<(u32, u32)> {
    let washers_end = inner.find(" W")?;
    let dryers_start = inner.find("/ ")? + 2;
    let dryers_end = inner.find(" D")?;

    let washers = strip_whitespace(&inner[..washers_end]).parse().ok()?;
    let dryers = strip_whitespace(inner.get(dryers_start..dryers_end)?)
        .parse()
        .ok()?;
    Some((washers, dryers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_summary() {
        assert_eq!(parse_availability("(3 W / 5 D)").unwrap(), (3, 5));
        assert_eq!(parse_availability("(10 W / 0 D)").unwrap(), (10, 0));
        assert_eq!(parse_availability("(0 W /  12 D)").unwrap(), (0, 12));
    }

    #[test]
    fn test_short_text_is_length_error() {
        for text in ["", "(3 W)", "(1/2)", "ééééé"] {
            assert!(
                matches!(parse_availability(text), Err(AppError::AvailabilityLength(_))),
                "expected length error for {text:?}"
            );
        }
    }

    #[test]
    fn test_missing_split_marker_is_index_error() {
        assert!(matches!(
            parse_availability("(3 W - 5 D)"),
            Err(AppError::AvailabilityIndex(_))
        ));
    }

    #[test]
    fn test_non_numeric_or_misordered_is_index_error() {
        for text in ["(x W / 5 D)", "(3 W / y D)", "(3 D / 5 W)", "(-1 W / 5 D)"] {
            assert!(
                matches!(parse_availability(text), Err(AppError::AvailabilityIndex(_))),
                "expected index error for {text:?}"
            );
        }
    }
}
