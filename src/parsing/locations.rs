//! Campus listing page parsing.

use scraper::{ElementRef, Html};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Location, ParserConfig};
use crate::parsing::availability::parse_availability;
use crate::parsing::selectors::{self, parse_selector};
use crate::utils::resolve_url;
use crate::utils::text::{capitalize_words, fix_ordinal_suffixes, normalize_whitespace};

/// Parse the listing page into rooms sorted by name.
///
/// Room links and availability spans are paired by position; differing
/// counts fail with [`AppError::ElementsMismatch`]. Any room that cannot be
/// read fails the whole call with [`AppError::LocationDetail`]. A listing
/// with `config.min_location_count` rooms or fewer is the upstream's
/// placeholder page and fails with [`AppError::ServerSide`].
pub fn parse_locations(html: &str, base: &Url, config: &ParserConfig) -> Result<Vec<Location>> {
    let document = Html::parse_document(html);

    let link_sel = parse_selector(selectors::LOCATION_LINK)?;
    let avail_sel = parse_selector(selectors::LOCATION_AVAILABILITY)?;
    let links: Vec<ElementRef> = document.select(&link_sel).collect();
    let availability: Vec<ElementRef> = document.select(&avail_sel).collect();

    if links.len() != availability.len() {
        return Err(AppError::ElementsMismatch {
            anchors: links.len(),
            availability: availability.len(),
        });
    }

    let mut locations = links
        .iter()
        .zip(&availability)
        .enumerate()
        .map(|(index, (link, avail))| {
            parse_location(*link, *avail, base, config)
                .map_err(|e| AppError::location_detail(index, e))
        })
        .collect::<Result<Vec<_>>>()?;

    if locations.len() <= config.min_location_count {
        log::warn!(
            "Listing page yielded {} rooms (threshold {}); treating as upstream placeholder",
            locations.len(),
            config.min_location_count
        );
        log::debug!("Placeholder listing document:\n{html}");
        return Err(AppError::ServerSide {
            count: locations.len(),
            document: html.to_string(),
        });
    }

    locations.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(locations)
}

fn parse_location(
    link: ElementRef<'_>,
    availability: ElementRef<'_>,
    base: &Url,
    config: &ParserConfig,
) -> Result<Location> {
    let raw_name: String = link.text().collect();
    let name = clean_location_name(&raw_name, &config.name_prefix);

    let href = link.value().attr("href").unwrap_or_default();
    let url = resolve_url(base, href)?;

    let raw_availability: String = availability.text().collect();
    let (available_washers, available_dryers) =
        parse_availability(&normalize_whitespace(&raw_availability))?;

    Ok(Location {
        url,
        name,
        available_washers,
        available_dryers,
    })
}

/// Turn raw link text such as `"PARC ALLISON 1ST FLOOR"` into
/// `"Allison 1st Floor"`.
pub fn clean_location_name(raw: &str, prefix: &str) -> String {
    let name = fix_ordinal_suffixes(&capitalize_words(&normalize_whitespace(raw)));
    if !prefix.is_empty() {
        if let Some(rest) = name.strip_prefix(prefix) {
            return rest.trim_start().to_string();
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BASE: &str = "http://classic.laundryview.com/";

    fn entry(lr: usize, name: &str, availability: &str) -> String {
        format!(
            r#"<li><a href="laundry_room.php?lr={lr}">{name}</a>
            <span class="user-avail">{availability}</span></li>"#
        )
    }

    fn listing(entries: &[String]) -> String {
        format!(
            "<html><body><ul>{}</ul><a href=\"/about.php\">About</a></body></html>",
            entries.concat()
        )
    }

    fn rooms(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| entry(i, &format!("HALL {:02} 1ST FLOOR", n - i), "(2 W / 3 D)"))
            .collect()
    }

    fn parse(html: &str) -> Result<Vec<Location>> {
        let base = Url::parse(BASE).unwrap();
        parse_locations(html, &base, &ParserConfig::default())
    }

    #[test]
    fn test_clean_location_name() {
        assert_eq!(
            clean_location_name("PARC ALLISON 1ST FLOOR", "Parc "),
            "Allison 1st Floor"
        );
        assert_eq!(
            clean_location_name("  bobb  2ND   floor ", "Parc "),
            "Bobb 2nd Floor"
        );
        assert_eq!(clean_location_name("3RD 4TH", ""), "3rd 4th");
        assert_eq!(
            clean_location_name("PARC O'BRIEN 2ND FLOOR", "Parc "),
            "O'brien 2nd Floor"
        );
    }

    #[test]
    fn test_parse_sorted_listing() {
        let locations = parse(&listing(&rooms(12))).unwrap();

        assert_eq!(locations.len(), 12);
        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(locations[0].name, "Hall 01 1st Floor");
        assert_eq!(
            locations[0].url.as_str(),
            "http://classic.laundryview.com/laundry_room.php?lr=11"
        );
        assert!(locations
            .iter()
            .all(|l| l.available_washers == 2 && l.available_dryers == 3));
    }

    #[test]
    fn test_count_mismatch() {
        let mut entries = rooms(12);
        entries.push(r#"<span class="user-avail">(1 W / 1 D)</span>"#.to_string());
        assert!(matches!(
            parse(&listing(&entries)),
            Err(AppError::ElementsMismatch {
                anchors: 12,
                availability: 13
            })
        ));

        let small = vec![r#"<a href="laundry_room.php?lr=1">A</a>"#.to_string()];
        assert!(matches!(
            parse(&listing(&small)),
            Err(AppError::ElementsMismatch { .. })
        ));
    }

    #[test]
    fn test_small_listing_is_server_side() {
        for n in [0, 1, 10] {
            match parse(&listing(&rooms(n))) {
                Err(AppError::ServerSide { count, document }) => {
                    assert_eq!(count, n);
                    assert!(!document.is_empty());
                }
                other => panic!("expected server side error for {n}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_threshold_is_configurable() {
        let base = Url::parse(BASE).unwrap();
        let config = ParserConfig {
            min_location_count: 2,
            ..ParserConfig::default()
        };
        let locations = parse_locations(&listing(&rooms(3)), &base, &config).unwrap();
        assert_eq!(locations.len(), 3);
    }

    #[test]
    fn test_bad_availability_fails_whole_listing() {
        let mut entries = rooms(12);
        entries[4] = entry(99, "BROKEN HALL", "(?)");
        match parse(&listing(&entries)) {
            Err(AppError::LocationDetail { index, source }) => {
                assert_eq!(index, 4);
                assert!(matches!(*source, AppError::AvailabilityLength(_)));
            }
            other => panic!("expected location detail error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_link_fails_whole_listing() {
        let mut entries = rooms(12);
        entries[0] = r#"<li><a href="http://[::1/laundry_room.php?lr=1">X</a><span class="user-avail">(1 W / 1 D)</span></li>"#.to_string();
        match parse(&listing(&entries)) {
            Err(AppError::LocationDetail { source, .. }) => {
                assert!(matches!(*source, AppError::LocationUrl { .. }));
            }
            other => panic!("expected location detail error, got {other:?}"),
        }
    }

    #[test]
    fn test_reparse_is_identical() {
        let html = listing(&rooms(15));
        assert_eq!(parse(&html).unwrap(), parse(&html).unwrap());
    }
}
