//! Utility functions and helpers.

pub mod http;
pub mod text;

use url::Url;

use crate::error::{AppError, Result};

/// Resolve a potentially relative room link against the site base URL.
pub fn resolve_url(base: &Url, href: &str) -> Result<Url> {
    let href = href.trim();
    if href.is_empty() {
        return Err(AppError::LocationUrl {
            href: href.to_string(),
        });
    }
    base.join(href).map_err(|_| AppError::LocationUrl {
        href: href.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("http://example.com/").unwrap();
        assert_eq!(
            resolve_url(&base, "laundry_room.php?lr=12").unwrap().as_str(),
            "http://example.com/laundry_room.php?lr=12"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x").unwrap().as_str(),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_resolve_url_rejects_garbage() {
        let base = Url::parse("http://example.com/").unwrap();
        assert!(matches!(
            resolve_url(&base, "http://[::1"),
            Err(AppError::LocationUrl { .. })
        ));
        assert!(matches!(
            resolve_url(&base, "   "),
            Err(AppError::LocationUrl { .. })
        ));
    }
}
