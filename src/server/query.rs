//! Query-string parsing for `/api/scrape`.

use tracing::debug;
use url::Url;

use crate::markdown_converter::ConversionOptions;
use crate::scrape::{ScrapeError, ScrapeRequest};
use crate::utils::string_utils::{is_falsy, is_truthy};

/// Raw query parameters, kept as strings so that malformed flags are
/// ignored instead of rejected.
#[derive(Debug, Default, Clone)]
pub struct ScrapeQuery {
    pub url: Option<String>,
    pub json: Option<String>,
    pub format_tables: Option<String>,
    pub strip_tables: Option<String>,
    pub strip_images: Option<String>,
    pub strip_links: Option<String>,
    pub wait_for_timeout_seconds: Option<String>,
}

impl ScrapeQuery {
    /// Collect the known parameters from decoded key/value pairs.
    ///
    /// When a key repeats, its first value wins. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "url" => &mut query.url,
                "json" => &mut query.json,
                "formatTables" => &mut query.format_tables,
                "stripTables" => &mut query.strip_tables,
                "stripImages" => &mut query.strip_images,
                "stripLinks" => &mut query.strip_links,
                "waitForTimeoutSeconds" => &mut query.wait_for_timeout_seconds,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Validate the query into a [`ScrapeRequest`].
    ///
    /// # Errors
    /// * [`ScrapeError::MissingUrl`] - `url` absent or empty
    /// * [`ScrapeError::InvalidUrl`] - `url` is not an absolute URL
    pub fn into_request(self) -> Result<ScrapeRequest, ScrapeError> {
        let url = self
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ScrapeError::MissingUrl)?;

        Url::parse(&url).map_err(|e| ScrapeError::InvalidUrl(e.to_string()))?;

        let flag = |value: &Option<String>| value.as_deref().is_some_and(is_truthy);

        let options = ConversionOptions {
            format_tables: !self.format_tables.as_deref().is_some_and(is_falsy),
            strip_tables: flag(&self.strip_tables),
            strip_images: flag(&self.strip_images),
            strip_links: flag(&self.strip_links),
        };

        let wait_seconds = self
            .wait_for_timeout_seconds
            .as_deref()
            .and_then(parse_wait_seconds);

        Ok(ScrapeRequest {
            url,
            options,
            use_json: flag(&self.json),
            wait_seconds,
        })
    }
}

/// Positive whole seconds only; anything else is ignored.
///
/// Accepts what a JavaScript `Number()` conversion accepts for integers, so
/// `5`, `5.0`, `1e1` and `0x5` all count, while `2.5` and `-3` do not.
fn parse_wait_seconds(raw: &str) -> Option<u64> {
    let seconds = parse_number(raw.trim())
        .filter(|n| n.is_finite() && *n > 0.0 && n.fract() == 0.0)
        .map(|n| n as u64);
    if seconds.is_none() {
        debug!(value = raw, "Ignoring waitForTimeoutSeconds");
    }
    seconds
}

fn parse_number(value: &str) -> Option<f64> {
    let radix_prefixes = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in radix_prefixes {
        if let Some(digits) = value.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }
    // Rust also reads "inf" and "nan"; both are rejected by the caller
    value.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &str) -> ScrapeQuery {
        ScrapeQuery {
            url: Some(url.to_string()),
            ..ScrapeQuery::default()
        }
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let request = query("https://example.com/a").into_request()?;
        assert_eq!(request.url, "https://example.com/a");
        assert_eq!(request.options, ConversionOptions::default());
        assert!(!request.use_json);
        assert_eq!(request.wait_seconds, None);
        Ok(())
    }

    #[test]
    fn test_missing_and_empty_url() {
        assert!(matches!(
            ScrapeQuery::default().into_request(),
            Err(ScrapeError::MissingUrl)
        ));
        assert!(matches!(query("   ").into_request(), Err(ScrapeError::MissingUrl)));
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            query("not a url").into_request(),
            Err(ScrapeError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_flags() -> anyhow::Result<()> {
        let request = ScrapeQuery {
            json: Some("true".to_string()),
            format_tables: Some("0".to_string()),
            strip_tables: Some("1".to_string()),
            strip_images: Some("TRUE".to_string()),
            strip_links: Some("yes".to_string()),
            ..query("https://example.com")
        }
        .into_request()?;

        assert!(request.use_json);
        assert!(!request.options.format_tables);
        assert!(request.options.strip_tables);
        assert!(request.options.strip_images);
        assert!(!request.options.strip_links);
        Ok(())
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let pairs = [
            ("url", "https://a.example"),
            ("url", "https://b.example"),
            ("stripLinks", "1"),
            ("utm_source", "feed"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let query = ScrapeQuery::from_pairs(pairs);
        assert_eq!(query.url.as_deref(), Some("https://a.example"));
        assert_eq!(query.strip_links.as_deref(), Some("1"));
        assert_eq!(query.json, None);
    }

    #[test]
    fn test_wait_seconds() {
        assert_eq!(parse_wait_seconds("5"), Some(5));
        assert_eq!(parse_wait_seconds(" 5.0 "), Some(5));
        assert_eq!(parse_wait_seconds("1e1"), Some(10));
        assert_eq!(parse_wait_seconds("0x3"), Some(3));
        assert_eq!(parse_wait_seconds("0"), None);
        assert_eq!(parse_wait_seconds("-3"), None);
        assert_eq!(parse_wait_seconds("2.5"), None);
        assert_eq!(parse_wait_seconds("Infinity"), None);
        assert_eq!(parse_wait_seconds("soon"), None);
    }
}
