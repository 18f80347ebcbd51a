//! URL normalization and validation.
//!
//! Accepts scheme-less input by prepending `https://`, then checks the
//! result against a conservative host pattern: a domain with TLD,
//! `localhost`, or a dotted-quad IP, with optional port and path.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AnalysisError, Result};

lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(
        r"(?i)^https?://(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$"
    )
    .expect("URL pattern is a valid regex");
}

/// Trim, add a scheme if missing, and validate.
///
/// Returns the normalized URL or `AnalysisError::InvalidUrl`.
pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidUrl {
            url: raw.to_string(),
        });
    }

    let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    if !URL_PATTERN.is_match(&url) {
        return Err(AnalysisError::InvalidUrl { url });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_https_when_scheme_missing() {
        assert_eq!(
            normalize_url("example.com/article").unwrap(),
            "https://example.com/article"
        );
    }

    #[test]
    fn test_keeps_existing_scheme() {
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            normalize_url("  example.com  ").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_accepts_localhost_and_ip() {
        assert!(normalize_url("localhost").is_ok());
        assert!(normalize_url("localhost:8000/path").is_ok());
        assert!(normalize_url("127.0.0.1").is_ok());
        assert!(normalize_url("192.168.1.1:8080/admin").is_ok());
    }

    #[test]
    fn test_accepts_port_query_and_path() {
        assert!(normalize_url("example.com:8443").is_ok());
        assert!(normalize_url("example.com/a/b/c?x=1&y=2").is_ok());
        assert!(normalize_url("news.example.co.uk/story").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            normalize_url(""),
            Err(AnalysisError::InvalidUrl { .. })
        ));
        assert!(matches!(
            normalize_url("   "),
            Err(AnalysisError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_hosts() {
        // No TLD
        assert!(normalize_url("not a url").is_err());
        assert!(normalize_url("justaword").is_err());
        // Unsupported scheme stays unsupported after normalization
        assert!(normalize_url("ftp://example.com").is_err());
    }
}
