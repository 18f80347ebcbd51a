//! HTTP content fetcher using reqwest + scraper.
//!
//! Fetches a page, extracts the title, strips scripts/styles, collapses
//! whitespace and caps the text length. No JavaScript rendering; static
//! HTML only.

use async_trait::async_trait;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::traits::ContentFetcher;
use crate::types::FetchedDocument;

/// Fetch timeout, matching the upstream transport bound.
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Default cap on extracted text length, in characters.
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 10_000;

/// HTTP fetcher with a browser-like User-Agent and a fixed timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
    max_content_chars: usize,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        // Browser-like User-Agent to avoid trivial bot blocking
        let user_agent =
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }

    /// Override the extracted-text length cap.
    pub fn with_max_content_chars(mut self, max: usize) -> Self {
        self.max_content_chars = max;
        self
    }

    async fn fetch_html(&self, url: &str) -> FetchResult<String> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }

    /// Extract the page title: `<title>`, then the first `<h1>`, then a
    /// placeholder.
    fn extract_title(document: &Html) -> String {
        for selector_str in ["title", "h1"] {
            if let Ok(selector) = Selector::parse(selector_str) {
                if let Some(el) = document.select(&selector).next() {
                    let text = el.text().collect::<String>().trim().to_string();
                    if !text.is_empty() {
                        return text;
                    }
                }
            }
        }
        "Untitled".to_string()
    }

    /// Elements whose subtrees carry no readable content.
    const SKIPPED_ELEMENTS: [&'static str; 4] = ["script", "style", "noscript", "iframe"];

    /// Collect text nodes below an element, skipping non-content subtrees.
    ///
    /// Walks the parsed DOM instead of string-matching serialized markup,
    /// so non-canonical source (unquoted attributes, implied tags) cannot
    /// leak script or style text into the result.
    fn collect_text(element: ElementRef, out: &mut String) {
        if Self::SKIPPED_ELEMENTS.contains(&element.value().name()) {
            return;
        }

        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    out.push_str(text);
                    out.push(' ');
                }
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        Self::collect_text(child_element, out);
                    }
                }
                _ => {}
            }
        }
    }

    /// Collect visible text and collapse whitespace runs to single spaces.
    fn extract_text(html: &str) -> String {
        let document = Html::parse_document(html);

        let root = Selector::parse("body")
            .ok()
            .and_then(|selector| document.select(&selector).next())
            .unwrap_or_else(|| document.root_element());

        let mut raw = String::new();
        Self::collect_text(root, &mut raw);

        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Cap text length, appending an ellipsis when truncated.
    fn truncate(text: String, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            return text;
        }
        let mut capped: String = text.chars().take(max_chars).collect();
        capped.push_str("...");
        capped
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedDocument> {
        debug!(url = %url, "Fetching page content");

        let html = self.fetch_html(url).await?;
        let document = Html::parse_document(&html);

        let title = Self::extract_title(&document);
        let text = Self::truncate(Self::extract_text(&html), self.max_content_chars);

        debug!(
            url = %url,
            title = %title,
            content_chars = text.chars().count(),
            "Content extracted"
        );

        Ok(FetchedDocument { text, title })
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_from_title_tag() {
        let html = "<html><head><title>Sample Article</title></head><body></body></html>";
        let document = Html::parse_document(html);
        assert_eq!(HttpFetcher::extract_title(&document), "Sample Article");
    }

    #[test]
    fn test_extract_title_falls_back_to_h1() {
        let html = "<html><body><h1>Heading Title</h1><p>text</p></body></html>";
        let document = Html::parse_document(html);
        assert_eq!(HttpFetcher::extract_title(&document), "Heading Title");
    }

    #[test]
    fn test_extract_title_placeholder_when_missing() {
        let html = "<html><body><p>no title here</p></body></html>";
        let document = Html::parse_document(html);
        assert_eq!(HttpFetcher::extract_title(&document), "Untitled");
    }

    #[test]
    fn test_extract_text_strips_scripts_and_styles() {
        let html = r#"<html><body>
            <script>var hidden = 1;</script>
            <style>.x { color: red; }</style>
            <p>Visible paragraph.</p>
        </body></html>"#;
        let text = HttpFetcher::extract_text(html);
        assert!(text.contains("Visible paragraph."));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_extract_text_strips_scripts_with_unquoted_attributes() {
        // The serializer quotes attributes, so source markup like this does
        // not round-trip byte-for-byte. Stripping must not depend on it.
        let html = "<html><body>\
            <script type=text/javascript>var tracked = 1;</script>\
            <style media=screen>.x { color: red; }</style>\
            <p>Visible paragraph.</p>\
        </body></html>";
        let text = HttpFetcher::extract_text(html);
        assert_eq!(text, "Visible paragraph.");
        assert!(!text.contains("tracked"));
    }

    #[test]
    fn test_extract_text_skips_nested_noscript_and_iframe() {
        let html = r#"<html><body>
            <div><noscript><p>Enable JavaScript.</p></noscript></div>
            <iframe src="https://ads.example.com">ad frame</iframe>
            <p>Article body.</p>
        </body></html>"#;
        let text = HttpFetcher::extract_text(html);
        assert_eq!(text, "Article body.");
    }

    #[test]
    fn test_extract_text_collapses_whitespace() {
        let html = "<html><body><p>one</p>\n\n   <p>two\n three</p></body></html>";
        assert_eq!(HttpFetcher::extract_text(html), "one two three");
    }

    #[test]
    fn test_truncate_caps_length() {
        let text = "a".repeat(50);
        let capped = HttpFetcher::truncate(text, 10);
        assert_eq!(capped, format!("{}...", "a".repeat(10)));
    }

    #[test]
    fn test_truncate_leaves_short_text_alone() {
        let capped = HttpFetcher::truncate("short".to_string(), 100);
        assert_eq!(capped, "short");
    }

    #[test]
    fn test_truncate_is_char_boundary_safe() {
        let text = "ñ".repeat(20);
        let capped = HttpFetcher::truncate(text, 5);
        assert_eq!(capped, format!("{}...", "ñ".repeat(5)));
    }
}
