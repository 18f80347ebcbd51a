use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Embedded web UI assets
#[derive(RustEmbed)]
#[folder = "static"]
pub struct Assets;

/// Inline logo served when `te.png` is not embedded.
const FALLBACK_LOGO_SVG: &str = r##"<svg width="96" height="96" viewBox="0 0 96 96" xmlns="http://www.w3.org/2000/svg">
  <circle cx="48" cy="48" r="44" fill="#f6ae2d" stroke="#420909" stroke-width="2"/>
  <path d="M 20 48 Q 34 34 48 34 Q 62 34 76 48 Q 62 62 48 62 Q 34 62 20 48"
        fill="#420909" stroke="#f6ae2d" stroke-width="1.5"/>
  <circle cx="48" cy="48" r="12" fill="#f6ae2d"/>
  <circle cx="48" cy="48" r="7" fill="#420909"/>
  <circle cx="45" cy="45" r="2.5" fill="#ffffff"/>
  <text x="48" y="86" font-family="sans-serif" font-size="14" font-weight="bold"
        text-anchor="middle" fill="#420909">TrueEye</text>
</svg>"##;

/// Whether the embedded UI is available, reported by the health check.
pub fn assets_present() -> bool {
    Assets::get("index.html").is_some()
}

/// Serve the main page from embedded assets
pub async fn serve_index() -> Response {
    match Assets::get("index.html") {
        Some(content) => Html(content.data).into_response(),
        None => (StatusCode::NOT_FOUND, "index.html not found").into_response(),
    }
}

/// Serve embedded assets under `/static/`, with an SVG fallback for the logo
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches("/static/");

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None if path == "te.png" => (
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            FALLBACK_LOGO_SVG,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_embedded() {
        assert!(assets_present());
    }

    #[tokio::test]
    async fn test_logo_fallback_is_svg() {
        let response = serve_static("/static/te.png".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        // Either the real PNG is embedded or the SVG fallback answers
        assert!(content_type == "image/png" || content_type == "image/svg+xml");
    }

    #[tokio::test]
    async fn test_unknown_asset_is_404() {
        let response = serve_static("/static/missing.css".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
