use crate::{error::AppError, shortener, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /:code
///
/// Resolve the short code and answer with a 302 to the original URL. Unknown
/// codes get a 404 with `URL not found`.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let original_url = shortener::resolve(&state, &code).await?;
    let location = location_header(&original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// Build the `Location` value for a stored URL.
///
/// Stored URLs may carry control or non-ASCII characters in the path and
/// query, which a header cannot hold as-is. Those are sent percent-encoded
/// (via the WHATWG serializer); everything else goes out byte for byte.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    let encoded = url::Url::parse(original_url)
        .map_err(|_| AppError::Unredirectable(original_url.to_owned()))?;

    HeaderValue::from_str(encoded.as_str())
        .map_err(|_| AppError::Unredirectable(original_url.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_urls_pass_through_unchanged() {
        let value = location_header("HTTPS://Example.com/Page?q=1").unwrap();
        assert_eq!(value, "HTTPS://Example.com/Page?q=1");
    }

    #[test]
    fn control_characters_are_percent_encoded() {
        let value = location_header("http://example.com/a\u{1}b").unwrap();
        assert_eq!(value, "http://example.com/a%01b");

        let value = location_header("http://example.com/x?y=\u{7f}").unwrap();
        assert_eq!(value, "http://example.com/x?y=%7F");
    }

    #[test]
    fn non_ascii_is_percent_encoded() {
        let value = location_header("http://example.com/café").unwrap();
        assert_eq!(value, "http://example.com/caf%C3%A9");
    }

    #[test]
    fn unparseable_and_unsendable_is_an_error() {
        let err = location_header("http://[zz\u{1}").unwrap_err();
        assert!(matches!(err, AppError::Unredirectable(_)));
    }
}
