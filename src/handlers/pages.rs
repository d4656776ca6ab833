use crate::{shortener, AppState};
use askama::Template;
use axum::{
    extract::{Form, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

// ── Template structs ───────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {}

#[derive(Template)]
#[template(path = "shortened.html")]
struct ShortenedTemplate {
    short_url: String,
}

// ── Form types ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ShortenForm {
    // A missing field is treated like an empty (and therefore invalid) URL.
    #[serde(default)]
    url: String,
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// GET /
pub async fn index() -> Response {
    IndexTemplate {}.into_response()
}

/// POST /shorten
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Response {
    let mapping = match shortener::shorten(&state, &form.url).await {
        Ok(m) => m,
        Err(e) => return e.into_response(),
    };

    let short_url = format!("{}/{}", public_base(&state, &headers), mapping.short_code);
    ShortenedTemplate { short_url }.into_response()
}

// ── Private helpers ────────────────────────────────────────────────────────

/// Prefix for generated links: BASE_URL when configured, otherwise whatever
/// host the client used to reach us.
fn public_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.config.base_url {
        return base.clone();
    }

    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("http://{host}"),
        _ => format!("http://localhost:{}", state.config.port),
    }
}
