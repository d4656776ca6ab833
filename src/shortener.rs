use sqlx::SqlitePool;

use crate::{
    codegen, db,
    error::AppError,
    models::{CreateOutcome, Mapping},
    validate, AppState,
};

/// Validate `url` and store it under a freshly generated short code.
pub async fn shorten(state: &AppState, url: &str) -> Result<Mapping, AppError> {
    let length = state.config.code_length;
    shorten_with(&state.db, url, state.config.code_attempts, || {
        codegen::random_code(length)
    })
    .await
}

/// The create loop behind [`shorten`], drawing candidates from `next_code`.
///
/// Each candidate is inserted directly; the primary-key constraint decides who
/// wins a collision and the loser simply tries the next candidate. After
/// `attempts` conflicts in a row the create fails with
/// [`AppError::CodeSpaceExhausted`]. Invalid URLs never reach the database.
pub async fn shorten_with(
    pool: &SqlitePool,
    url: &str,
    attempts: u32,
    mut next_code: impl FnMut() -> String,
) -> Result<Mapping, AppError> {
    if !validate::is_valid_url(url) {
        return Err(AppError::InvalidUrl);
    }

    for attempt in 1..=attempts {
        let code = next_code();
        match db::create_mapping(pool, &code, url).await? {
            CreateOutcome::Created => {
                tracing::info!("Created mapping {} -> {}", code, url);
                return Ok(Mapping {
                    short_code: code,
                    original_url: url.to_owned(),
                });
            }
            CreateOutcome::Conflict => {
                tracing::debug!("Short code '{}' already taken (attempt {})", code, attempt);
            }
        }
    }

    Err(AppError::CodeSpaceExhausted { attempts })
}

/// Find the original URL stored under `code`.
pub async fn resolve(state: &AppState, code: &str) -> Result<String, AppError> {
    db::resolve(&state.db, code).await?.ok_or(AppError::NotFound)
}
