use crate::{config::AppConfig, models::CreateOutcome};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};

// ── Pool & schema ──────────────────────────────────────────────────────────

/// Open the SQLite pool described by `config`, creating the database file if
/// it doesn't exist yet.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = config
        .database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Run the embedded migrations (files in migrations/), creating the
/// `url_mapping` table when it is absent.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// ── Mappings ───────────────────────────────────────────────────────────────

/// Insert a new mapping. A taken `short_code` is reported as
/// [`CreateOutcome::Conflict`] straight from the primary-key constraint, so
/// two writers racing for the same code can never both succeed.
pub async fn create_mapping(
    pool: &SqlitePool,
    short_code: &str,
    original_url: &str,
) -> Result<CreateOutcome, sqlx::Error> {
    let result = sqlx::query("INSERT INTO url_mapping (short_url, original_url) VALUES (?1, ?2)")
        .bind(short_code)
        .bind(original_url)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(CreateOutcome::Created),
        Err(e) if is_unique_violation(&e) => Ok(CreateOutcome::Conflict),
        Err(e) => Err(e),
    }
}

/// Fetch the original URL stored under `short_code`.
pub async fn resolve(pool: &SqlitePool, short_code: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT original_url FROM url_mapping WHERE short_url = ?1")
        .bind(short_code)
        .fetch_optional(pool)
        .await
}

/// Total number of stored mappings.
pub async fn count_mappings(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mapping")
        .fetch_one(pool)
        .await
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
        || db_err
            .code()
            // SQLITE_CONSTRAINT_PRIMARYKEY / SQLITE_CONSTRAINT_UNIQUE
            .is_some_and(|code| matches!(&*code, "1555" | "2067"))
}
