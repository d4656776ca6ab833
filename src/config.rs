use anyhow::{Context, Result};

use crate::codegen::DEFAULT_CODE_LENGTH;

/// Longest short code we are willing to generate.
const MAX_CODE_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string, e.g. "sqlite:./url_shortener.db"
    pub database_url: String,

    /// Upper bound on pooled SQLite connections
    pub max_connections: u32,

    /// Host to bind the HTTP server to, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public base URL used when building short links, e.g. "https://go.example.com".
    /// Never has a trailing slash. When unset the request's Host header is used.
    pub base_url: Option<String>,

    /// Number of characters in a generated short code
    pub code_length: usize,

    /// How many candidate codes to try before giving up on a create
    pub code_attempts: u32,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "5000".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (0–65535)")?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".into())
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        if max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let code_length = match lookup("SHORT_CODE_LENGTH") {
            Some(raw) => raw
                .parse::<usize>()
                .context("SHORT_CODE_LENGTH must be a positive integer")?,
            None => DEFAULT_CODE_LENGTH,
        };
        if !(1..=MAX_CODE_LENGTH).contains(&code_length) {
            anyhow::bail!("SHORT_CODE_LENGTH must be between 1 and {MAX_CODE_LENGTH}");
        }

        let code_attempts = lookup("SHORT_CODE_ATTEMPTS")
            .unwrap_or_else(|| "5".into())
            .parse::<u32>()
            .context("SHORT_CODE_ATTEMPTS must be a positive integer")?;
        if code_attempts == 0 {
            anyhow::bail!("SHORT_CODE_ATTEMPTS must be at least 1");
        }

        let base_url = lookup("BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty());

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:./url_shortener.db".into()),
            max_connections,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            base_url,
            code_length,
            code_attempts,
        })
    }
}
