use anyhow::{Context, Result};

const DEFAULT_MARKET_SLUG: &str = ingestion::DEFAULT_MARKET_SLUG;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated shared secrets gating the operator endpoints.
    pub operator_keys: String,
    /// Polymarket event slug the odds sync pulls from.
    pub market_slug: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            operator_keys: std::env::var("OPERATOR_KEYS").unwrap_or_default(),
            market_slug: std::env::var("MARKET_SLUG")
                .unwrap_or_else(|_| DEFAULT_MARKET_SLUG.to_string()),
        })
    }
}
