use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestionError>;

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("No active market found for slug '{0}'")]
    MarketNotFound(String),
}
