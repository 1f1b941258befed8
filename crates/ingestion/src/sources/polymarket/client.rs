use super::models::GammaEvent;
use crate::error::Result;

pub struct GammaClient {
    base_url: String,
    client: reqwest::Client,
}

impl GammaClient {
    pub fn new() -> Self {
        Self {
            base_url: "https://gamma-api.polymarket.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Active events for a slug, e.g. `oscars-2026-best-picture-winner`.
    /// Each event carries one market per nominee.
    pub async fn fetch_events(&self, slug: &str) -> Result<Vec<GammaEvent>> {
        let url = format!("{}/events?slug={}&active=true", self.base_url, slug);

        let response = self.client.get(&url).send().await?;
        let events = response.error_for_status()?.json::<Vec<GammaEvent>>().await?;

        Ok(events)
    }
}

impl Default for GammaClient {
    fn default() -> Self {
        Self::new()
    }
}
