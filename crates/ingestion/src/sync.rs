use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use storage::repository::odds::OddsRepository;

use crate::aliases::NomineeAliases;
use crate::error::{IngestionError, Result};
use crate::sources::polymarket::{GammaClient, GammaMarket};

pub const DEFAULT_MARKET_SLUG: &str = "oscars-2026-best-picture-winner";

/// A market question successfully mapped onto a nominee.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedOdds {
    pub film: String,
    pub nominee_id: i32,
    pub odds: Decimal,
}

/// One applied upsert, echoed back to the caller of the sync trigger.
#[derive(Debug, Clone, Serialize)]
pub struct OddsUpdate {
    pub film: String,
    pub nominee_id: i32,
    pub odds: Decimal,
    pub percent: String,
}

impl From<&MatchedOdds> for OddsUpdate {
    fn from(matched: &MatchedOdds) -> Self {
        Self {
            film: matched.film.clone(),
            nominee_id: matched.nominee_id,
            odds: matched.odds,
            percent: format!("{:.1}%", matched.odds * Decimal::from(100)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MatchReport {
    pub matched: Vec<MatchedOdds>,
    /// Markets whose question matched no nominee alias.
    pub ignored: usize,
    /// Markets without a parseable "Yes" price.
    pub malformed: usize,
}

#[derive(Debug, Serialize)]
pub struct SyncReport {
    pub matched: usize,
    pub applied: Vec<OddsUpdate>,
    pub failed: usize,
    pub ignored: usize,
    pub malformed: usize,
}

/// Maps a batch of markets onto nominee odds. Deterministic over its input:
/// re-running on unchanged upstream data yields the same matches in the same
/// order. Per-market malformations are skipped, never failing the batch.
pub fn match_markets(markets: &[GammaMarket], aliases: &NomineeAliases) -> MatchReport {
    let mut report = MatchReport::default();

    for market in markets {
        let question = market.question.as_deref().unwrap_or("");

        let Some(price) = market.yes_price() else {
            tracing::warn!("Skipping market '{}': no parseable yes price", question);
            report.malformed += 1;
            continue;
        };

        match aliases.match_question(question) {
            Some((film, nominee_id)) => report.matched.push(MatchedOdds {
                film: film.to_string(),
                nominee_id,
                odds: price,
            }),
            None => {
                tracing::debug!("No nominee alias matched '{}'", question);
                report.ignored += 1;
            }
        }
    }

    report
}

pub struct OddsSync<'a> {
    pool: &'a PgPool,
    aliases: NomineeAliases,
}

impl<'a> OddsSync<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            aliases: NomineeAliases::best_picture_2026(),
        }
    }

    pub fn with_aliases(pool: &'a PgPool, aliases: NomineeAliases) -> Self {
        Self { pool, aliases }
    }

    /// Fetches the event for `slug` and applies every matched price as an
    /// independent upsert. A failed upsert is logged and skipped so one bad
    /// record never aborts the rest of the batch.
    pub async fn run(&self, client: &GammaClient, slug: &str) -> Result<SyncReport> {
        let events = client.fetch_events(slug).await?;

        let Some(event) = events.into_iter().next() else {
            return Err(IngestionError::MarketNotFound(slug.to_string()));
        };

        tracing::info!(
            "Matching {} markets from '{}' against {} aliases",
            event.markets.len(),
            slug,
            self.aliases.len()
        );
        let matches = match_markets(&event.markets, &self.aliases);

        let repo = OddsRepository::new(self.pool);
        let mut applied = Vec::with_capacity(matches.matched.len());
        let mut failed = 0usize;

        for matched in &matches.matched {
            match repo.set_odds(matched.nominee_id, matched.odds).await {
                Ok(()) => applied.push(OddsUpdate::from(matched)),
                Err(e) => {
                    failed += 1;
                    tracing::error!(
                        "Failed to update odds for nominee {}: {}",
                        matched.nominee_id,
                        e
                    );
                }
            }
        }

        Ok(SyncReport {
            matched: matches.matched.len(),
            applied,
            failed,
            ignored: matches.ignored,
            malformed: matches.malformed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(question: &str, outcomes: &str, prices: &str) -> GammaMarket {
        GammaMarket {
            question: Some(question.to_string()),
            outcomes: Some(outcomes.to_string()),
            outcome_prices: Some(prices.to_string()),
        }
    }

    fn aliases() -> NomineeAliases {
        NomineeAliases::best_picture_2026()
    }

    #[test]
    fn matches_alias_and_reads_yes_price() {
        let markets = [market(
            "Will Sinners win Best Picture?",
            r#"["Yes", "No"]"#,
            r#"["0.04", "0.96"]"#,
        )];

        let report = match_markets(&markets, &aliases());

        assert_eq!(
            report.matched,
            vec![MatchedOdds {
                film: "sinners".to_string(),
                nominee_id: 3,
                odds: "0.04".parse().unwrap(),
            }]
        );
        assert_eq!(report.ignored, 0);
        assert_eq!(report.malformed, 0);
    }

    #[test]
    fn unmatched_markets_are_ignored_without_failing_the_batch() {
        let markets = [
            market(
                "Will Sinners win Best Picture?",
                r#"["Yes", "No"]"#,
                r#"["0.04", "0.96"]"#,
            ),
            market(
                "Will the ceremony run past midnight?",
                r#"["Yes", "No"]"#,
                r#"["0.70", "0.30"]"#,
            ),
        ];

        let report = match_markets(&markets, &aliases());

        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.ignored, 1);
    }

    #[test]
    fn markets_without_a_yes_outcome_are_skipped() {
        let markets = [market(
            "Will Hamnet win Best Picture?",
            r#"["Up", "Down"]"#,
            r#"["0.08", "0.92"]"#,
        )];

        let report = match_markets(&markets, &aliases());

        assert!(report.matched.is_empty());
        assert_eq!(report.malformed, 1);
    }

    #[test]
    fn unparseable_prices_are_skipped() {
        let markets = [
            market(
                "Will Hamnet win Best Picture?",
                r#"["Yes", "No"]"#,
                r#"["not-a-number", "0.92"]"#,
            ),
            market(
                "Will Bugonia win Best Picture?",
                r#"["Yes", "No"]"#,
                r#"["0.005", "0.995"]"#,
            ),
        ];

        let report = match_markets(&markets, &aliases());

        assert_eq!(report.malformed, 1);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].nominee_id, 8);
    }

    #[test]
    fn matching_is_idempotent_over_unchanged_input() {
        let markets = [
            market(
                "Will One Battle After Another win Best Picture?",
                r#"["Yes", "No"]"#,
                r#"["0.81", "0.19"]"#,
            ),
            market(
                "Will F1: The Movie win Best Picture?",
                r#"["Yes", "No"]"#,
                r#"["0.003", "0.997"]"#,
            ),
        ];

        let first = match_markets(&markets, &aliases());
        let second = match_markets(&markets, &aliases());

        assert_eq!(first.matched, second.matched);
        assert_eq!(first.matched.len(), 2);
    }

    #[test]
    fn update_percent_mirrors_the_price() {
        let matched = MatchedOdds {
            film: "sinners".to_string(),
            nominee_id: 3,
            odds: "0.04".parse().unwrap(),
        };

        let update = OddsUpdate::from(&matched);
        assert_eq!(update.percent, "4.0%");
    }
}
