use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GammaEvent {
    pub slug: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub markets: Vec<GammaMarket>,
}

/// One binary market inside an event. The Gamma API serialises `outcomes`
/// and `outcomePrices` as JSON-encoded arrays *inside* JSON strings, aligned
/// by index.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GammaMarket {
    pub question: Option<String>,
    pub outcomes: Option<String>,
    #[serde(rename = "outcomePrices")]
    pub outcome_prices: Option<String>,
}

impl GammaMarket {
    /// Price of the "Yes" outcome, which is the market's win probability.
    /// `None` when the nested arrays fail to decode, no case-insensitive
    /// "Yes" outcome exists, or the price does not parse as a decimal.
    pub fn yes_price(&self) -> Option<Decimal> {
        let outcomes: Vec<String> = serde_json::from_str(self.outcomes.as_deref()?).ok()?;
        let prices: Vec<String> = serde_json::from_str(self.outcome_prices.as_deref()?).ok()?;

        let yes = outcomes.iter().position(|o| o.eq_ignore_ascii_case("yes"))?;
        Decimal::from_str(prices.get(yes)?).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(outcomes: &str, prices: &str) -> GammaMarket {
        GammaMarket {
            question: Some("Will Sinners win Best Picture?".to_string()),
            outcomes: Some(outcomes.to_string()),
            outcome_prices: Some(prices.to_string()),
        }
    }

    #[test]
    fn reads_the_yes_price() {
        let market = market(r#"["Yes", "No"]"#, r#"["0.04", "0.96"]"#);
        assert_eq!(market.yes_price(), Some("0.04".parse().unwrap()));
    }

    #[test]
    fn yes_outcome_is_found_case_insensitively() {
        let market = market(r#"["YES", "NO"]"#, r#"["0.81", "0.19"]"#);
        assert_eq!(market.yes_price(), Some("0.81".parse().unwrap()));
    }

    #[test]
    fn missing_yes_outcome_yields_none() {
        let market = market(r#"["Up", "Down"]"#, r#"["0.5", "0.5"]"#);
        assert_eq!(market.yes_price(), None);
    }

    #[test]
    fn unparseable_price_yields_none() {
        let market = market(r#"["Yes", "No"]"#, r#"["n/a", "0.96"]"#);
        assert_eq!(market.yes_price(), None);
    }

    #[test]
    fn malformed_nested_json_yields_none() {
        let market = market("not json", r#"["0.04"]"#);
        assert_eq!(market.yes_price(), None);
    }

    #[test]
    fn absent_fields_yield_none() {
        let market = GammaMarket::default();
        assert_eq!(market.yes_price(), None);
    }
}
