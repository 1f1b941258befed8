pub mod aliases;
pub mod error;
pub mod sources;
pub mod sync;

pub use aliases::NomineeAliases;
pub use error::{IngestionError, Result};
pub use sources::polymarket::{GammaClient, GammaEvent, GammaMarket};
pub use sync::{DEFAULT_MARKET_SLUG, MatchReport, MatchedOdds, OddsSync, OddsUpdate, SyncReport, match_markets};
