use storage::{ChangeFeed, Database};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub feed: ChangeFeed,
    pub market_slug: String,
}
