use sqlx::PgPool;
use sqlx::postgres::PgListener;
use tokio::sync::broadcast;

use crate::error::Result;

const CHANNEL_CAPACITY: usize = 64;

/// The three mutable collections observers can watch. Each maps to a
/// dedicated Postgres notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Picks,
    Settings,
    Odds,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Picks => "picks",
            Self::Settings => "settings",
            Self::Odds => "odds",
        }
    }

    /// Postgres `NOTIFY` channel raised by the statement-level triggers.
    pub fn channel(&self) -> &'static str {
        match self {
            Self::Picks => "picks_changed",
            Self::Settings => "settings_changed",
            Self::Odds => "odds_changed",
        }
    }

    pub fn all() -> &'static [Collection] {
        &[Self::Picks, Self::Settings, Self::Odds]
    }

    fn from_channel(channel: &str) -> Option<Collection> {
        Self::all().iter().copied().find(|c| c.channel() == channel)
    }
}

/// Fan-out of store change notifications, one broadcast channel per
/// collection. Events are bare signals delivered at least once and carry no
/// payload or cross-collection ordering; subscribers re-read the collection
/// rather than applying deltas, so a lagged or dropped event costs at most
/// one extra fetch.
#[derive(Clone)]
pub struct ChangeFeed {
    picks: broadcast::Sender<Collection>,
    settings: broadcast::Sender<Collection>,
    odds: broadcast::Sender<Collection>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (picks, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (settings, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (odds, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            picks,
            settings,
            odds,
        }
    }

    pub fn subscribe(&self, collection: Collection) -> broadcast::Receiver<Collection> {
        self.sender(collection).subscribe()
    }

    /// A send with no subscribers is not an error; nobody is watching yet.
    pub fn publish(&self, collection: Collection) {
        let _ = self.sender(collection).send(collection);
    }

    /// Bridges Postgres notifications into the broadcast channels. Runs
    /// until the listener connection fails; the caller decides whether to
    /// restart it.
    pub async fn run(&self, pool: &PgPool) -> Result<()> {
        let mut listener = PgListener::connect_with(pool).await?;
        let channels: Vec<&str> = Collection::all().iter().map(|c| c.channel()).collect();
        listener.listen_all(channels).await?;

        loop {
            let notification = listener.recv().await?;
            if let Some(collection) = Collection::from_channel(notification.channel()) {
                self.publish(collection);
            }
        }
    }

    fn sender(&self, collection: Collection) -> &broadcast::Sender<Collection> {
        match collection {
            Collection::Picks => &self.picks,
            Collection::Settings => &self.settings,
            Collection::Odds => &self.odds,
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_round_trip() {
        for collection in Collection::all() {
            assert_eq!(
                Collection::from_channel(collection.channel()),
                Some(*collection)
            );
        }
        assert_eq!(Collection::from_channel("unrelated"), None);
    }

    #[tokio::test]
    async fn subscribers_receive_published_changes() {
        let feed = ChangeFeed::new();
        let mut rx = feed.subscribe(Collection::Picks);

        feed.publish(Collection::Picks);

        assert_eq!(rx.recv().await.unwrap(), Collection::Picks);
    }

    #[tokio::test]
    async fn channels_are_scoped_per_collection() {
        let feed = ChangeFeed::new();
        let mut picks = feed.subscribe(Collection::Picks);
        let mut odds = feed.subscribe(Collection::Odds);

        feed.publish(Collection::Odds);

        assert_eq!(odds.recv().await.unwrap(), Collection::Odds);
        assert!(picks.try_recv().is_err());
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_harmless() {
        let feed = ChangeFeed::new();
        feed.publish(Collection::Settings);

        let mut rx = feed.subscribe(Collection::Settings);
        feed.publish(Collection::Settings);
        assert_eq!(rx.recv().await.unwrap(), Collection::Settings);
    }
}
