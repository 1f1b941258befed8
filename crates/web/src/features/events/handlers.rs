use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use storage::Collection;
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};

use crate::state::AppState;

/// Live change stream. Each event names the collection that changed
/// (`picks`, `settings` or `odds`) and carries no payload: clients re-fetch
/// the collection instead of applying deltas, so missed or reordered events
/// cannot make them diverge. A subscriber that lags simply drops signals and
/// catches up on the next one.
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Server-sent events; one signal per store mutation, named after the changed collection")
    ),
    tag = "events"
)]
pub async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let feed = &state.feed;

    let stream = BroadcastStream::new(feed.subscribe(Collection::Picks))
        .merge(BroadcastStream::new(feed.subscribe(Collection::Settings)))
        .merge(BroadcastStream::new(feed.subscribe(Collection::Odds)))
        .filter_map(|change| change.ok())
        .map(|collection| Ok(Event::default().event(collection.as_str()).data("changed")));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
