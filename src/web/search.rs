// Search actions
// The stream endpoint runs one search, records the reply in the session
// and reveals it as paced SSE chunks; a final "done" event lets the page
// close the connection instead of reconnecting

use std::convert::Infallible;

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Redirect;
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn stream(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let reply = state.search.search(&params.q).await?;
    info!(
        "Search returned {} lines for {:?}",
        reply.lines.len(),
        reply.query
    );

    {
        let mut session = state.session.lock().await;
        session.record_search(reply.clone());
    }

    let chunks = state
        .search
        .reveal(&reply)
        .map(|line| Ok(Event::default().data(line)));
    let done = stream::once(async { Ok(Event::default().event("done").data("")) });

    Ok(Sse::new(chunks.chain(done)).keep_alive(KeepAlive::default()))
}

pub async fn clear(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.clear_search();
    Redirect::to("/")
}
