use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::get,
    Extension, Json, Router,
};
use futures::Stream;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};

use finpulse_core::events::totals_topic;
use finpulse_core::totals::{FinancialTotals, TotalsServiceTrait};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

/// Pull endpoint: the authenticated user's totals, served from cache when
/// fresh.
async fn get_totals(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<FinancialTotals>> {
    let totals = state.totals_service.get_totals(&user.0).await?;
    Ok(Json(totals))
}

/// Push endpoint: streams the authenticated user's `totalsUpdated:<id>`
/// events over SSE. No replay; clients pull the current snapshot on connect.
async fn stream_totals(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let topic = totals_topic(&user.0);
    let receiver = BroadcastStream::new(state.event_bus.subscribe());
    let stream = tokio_stream::StreamExt::filter_map(receiver, move |event| match event {
        Ok(evt) if evt.topic == topic => {
            match SseEvent::default().event(evt.topic.clone()).json_data(&evt.payload) {
                Ok(sse_event) => Some(Ok(sse_event)),
                Err(err) => {
                    tracing::error!("Failed to serialize SSE payload for {}: {}", evt.topic, err);
                    None
                }
            }
        }
        Ok(_) => None,
        Err(BroadcastStreamRecvError::Lagged(_)) => None,
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/totals", get(get_totals))
        .route("/dashboard/stream", get(stream_totals))
}
