use crate::errors::Result;
use crate::metrics::VIEWERS;
use crate::model::DashboardView;
use crate::page;
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{error, info};

const KEEP_ALIVE_SECS: u64 = 15;

#[derive(Debug, Clone)]
struct AppState {
    views: watch::Receiver<Arc<DashboardView>>,
}

pub fn create_router(views: watch::Receiver<Arc<DashboardView>>) -> Router {
    let state = AppState { views };

    Router::new()
        .route("/", get(page::dashboard))
        .route("/api/v1/dashboard", get(get_dashboard))
        .route("/api/v1/stream", get(stream_dashboard))
        .with_state(state)
}

async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let view = state.views.borrow().as_ref().clone();
    Json(view)
}

/// Pushes the current view on connect, then one event per tick
async fn stream_dashboard(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event>>> {
    let viewer = Viewer::connect();
    let stream = WatchStream::new(state.views).map(move |view| viewer.event(&view));

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(KEEP_ALIVE_SECS))
            .text("keep-alive"),
    )
}

/// Live stream subscriber, tracked in the viewers gauge for as long as the
/// stream is alive
struct Viewer;

impl Viewer {
    fn connect() -> Self {
        VIEWERS.inc();
        info!("Viewer connected ({} open)", VIEWERS.get());
        Self
    }

    fn event(&self, view: &DashboardView) -> Result<Event> {
        let data = serde_json::to_string(view)?;
        Ok(Event::default().event("dashboard").data(data))
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        VIEWERS.dec();
        info!("Viewer disconnected ({} open)", VIEWERS.get());
    }
}

pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("API error: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal server error: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
