use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::client::SheetClient;
use crate::error::RosterError;
use crate::pages;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SheetClient>,
}

/// Full application: JSON API under `/api`, HTML pages everywhere else.
pub fn router(client: SheetClient) -> Router {
    let state = AppState {
        client: Arc::new(client),
    };

    let api: Router<AppState> = Router::new()
        .route("/api/team", get(team_handler))
        .route("/api/team/taken", get(taken_handler))
        .route("/api/submit", post(submit_handler))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(pages::home::home))
        .route("/submit", get(pages::submit::submit_page))
        .route("/fragments/roster", get(pages::roster::roster_fragment))
        .merge(api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub(crate) fn log_error(e: &RosterError) {
    match e {
        RosterError::UpstreamError { message, detail } => {
            error!(%message, %detail, "sheet request failed");
        }
        RosterError::NotConfigured => error!("{e}"),
        _ => {}
    }
}

fn error_response(e: RosterError) -> Response {
    log_error(&e);
    (e.status(), Json(json!({ "error": e.to_string() }))).into_response()
}

async fn team_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.client.fetch_roster().await {
        Ok(roster) => (StatusCode::OK, Json(roster)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn taken_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.client.fetch_roster().await {
        Ok(roster) => (StatusCode::OK, Json(roster.taken_numbers())).into_response(),
        Err(e) => error_response(e),
    }
}

async fn submit_handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match state.client.submit(&body).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(e) => error_response(e),
    }
}
