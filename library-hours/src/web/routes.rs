//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Utc;
use tracing::warn;

use crate::domain::LibraryIdentity;
use crate::widget::{TIMELINE_HOURS, Timeline, timeline};

use super::dto::*;
use super::state::AppState;
use super::templates::StatusPageTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/health", get(health))
        .route("/api/status", get(all_statuses))
        .route("/api/status/:library", get(library_status))
        .route("/api/widget/:library", get(widget_timeline))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Status page for every library.
async fn status_page(State(state): State<AppState>) -> impl IntoResponse {
    let view = state.board.current().await;
    Html(
        StatusPageTemplate::from(&view)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// JSON status for every library.
async fn all_statuses(State(state): State<AppState>) -> Json<StatusResponse> {
    let view = state.board.current().await;
    Json(StatusResponse::from(&view))
}

/// JSON status for one library.
async fn library_status(
    State(state): State<AppState>,
    Path(library): Path<String>,
) -> Result<Json<LibraryStatusResult>, AppError> {
    let library = parse_library(&library)?;
    let view = state.board.current().await;
    let index = view.snapshot.as_ref().map(|s| &s.index);

    Ok(Json(LibraryStatusResult::resolve(index, library)))
}

/// Hourly widget timeline for one library.
async fn widget_timeline(
    State(state): State<AppState>,
    Path(library): Path<String>,
) -> Result<Json<Timeline>, AppError> {
    let library = parse_library(&library)?;
    let view = state.board.current().await;
    let index = view.snapshot.map(|s| s.index).unwrap_or_default();

    Ok(Json(timeline(&index, library, Utc::now(), TIMELINE_HOURS)))
}

fn parse_library(raw: &str) -> Result<LibraryIdentity, AppError> {
    raw.parse::<LibraryIdentity>().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
