//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::filter::{FilterSelection, build_query};
use crate::search::{Notification, PageView, Settled};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", post(search))
        .route("/results", get(results_page))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the filter form.
///
/// Rendered through the `askama_axum` response integration.
async fn index_page() -> IndexTemplate {
    IndexTemplate::new()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Render the results fragment or its JSON equivalent.
fn render_page(
    headers: &HeaderMap,
    page: PageView,
    notification: Option<Notification>,
    stale: bool,
) -> Result<Response, AppError> {
    if accepts_html(headers) {
        let html = ResultsTemplate::new(&page, notification.as_ref())
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(SearchResponse {
            notification,
            stale,
            page,
        })
        .into_response())
    }
}

/// Run a search for the submitted filter selection.
async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let selection: FilterSelection = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid search body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let payload = build_query(&selection);
    let settled = state.orchestrator.run_search(&payload).await;
    let page = state.orchestrator.page_view().await;

    let stale = settled == Settled::Stale;
    render_page(&headers, page, settled.notification().cloned(), stale)
}

/// Show a page of the current results.
async fn results_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<PageRequest>,
) -> Result<Response, AppError> {
    let nav = req
        .to_nav()
        .map_err(|message| AppError::BadRequest { message })?;

    let page = match nav {
        Some(nav) => state.orchestrator.navigate(nav).await,
        None => state.orchestrator.page_view().await,
    };

    render_page(&headers, page, None, false)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
