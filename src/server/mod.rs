//! Dashboard HTTP API
//!
//! Routes:
//! - GET  /              - Dashboard page
//! - GET  /api/options   - Legislator and topic dropdown options
//! - GET  /api/session   - Default session and its full render
//! - POST /api/interact  - Apply one event to a client-held session

mod page;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::dashboard::{Dashboard, Event, Session, Update};
use crate::error::{DashboardError, DetailError, LayoutError};
use crate::graph::{SelectOption, TopicId};

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub legislators: Vec<SelectOption<String>>,
    pub topics: Vec<SelectOption<TopicId>>,
}

#[derive(Debug, Deserialize)]
pub struct InteractRequest {
    pub session: Session,
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct InteractResponse {
    pub session: Session,
    pub update: Update,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub initial_session: Session,
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(dashboard: Dashboard, initial_session: Session) -> Router {
    let state = AppState {
        dashboard: Arc::new(dashboard),
        initial_session,
    };

    Router::new()
        .route("/", get(index))
        .route("/api/options", get(options))
        .route("/api/session", get(session))
        .route("/api/interact", post(interact))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Handlers
// ============================================================================

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// GET /api/options
async fn options(State(state): State<AppState>) -> Result<Json<OptionsResponse>, ApiError> {
    let store = state.dashboard.store();
    let legislators = store.legislator_options().map_err(DashboardError::from)?;
    let topics = store.topic_options().map_err(DashboardError::from)?;
    Ok(Json(OptionsResponse {
        legislators,
        topics,
    }))
}

/// GET /api/session
async fn session(State(state): State<AppState>) -> Result<Json<InteractResponse>, ApiError> {
    let session = state.initial_session.clone();
    let update = state.dashboard.render(&session)?;
    Ok(Json(InteractResponse { session, update }))
}

/// POST /api/interact
async fn interact(
    State(state): State<AppState>,
    Json(request): Json<InteractRequest>,
) -> Result<Json<InteractResponse>, ApiError> {
    let InteractRequest { mut session, event } = request;
    let update = state.dashboard.handle(&mut session, event)?;
    Ok(Json(InteractResponse { session, update }))
}

// ============================================================================
// Errors
// ============================================================================

pub struct ApiError(DashboardError);

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DashboardError::Layout(LayoutError::FocalNodeNotFound(_))
            | DashboardError::Detail(DetailError::UnknownNode(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::warn!("Request rejected: {}", self.0);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use std::path::PathBuf;

    #[test]
    fn test_error_status_mapping() {
        let not_found = ApiError(LayoutError::FocalNodeNotFound("x".into()).into()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let unavailable = ApiError(
            GraphError::DataUnavailable {
                path: PathBuf::from("missing.json"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .into(),
        )
        .into_response();
        assert_eq!(unavailable.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_interact_request_json() {
        let request: InteractRequest = serde_json::from_str(
            r#"{
                "session": {"threshold": [0, 50], "legislators": "all", "topics": ["4"]},
                "event": {"type": "color_by_party", "on": false}
            }"#,
        )
        .unwrap();
        assert!(request.session.color_by_party);
        assert!(!request.session.dark_mode);
        assert_eq!(request.event, Event::ColorByParty { on: false });
    }
}
