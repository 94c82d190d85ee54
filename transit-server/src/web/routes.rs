//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::{debug, error, warn};

use crate::catalog::TransitSource;
use crate::domain::RouteType;
use crate::planner::{PlanOutcome, PlanRequest, ResolveMode};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router<S: TransitSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/routes", get(routes_summary::<S>))
        .route("/plan", get(plan_route::<S>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the planning form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse an optional route type list; absent or blank means `default`.
fn route_types(types: Option<&str>, default: &[RouteType]) -> Result<Vec<RouteType>, AppError> {
    match types.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(default.to_vec()),
        Some(types) => RouteType::parse_list(types).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        }),
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: format!("Missing required parameter: {name}"),
        })
}

/// Summarise the routes of the requested types.
async fn routes_summary<S: TransitSource + 'static>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Query(req): Query<RoutesQuery>,
) -> Result<Response, AppError> {
    let types = route_types(req.types.as_deref(), &state.planner.config().route_types)?;

    let network = state.planner.load_network(&types).await;
    let summary = network.summary();
    debug!(routes = summary.routes.len(), ?types, "Summarised network");

    if accepts_html(&headers) {
        let labels: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        let template = RoutesTemplate::new(&labels.join(", "), &summary);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(RoutesResponse::new(&types, summary)).into_response())
    }
}

/// Plan the lines to ride between two stops.
async fn plan_route<S: TransitSource + 'static>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Query(req): Query<PlanQuery>,
) -> Result<Response, AppError> {
    let from = required(req.from, "from")?;
    let to = required(req.to, "to")?;

    let mode = match req.mode.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        None => state.planner.config().default_mode,
        Some(mode) => mode
            .parse::<ResolveMode>()
            .map_err(|message| AppError::BadRequest { message })?,
    };
    let types = route_types(req.types.as_deref(), &state.planner.config().route_types)?;

    let request = PlanRequest::new(from, to)
        .with_mode(mode)
        .with_route_types(types);
    let outcome = PlanOutcome::from_result(state.planner.plan(&request).await);

    if accepts_html(&headers) {
        let template = PlanTemplate::new(&request.from, &request.to, mode.as_str(), &outcome);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
        Ok(Html(html).into_response())
    } else {
        let response = PlanResponse::new(request.from, request.to, mode, outcome);
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "Bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
