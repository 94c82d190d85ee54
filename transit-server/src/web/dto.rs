//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::RouteType;
use crate::planner::{NetworkSummary, PlanOutcome, ResolveMode};

/// Query for `GET /plan`.
#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    /// Origin stop name
    pub from: Option<String>,

    /// Destination stop name
    pub to: Option<String>,

    /// `graph` (default) or `links`
    pub mode: Option<String>,

    /// Comma-separated route types (codes or names)
    pub types: Option<String>,
}

/// Query for `GET /routes`.
#[derive(Debug, Default, Deserialize)]
pub struct RoutesQuery {
    /// Comma-separated route types (codes or names)
    pub types: Option<String>,
}

/// Response for `GET /plan`.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub from: String,
    pub to: String,
    pub mode: ResolveMode,

    /// `status` plus, when found, `lines`
    #[serde(flatten)]
    pub outcome: PlanOutcome,

    /// Human-readable outcome
    pub message: String,
}

impl PlanResponse {
    pub fn new(from: String, to: String, mode: ResolveMode, outcome: PlanOutcome) -> Self {
        let message = outcome.message();
        Self {
            from,
            to,
            mode,
            outcome,
            message,
        }
    }
}

/// Response for `GET /routes`.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Route types the summary covers
    pub route_types: Vec<String>,

    #[serde(flatten)]
    pub summary: NetworkSummary,
}

impl RoutesResponse {
    pub fn new(types: &[RouteType], summary: NetworkSummary) -> Self {
        Self {
            route_types: types.iter().map(|t| t.as_str().to_string()).collect(),
            summary,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, TravelPlan};
    use serde_json::json;

    #[test]
    fn plan_response_found() {
        let outcome = PlanOutcome::Found {
            lines: TravelPlan::from_path(vec!["Red Line".into(), "Green Line D".into()]),
        };
        let response = PlanResponse::new(
            "Ashmont".into(),
            "Arlington".into(),
            ResolveMode::Links,
            outcome,
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "from": "Ashmont",
                "to": "Arlington",
                "mode": "links",
                "status": "found",
                "lines": ["Red Line", "Green Line D"],
                "message": "Rail Route: Red Line => Green Line D",
            })
        );
    }

    #[test]
    fn plan_response_no_route() {
        let response = PlanResponse::new(
            "A".into(),
            "Z".into(),
            ResolveMode::Graph,
            PlanOutcome::NoRouteFound { stop: "Z".into() },
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "no_route_found");
        assert_eq!(value["stop"], "Z");
        assert!(value.get("lines").is_none());
    }

    #[test]
    fn routes_response_flattens_summary() {
        let routes = vec![
            Route::from_stops("R1", "R1", &["A", "B", "C"]),
            Route::from_stops("R2", "R2", &["C", "D"]),
        ];
        let response = RoutesResponse::new(
            &[RouteType::HeavyRail],
            NetworkSummary::from_routes(&routes),
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["route_types"], json!(["heavy_rail"]));
        assert_eq!(value["routes"], json!(["R1", "R2"]));
        assert_eq!(value["longest"], json!({"name": "R1", "stops": 3}));
        assert_eq!(value["interchanges"], json!([{"stop": "C", "routes": ["R1", "R2"]}]));
    }

    #[test]
    fn plan_query_fields_are_optional() {
        let query: PlanQuery = serde_json::from_value(json!({"from": "Alewife"})).unwrap();
        assert_eq!(query.from.as_deref(), Some("Alewife"));
        assert!(query.to.is_none());
        assert!(query.mode.is_none());
    }
}
