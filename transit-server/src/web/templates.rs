//! Askama templates for the web frontend.

use askama::Template;

use crate::planner::{NetworkSummary, PlanOutcome, RouteSize};

/// Home page with the planning form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Result of a plan query.
#[derive(Template)]
#[template(path = "plan.html")]
pub struct PlanTemplate {
    pub from: String,
    pub to: String,
    pub mode: String,
    pub message: String,
    /// Lines to ride; empty unless a plan was found.
    pub lines: Vec<String>,
}

impl PlanTemplate {
    pub fn new(from: &str, to: &str, mode: &str, outcome: &PlanOutcome) -> Self {
        let lines = match outcome {
            PlanOutcome::Found { lines } => lines.lines().to_vec(),
            _ => Vec::new(),
        };
        Self {
            from: from.to_string(),
            to: to.to_string(),
            mode: mode.to_string(),
            message: outcome.message(),
            lines,
        }
    }

    /// Number of changes between lines.
    pub fn changes(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}

/// Network summary page.
#[derive(Template)]
#[template(path = "routes.html")]
pub struct RoutesTemplate {
    pub route_types: String,
    pub routes: Vec<String>,
    pub longest: String,
    pub shortest: String,
    pub interchanges: Vec<InterchangeView>,
}

/// Interchange view model for templates.
#[derive(Debug, Clone)]
pub struct InterchangeView {
    pub stop: String,
    pub routes: String,
}

impl RoutesTemplate {
    pub fn new(route_types: &str, summary: &NetworkSummary) -> Self {
        Self {
            route_types: route_types.to_string(),
            routes: summary.routes.clone(),
            longest: describe_size(summary.longest.as_ref()),
            shortest: describe_size(summary.shortest.as_ref()),
            interchanges: summary
                .interchanges
                .iter()
                .map(|i| InterchangeView {
                    stop: i.stop.clone(),
                    routes: i.routes.join(", "),
                })
                .collect(),
        }
    }
}

fn describe_size(size: Option<&RouteSize>) -> String {
    match size {
        Some(RouteSize { name, stops: 1 }) => format!("{name} (1 stop)"),
        Some(RouteSize { name, stops }) => format!("{name} ({stops} stops)"),
        None => "-".to_string(),
    }
}
