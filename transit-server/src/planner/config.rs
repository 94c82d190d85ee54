//! Planner configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::RouteType;

/// How a start/end stop pair is resolved into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Depth-first search over the stop-level connectivity graph.
    #[default]
    Graph,

    /// Legacy route-level resolution through shared-stop links.
    Links,
}

impl ResolveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolveMode::Graph => "graph",
            ResolveMode::Links => "links",
        }
    }
}

impl FromStr for ResolveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graph" | "stops" => Ok(ResolveMode::Graph),
            "links" | "legacy" => Ok(ResolveMode::Links),
            other => Err(format!("unknown resolve mode {other:?}")),
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration parameters for the planner.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Route types loaded when a query does not name any.
    pub route_types: Vec<RouteType>,

    /// Maximum number of stop lists fetched in parallel.
    pub batch_size: usize,

    /// Resolve mode used when a query does not name one.
    pub default_mode: ResolveMode,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(route_types: Vec<RouteType>, batch_size: usize, default_mode: ResolveMode) -> Self {
        Self {
            route_types,
            batch_size,
            default_mode,
        }
    }

    /// Set the default route types.
    pub fn with_route_types(mut self, route_types: Vec<RouteType>) -> Self {
        self.route_types = route_types;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            route_types: RouteType::SUBWAY.to_vec(),
            batch_size: 8,
            default_mode: ResolveMode::Graph,
        }
    }
}
