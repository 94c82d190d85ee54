//! A loaded network: routes with their stops and the graph built from them.

use crate::domain::{PlanError, Route, TravelPlan};
use crate::graph::ConnectivityGraph;

use super::config::ResolveMode;
use super::dfs::resolve_path;
use super::links::{RouteLinks, resolve_links};
use super::summary::{NetworkSummary, find_interchanges};

/// Routes of one query and their connectivity graph.
///
/// Built fresh for every query and dropped afterwards; only the stop lists
/// behind it are cached.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    routes: Vec<Route>,
    graph: ConnectivityGraph,
}

impl TransitNetwork {
    /// Build the network from routes in catalog order.
    pub fn new(routes: Vec<Route>) -> Self {
        let graph = ConnectivityGraph::build(&routes);
        Self { routes, graph }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn graph(&self) -> &ConnectivityGraph {
        &self.graph
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a stop pair with the given mode.
    pub fn resolve(
        &self,
        from: &str,
        to: &str,
        mode: ResolveMode,
    ) -> Result<TravelPlan, PlanError> {
        match mode {
            ResolveMode::Graph => self.find_route(from, to),
            ResolveMode::Links => self.resolve_by_links(from, to),
        }
    }

    /// Lines to ride found by depth-first search over the stop graph.
    pub fn find_route(&self, from: &str, to: &str) -> Result<TravelPlan, PlanError> {
        resolve_path(&self.graph, from, to)
    }

    /// Lines to ride found through route-level links (legacy mode).
    ///
    /// Each stop is assigned the first route in catalog order that serves
    /// it; the link resolver then connects those two lines.
    pub fn resolve_by_links(&self, from: &str, to: &str) -> Result<TravelPlan, PlanError> {
        let start = self
            .line_for_stop(from)
            .ok_or_else(|| PlanError::UnknownStop(from.to_string()))?;
        let end = self
            .line_for_stop(to)
            .ok_or_else(|| PlanError::UnknownStop(to.to_string()))?;

        if from == to {
            return Ok(TravelPlan::empty());
        }

        resolve_links(&self.route_links(), &start.name, &end.name)
    }

    /// First route (catalog order) that serves the stop.
    pub fn line_for_stop(&self, stop: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.serves(stop))
    }

    /// Route links derived from the interchange stops.
    pub fn route_links(&self) -> RouteLinks {
        RouteLinks::from_interchanges(&find_interchanges(&self.routes))
    }

    /// Diagnostic summary of the network.
    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary::from_routes(&self.routes)
    }
}
