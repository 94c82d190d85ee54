//! Query entry point: load a network from the catalogs and resolve a stop pair.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogConfig, RouteCatalog, StopCatalog, TransitSource};
use crate::domain::{PlanError, Route, RouteSummary, RouteType, TravelPlan};

use super::config::{PlannerConfig, ResolveMode};
use super::network::TransitNetwork;

/// A start/end stop query.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub from: String,
    pub to: String,
    pub mode: ResolveMode,
    /// Route types to load; empty means the configured default.
    pub route_types: Vec<RouteType>,
}

impl PlanRequest {
    /// Create a graph-mode request over the default route types.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            mode: ResolveMode::default(),
            route_types: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_route_types(mut self, route_types: Vec<RouteType>) -> Self {
        self.route_types = route_types;
        self
    }
}

/// How a query ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// Lines to ride, in order.
    Found { lines: TravelPlan },
    /// Origin and destination are the same stop.
    AlreadyThere,
    /// A stop is not on any loaded route.
    NoRouteFound { stop: String },
    /// Both stops are known but nothing connects them.
    TransitNotPossible,
}

impl PlanOutcome {
    pub fn from_result(result: Result<TravelPlan, PlanError>) -> Self {
        match result {
            Ok(plan) if plan.is_empty() => PlanOutcome::AlreadyThere,
            Ok(plan) => PlanOutcome::Found { lines: plan },
            Err(PlanError::UnknownStop(stop)) => PlanOutcome::NoRouteFound { stop },
            Err(PlanError::NoPathFound { .. }) => PlanOutcome::TransitNotPossible,
        }
    }

    /// One-line human-readable description.
    pub fn message(&self) -> String {
        match self {
            PlanOutcome::Found { lines } => format!("Rail Route: {lines}"),
            PlanOutcome::AlreadyThere => "Already there: no lines needed.".to_string(),
            PlanOutcome::NoRouteFound { stop } => {
                format!("No rail route found between the stops (unknown stop {stop:?}).")
            }
            PlanOutcome::TransitNotPossible => "Transit not possible.".to_string(),
        }
    }
}

/// Transit planner over a data source.
///
/// Holds the catalogs (and with them the stop cache) for the lifetime of the
/// process; every query builds its own [`TransitNetwork`].
pub struct TransitPlanner<S> {
    routes: RouteCatalog<S>,
    stops: StopCatalog<S>,
    config: PlannerConfig,
}

impl<S: TransitSource> TransitPlanner<S> {
    /// Create a new planner.
    pub fn new(source: Arc<S>, catalog_config: &CatalogConfig, config: PlannerConfig) -> Self {
        Self {
            routes: RouteCatalog::new(source.clone()),
            stops: StopCatalog::new(source, catalog_config),
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Load routes of the given types with their stops.
    ///
    /// An empty `types` uses the configured default. Routes whose stops
    /// cannot be fetched are left out. If the route list itself cannot be
    /// fetched the network is empty.
    pub async fn load_network(&self, types: &[RouteType]) -> TransitNetwork {
        let types = if types.is_empty() {
            self.config.route_types.as_slice()
        } else {
            types
        };

        let Some(summaries) = self.routes.get_routes(types).await else {
            warn!(?types, "No routes of the requested type");
            return TransitNetwork::default();
        };

        let routes = self.attach_stops(summaries).await;
        let network = TransitNetwork::new(routes);

        debug!(
            routes = network.routes().len(),
            stops = network.graph().stop_count(),
            edges = network.graph().edge_count(),
            "Network loaded"
        );

        network
    }

    /// Load a network and resolve the request against it.
    pub async fn plan(&self, request: &PlanRequest) -> Result<TravelPlan, PlanError> {
        let network = self.load_network(&request.route_types).await;
        let result = network.resolve(&request.from, &request.to, request.mode);

        match &result {
            Ok(plan) => info!(
                from = %request.from,
                to = %request.to,
                mode = %request.mode,
                plan = %plan,
                "Plan found"
            ),
            Err(e) => info!(
                from = %request.from,
                to = %request.to,
                mode = %request.mode,
                status = e.status(),
                reason = %e,
                "No plan"
            ),
        }

        result
    }

    /// Fetch stop lists for all routes in parallel batches, keeping catalog
    /// order.
    async fn attach_stops(&self, summaries: Vec<RouteSummary>) -> Vec<Route> {
        let mut routes = Vec::with_capacity(summaries.len());

        for batch in summaries.chunks(self.config.batch_size.max(1)) {
            let futures: Vec<_> = batch
                .iter()
                .map(|summary| async move {
                    let stops = self.stops.get_stops(&summary.id).await;
                    (summary, stops)
                })
                .collect();

            for (summary, stops) in join_all(futures).await {
                match stops {
                    Some(stops) => routes.push(Route::new(summary.clone(), stops)),
                    None => debug!(route = %summary.id, "Skipping route without stops"),
                }
            }
        }

        routes
    }
}
