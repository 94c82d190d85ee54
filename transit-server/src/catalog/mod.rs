//! Route and stop catalogs.
//!
//! The catalogs sit between the planner and a [`TransitSource`]. Both turn
//! fetch failures into "no data" after logging them, so a flaky data source
//! degrades a query instead of failing it.

mod routes;
mod stops;

use std::future::Future;

pub use routes::RouteCatalog;
pub use stops::{CatalogConfig, StopCatalog};

use crate::domain::RouteId;
use crate::mbta::{DataFetchError, MbtaClient, MockMbtaClient, RouteResource};

/// Read-only source of routes and stops.
///
/// This abstraction allows the planner to run against the live API, the
/// offline mock, or test doubles.
pub trait TransitSource: Send + Sync {
    /// All routes, of every type.
    fn fetch_routes(
        &self,
    ) -> impl Future<Output = Result<Vec<RouteResource>, DataFetchError>> + Send;

    /// Stop names of a route, in line order.
    fn fetch_stops(
        &self,
        route_id: &RouteId,
    ) -> impl Future<Output = Result<Vec<String>, DataFetchError>> + Send;
}

impl TransitSource for MbtaClient {
    fn fetch_routes(
        &self,
    ) -> impl Future<Output = Result<Vec<RouteResource>, DataFetchError>> + Send {
        MbtaClient::fetch_routes(self)
    }

    fn fetch_stops(
        &self,
        route_id: &RouteId,
    ) -> impl Future<Output = Result<Vec<String>, DataFetchError>> + Send {
        MbtaClient::fetch_stops(self, route_id)
    }
}

impl TransitSource for MockMbtaClient {
    fn fetch_routes(
        &self,
    ) -> impl Future<Output = Result<Vec<RouteResource>, DataFetchError>> + Send {
        MockMbtaClient::fetch_routes(self)
    }

    fn fetch_stops(
        &self,
        route_id: &RouteId,
    ) -> impl Future<Output = Result<Vec<String>, DataFetchError>> + Send {
        MockMbtaClient::fetch_stops(self, route_id)
    }
}
