//! In-memory transit sources for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::catalog::TransitSource;
use crate::domain::RouteId;
use crate::mbta::{DataFetchError, RouteAttributes, RouteResource};

/// Source backed by in-memory routes that counts stop fetches.
#[derive(Default)]
pub struct CountingSource {
    routes: Vec<RouteResource>,
    stops: HashMap<RouteId, Vec<String>>,
    stop_fetches: AtomicUsize,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route with its stops. Pass `None` for a route whose stop fetch
    /// fails.
    pub fn with_route(mut self, id: &str, code: u8, name: &str, stops: Option<&[&str]>) -> Self {
        self.routes.push(RouteResource {
            id: id.to_string(),
            attributes: RouteAttributes {
                route_type: code,
                long_name: Some(name.to_string()),
                short_name: None,
                description: None,
            },
        });
        if let Some(stops) = stops {
            self.stops.insert(
                RouteId::new(id),
                stops.iter().map(|s| (*s).to_string()).collect(),
            );
        }
        self
    }

    /// R1 = [A, B, C] and R2 = [C, D, E], both heavy rail.
    pub fn two_lines() -> Self {
        Self::new()
            .with_route("R1", 1, "R1", Some(&["A", "B", "C"]))
            .with_route("R2", 1, "R2", Some(&["C", "D", "E"]))
    }

    pub fn stop_fetches(&self) -> usize {
        self.stop_fetches.load(Ordering::SeqCst)
    }
}

impl TransitSource for CountingSource {
    async fn fetch_routes(&self) -> Result<Vec<RouteResource>, DataFetchError> {
        Ok(self.routes.clone())
    }

    async fn fetch_stops(&self, route_id: &RouteId) -> Result<Vec<String>, DataFetchError> {
        self.stop_fetches.fetch_add(1, Ordering::SeqCst);
        self.stops
            .get(route_id)
            .cloned()
            .ok_or_else(|| DataFetchError::Api {
                status: 404,
                message: format!("no stops for {route_id}"),
            })
    }
}

/// Source whose every request fails.
pub struct FailingSource;

impl TransitSource for FailingSource {
    async fn fetch_routes(&self) -> Result<Vec<RouteResource>, DataFetchError> {
        Err(DataFetchError::Api {
            status: 503,
            message: "unavailable".to_string(),
        })
    }

    async fn fetch_stops(&self, _route_id: &RouteId) -> Result<Vec<String>, DataFetchError> {
        Err(DataFetchError::Api {
            status: 503,
            message: "unavailable".to_string(),
        })
    }
}
