//! Network summaries: route sizes and interchange stops.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Route;

/// A stop served by two or more routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interchange {
    pub stop: String,
    /// Route names serving the stop, in catalog order, each once.
    pub routes: Vec<String>,
}

/// A route name with its stop count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSize {
    pub name: String,
    pub stops: usize,
}

/// Diagnostic overview of a loaded network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    /// Route names in catalog order.
    pub routes: Vec<String>,
    /// Route with the most stops (first in catalog order on ties).
    pub longest: Option<RouteSize>,
    /// Route with the fewest stops (first in catalog order on ties).
    pub shortest: Option<RouteSize>,
    pub interchanges: Vec<Interchange>,
}

impl NetworkSummary {
    pub fn from_routes(routes: &[Route]) -> Self {
        let mut longest: Option<&Route> = None;
        let mut shortest: Option<&Route> = None;

        for route in routes {
            if longest.is_none_or(|l| route.stop_count() > l.stop_count()) {
                longest = Some(route);
            }
            if shortest.is_none_or(|s| route.stop_count() < s.stop_count()) {
                shortest = Some(route);
            }
        }

        let size = |r: &Route| RouteSize {
            name: r.name.clone(),
            stops: r.stop_count(),
        };

        Self {
            routes: routes.iter().map(|r| r.name.clone()).collect(),
            longest: longest.map(size),
            shortest: shortest.map(size),
            interchanges: find_interchanges(routes),
        }
    }
}

/// Stops served by more than one route.
///
/// Stops are listed in the order they are first seen walking the routes in
/// catalog order. A route that lists a stop twice is counted once.
pub fn find_interchanges(routes: &[Route]) -> Vec<Interchange> {
    let mut order: Vec<&str> = Vec::new();
    let mut serving: HashMap<&str, Vec<&str>> = HashMap::new();

    for route in routes {
        for stop in route.stops.iter() {
            let entry = serving.entry(stop.as_str()).or_insert_with(|| {
                order.push(stop.as_str());
                Vec::new()
            });
            if !entry.contains(&route.name.as_str()) {
                entry.push(route.name.as_str());
            }
        }
    }

    order
        .into_iter()
        .filter_map(|stop| {
            let routes = serving.remove(stop)?;
            (routes.len() > 1).then(|| Interchange {
                stop: stop.to_string(),
                routes: routes.into_iter().map(str::to_string).collect(),
            })
        })
        .collect()
}
