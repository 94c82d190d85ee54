//! Stop-level connectivity graph.
//!
//! Every pair of adjacent stops on a route becomes an edge labelled with
//! that route's name. Edges are stored in both directions, so the graph is
//! undirected, and parallel edges from different routes are all kept: two
//! lines sharing a station-to-station segment give two edges.
//!
//! Stops are keyed by display name only. Two distinct stops with the same
//! name on different routes become one node.

use std::collections::HashMap;

use crate::domain::Route;

/// One directed half of an undirected edge: the neighbor reached and the
/// route that runs between the two stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub stop: String,
    pub route: String,
}

/// Undirected multigraph over stop names.
///
/// Outgoing edges of a stop are kept in insertion order, which is the order
/// the search explores them in.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityGraph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl ConnectivityGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from routes with their stop lists.
    ///
    /// Routes with fewer than two stops contribute no edges.
    pub fn build<'a>(routes: impl IntoIterator<Item = &'a Route>) -> Self {
        let mut graph = Self::new();
        for route in routes {
            graph.add_route(route);
        }
        graph
    }

    /// Add the edges of one route.
    pub fn add_route(&mut self, route: &Route) {
        for pair in route.stops.windows(2) {
            self.add_edge(&pair[0], &pair[1], &route.name);
        }
    }

    /// Add an undirected edge between two stops, labelled with `route`.
    ///
    /// Stored as both `a → b` and `b → a`.
    pub fn add_edge(&mut self, a: &str, b: &str, route: &str) {
        self.adjacency.entry(a.to_string()).or_default().push(Edge {
            stop: b.to_string(),
            route: route.to_string(),
        });
        self.adjacency.entry(b.to_string()).or_default().push(Edge {
            stop: a.to_string(),
            route: route.to_string(),
        });
    }

    /// Outgoing edges of a stop, in insertion order.
    ///
    /// Returns an empty slice for stops not in the graph.
    pub fn neighbors(&self, stop: &str) -> &[Edge] {
        self.adjacency.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the stop is a node of the graph.
    pub fn contains_stop(&self, stop: &str) -> bool {
        self.adjacency.contains_key(stop)
    }

    /// Whether the edge `from → to` labelled `route` exists.
    pub fn has_edge(&self, from: &str, to: &str, route: &str) -> bool {
        self.neighbors(from)
            .iter()
            .any(|e| e.stop == to && e.route == route)
    }

    /// Number of stops in the graph.
    pub fn stop_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each stored twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Number of undirected edges labelled with the given route.
    pub fn edge_count_for(&self, route: &str) -> usize {
        self.adjacency
            .values()
            .flatten()
            .filter(|e| e.route == route)
            .count()
            / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All stop names, in no particular order.
    pub fn stops(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Routes over a small alphabet of stops so lines overlap often.
    fn routes() -> impl Strategy<Value = Vec<Vec<String>>> {
        proptest::collection::vec(proptest::collection::vec("[a-h]", 0..8), 1..6)
    }

    fn to_routes(stop_lists: &[Vec<String>]) -> Vec<Route> {
        stop_lists
            .iter()
            .enumerate()
            .map(|(i, stops)| {
                let refs: Vec<&str> = stops.iter().map(String::as_str).collect();
                Route::from_stops(&format!("r{i}"), &format!("Route {i}"), &refs)
            })
            .collect()
    }

    proptest! {
        /// A route with N stops gives N-1 edges labelled with it
        #[test]
        fn n_minus_one_edges_per_route(stop_lists in routes()) {
            let routes = to_routes(&stop_lists);
            let graph = ConnectivityGraph::build(&routes);
            for route in &routes {
                let expected = route.stop_count().saturating_sub(1);
                prop_assert_eq!(graph.edge_count_for(&route.name), expected);
            }
        }

        /// Every edge has its reverse with the same label
        #[test]
        fn undirected(stop_lists in routes()) {
            let graph = ConnectivityGraph::build(&to_routes(&stop_lists));
            for stop in graph.stops() {
                for edge in graph.neighbors(stop) {
                    prop_assert!(graph.has_edge(&edge.stop, stop, &edge.route));
                }
            }
        }

        /// Building is deterministic
        #[test]
        fn deterministic(stop_lists in routes()) {
            let routes = to_routes(&stop_lists);
            let a = ConnectivityGraph::build(&routes);
            let b = ConnectivityGraph::build(&routes);
            for stop in a.stops() {
                prop_assert_eq!(a.neighbors(stop), b.neighbors(stop));
            }
            prop_assert_eq!(a.stop_count(), b.stop_count());
        }
    }
}
