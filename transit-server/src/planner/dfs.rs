//! Depth-first line search over the connectivity graph.
//!
//! The search starts at the origin stop and follows edges in stored order,
//! taking the first branch that reaches the destination. It finds *a* valid
//! sequence of lines, not the one with the fewest changes or stops.
//!
//! The traversal uses an explicit stack. Each stack entry points at the step
//! it was reached from, so the route sequence is rebuilt from parent links at
//! the end instead of being carried as shared mutable state while
//! backtracking. A stop is marked visited when it is popped, which explores
//! the same tree as the recursive formulation.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{PlanError, TravelPlan};
use crate::graph::ConnectivityGraph;

/// A stop reached during the search and how it was reached.
struct Step<'a> {
    stop: &'a str,
    parent: Option<usize>,
    route: Option<&'a str>,
}

/// Raw result of a depth-first search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSearch {
    /// Route of every edge taken, origin to destination. Empty if nothing was
    /// found or the origin is the destination.
    pub path: Vec<String>,

    /// Stops walked, origin to destination, one more than `path`. Empty if
    /// nothing was found.
    pub stops: Vec<String>,

    /// Number of stops popped off the stack.
    pub stops_explored: usize,
}

/// Run the depth-first search from `source` to `destination`.
pub fn search<'a>(graph: &'a ConnectivityGraph, source: &'a str, destination: &str) -> PathSearch {
    if source == destination {
        return PathSearch {
            path: Vec::new(),
            stops: vec![source.to_string()],
            stops_explored: 0,
        };
    }

    let mut steps: Vec<Step<'a>> = Vec::new();
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut stack: Vec<Step<'a>> = vec![Step {
        stop: source,
        parent: None,
        route: None,
    }];

    while let Some(step) = stack.pop() {
        let stop = step.stop;
        if !visited.insert(stop) {
            continue;
        }

        let index = steps.len();
        steps.push(step);
        trace!(stop, step = index, "DFS visiting stop");

        if stop == destination {
            let (stops, path) = trace_back(&steps, index);
            return PathSearch {
                path,
                stops,
                stops_explored: steps.len(),
            };
        }

        // Reversed so the first stored edge is popped first.
        for edge in graph.neighbors(stop).iter().rev() {
            if visited.contains(edge.stop.as_str()) {
                continue;
            }
            stack.push(Step {
                stop: edge.stop.as_str(),
                parent: Some(index),
                route: Some(edge.route.as_str()),
            });
        }
    }

    PathSearch {
        path: Vec::new(),
        stops: Vec::new(),
        stops_explored: steps.len(),
    }
}

/// Route names along the first path found from `source` to `destination`,
/// one per edge. Empty if there is none or the stops are the same.
pub fn find_path(graph: &ConnectivityGraph, source: &str, destination: &str) -> Vec<String> {
    search(graph, source, destination).path
}

/// Resolve a stop pair into a travel plan.
///
/// Unknown stops are reported before the same-stop check, so a query for an
/// unknown stop to itself is still `UnknownStop`.
pub fn resolve_path(
    graph: &ConnectivityGraph,
    source: &str,
    destination: &str,
) -> Result<TravelPlan, PlanError> {
    for stop in [source, destination] {
        if !graph.contains_stop(stop) {
            return Err(PlanError::UnknownStop(stop.to_string()));
        }
    }

    if source == destination {
        return Ok(TravelPlan::empty());
    }

    let result = search(graph, source, destination);
    debug!(
        source,
        destination,
        stops_explored = result.stops_explored,
        edges = result.path.len(),
        "DFS complete"
    );

    if result.path.is_empty() {
        return Err(PlanError::no_path(source, destination));
    }

    Ok(TravelPlan::from_path(result.path))
}

/// Stops and edge routes from the origin to `steps[index]`.
fn trace_back(steps: &[Step<'_>], mut index: usize) -> (Vec<String>, Vec<String>) {
    let mut stops = Vec::new();
    let mut routes = Vec::new();
    loop {
        let step = &steps[index];
        stops.push(step.stop.to_string());
        if let Some(route) = step.route {
            routes.push(route.to_string());
        }
        match step.parent {
            Some(parent) => index = parent,
            None => break,
        }
    }
    stops.reverse();
    routes.reverse();
    (stops, routes)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Route;
    use proptest::prelude::*;

    fn network() -> impl Strategy<Value = ConnectivityGraph> {
        proptest::collection::vec(proptest::collection::vec("[a-j]", 0..7), 1..6).prop_map(
            |stop_lists| {
                let routes: Vec<Route> = stop_lists
                    .iter()
                    .enumerate()
                    .map(|(i, stops)| {
                        let refs: Vec<&str> = stops.iter().map(String::as_str).collect();
                        Route::from_stops(&format!("r{i}"), &format!("Line {i}"), &refs)
                    })
                    .collect();
                ConnectivityGraph::build(&routes)
            },
        )
    }

    proptest! {
        /// A stop to itself needs no lines
        #[test]
        fn same_stop_always_empty(g in network(), stop in "[a-j]") {
            prop_assert!(find_path(&g, &stop, &stop).is_empty());
        }

        /// If B is reachable from A then A is reachable from B
        #[test]
        fn reachability_symmetric(g in network(), a in "[a-j]", b in "[a-j]") {
            let forward = find_path(&g, &a, &b);
            let backward = find_path(&g, &b, &a);
            prop_assert_eq!(forward.is_empty(), backward.is_empty());
        }

        /// A found path is a walk from A to B: each route labels the edge
        /// between consecutive stops
        #[test]
        fn path_is_a_walk_of_real_edges(g in network(), a in "[a-j]", b in "[a-j]") {
            let result = search(&g, &a, &b);
            prop_assume!(!result.path.is_empty());

            prop_assert_eq!(result.stops.len(), result.path.len() + 1);
            prop_assert_eq!(result.stops.first(), Some(&a));
            prop_assert_eq!(result.stops.last(), Some(&b));
            for (pair, route) in result.stops.windows(2).zip(&result.path) {
                prop_assert!(g.has_edge(&pair[0], &pair[1], route));
            }
            prop_assert_eq!(&result.path, &find_path(&g, &a, &b));
        }

        /// No stop is walked twice
        #[test]
        fn path_is_simple(g in network(), a in "[a-j]", b in "[a-j]") {
            let result = search(&g, &a, &b);
            let distinct: HashSet<&String> = result.stops.iter().collect();
            prop_assert_eq!(distinct.len(), result.stops.len());
        }
    }
}
