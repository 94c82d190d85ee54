//! Travel plans: the lines to ride, in order.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// An ordered sequence of route names describing which lines to ride.
///
/// A plan never names the same route twice. An empty plan means the origin
/// and destination are the same stop and no line is needed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TravelPlan(Vec<String>);

impl TravelPlan {
    /// Build a plan from a raw sequence of route names, dropping repeats.
    pub fn from_path(path: Vec<String>) -> Self {
        Self(distinct_routes(path))
    }

    /// The empty plan ("already there").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Route names in riding order.
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of line changes the plan involves.
    pub fn changes(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl fmt::Display for TravelPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" => "))
    }
}

/// Collapse a raw path of route names so each route appears once, in
/// first-seen order.
///
/// A depth-first search can come back onto a route it already rode through a
/// different stop; the plan names each route once.
pub fn distinct_routes(path: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    path.into_iter()
        .filter(|route| seen.insert(route.clone()))
        .collect()
}
