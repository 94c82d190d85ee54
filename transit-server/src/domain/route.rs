//! Routes and their identifiers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identifier of a route, as issued by the data source (e.g. `"Red"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A route as listed by the route catalog: identifier and display name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub id: RouteId,
    pub name: String,
}

impl RouteSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RouteId::new(id),
            name: name.into(),
        }
    }
}

/// A route together with its ordered stop names.
///
/// Stops are in the physical order the line traverses them. The stop list is
/// shared with the stop catalog, so cloning a `Route` is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub stops: Arc<Vec<String>>,
}

impl Route {
    pub fn new(summary: RouteSummary, stops: Arc<Vec<String>>) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            stops,
        }
    }

    /// Build a route from string slices. Mostly useful in tests.
    pub fn from_stops(id: &str, name: &str, stops: &[&str]) -> Self {
        Self {
            id: RouteId::new(id),
            name: name.to_string(),
            stops: Arc::new(stops.iter().map(|s| (*s).to_string()).collect()),
        }
    }

    /// Number of stops on the route.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Whether this route calls at the named stop.
    pub fn serves(&self, stop: &str) -> bool {
        self.stops.iter().any(|s| s == stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_id_display() {
        let id = RouteId::new("Green-E");
        assert_eq!(id.to_string(), "Green-E");
        assert_eq!(id.as_str(), "Green-E");
    }

    #[test]
    fn route_id_serializes_as_string() {
        let id = RouteId::new("Red");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Red\"");
    }

    #[test]
    fn serves_stops() {
        let red = Route::from_stops(
            "Red",
            "Red Line",
            &["Harvard", "Park Street", "Downtown Crossing"],
        );
        let orange = Route::from_stops("Orange", "Orange Line", &["State", "Downtown Crossing"]);
        let blue = Route::from_stops("Blue", "Blue Line", &["Aquarium", "State"]);

        assert!(red.serves("Park Street"));
        assert!(!red.serves("State"));
        assert_eq!(red.stop_count(), 3);
        assert!(orange.serves("Downtown Crossing"));
        assert!(!blue.serves("Park Street"));
    }

    #[test]
    fn new_from_summary() {
        let summary = RouteSummary::new("Blue", "Blue Line");
        let route = Route::new(summary, Arc::new(vec!["Wonderland".to_string()]));
        assert_eq!(route.id, RouteId::new("Blue"));
        assert_eq!(route.name, "Blue Line");
        assert_eq!(route.stop_count(), 1);
    }
}
