//! MBTA v3 API response DTOs.
//!
//! These map directly onto the JSON:API documents the API returns. Only the
//! attributes the planner reads are modelled; everything else is ignored.
//! Optional attributes use `Option` or `#[serde(default)]` because the API
//! sends `null` for many of them.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteId, RouteSummary, RouteType};

/// Top-level JSON:API document with a list of resources.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Document<T> {
    pub data: Vec<T>,
}

/// A route resource from `GET /routes`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteResource {
    /// Stable route identifier (e.g. "Red", "Green-E", "CR-Worcester").
    pub id: String,

    pub attributes: RouteAttributes,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteAttributes {
    /// Route type code (0 light rail, 1 heavy rail, 2 commuter rail, 3 bus,
    /// 4 ferry).
    #[serde(rename = "type")]
    pub route_type: u8,

    /// Display name (e.g. "Red Line"). Empty for some bus routes.
    #[serde(default)]
    pub long_name: Option<String>,

    /// Short name (e.g. "E" for Green Line E, "1" for bus route 1).
    #[serde(default)]
    pub short_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl RouteResource {
    /// The route type, if the code is one we know.
    pub fn route_type(&self) -> Option<RouteType> {
        RouteType::from_code(self.attributes.route_type).ok()
    }

    /// Name to display: the long name, falling back to the short name and
    /// then the id.
    pub fn display_name(&self) -> &str {
        [&self.attributes.long_name, &self.attributes.short_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }

    /// Project onto the route catalog's view: id and display name.
    pub fn to_summary(&self) -> RouteSummary {
        RouteSummary {
            id: RouteId::new(&self.id),
            name: self.display_name().to_string(),
        }
    }
}

/// A stop resource from `GET /stops`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: StopAttributes,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StopAttributes {
    /// Display name (e.g. "Park Street").
    pub name: String,

    #[serde(default)]
    pub municipality: Option<String>,
}

/// Stop names of a stops document, in document order.
pub fn stop_names(document: Document<StopResource>) -> Vec<String> {
    document
        .data
        .into_iter()
        .map(|stop| stop.attributes.name)
        .collect()
}
