//! Mock MBTA client for running without network access.
//!
//! Loads JSON:API documents from a directory laid out like the live API:
//!
//! ```text
//! <dir>/routes.json           # GET /routes
//! <dir>/stops/<route_id>.json # GET /stops?filter[route]=<route_id>
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::RouteId;

use super::error::DataFetchError;
use super::types::{Document, RouteResource, StopResource, stop_names};

/// Mock MBTA client that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockMbtaClient {
    routes: Arc<Vec<RouteResource>>,
    /// Stop lists keyed by route id.
    stops: Arc<HashMap<RouteId, Vec<String>>>,
}

impl MockMbtaClient {
    /// Load mock data from a directory.
    ///
    /// `routes.json` is required. The `stops` directory is optional; routes
    /// without a stop file fail at fetch time, as an unknown route would on
    /// the live API.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DataFetchError> {
        let data_dir = data_dir.as_ref();

        let routes: Document<RouteResource> = read_json(&data_dir.join("routes.json"))?;

        let mut stops = HashMap::new();
        let stops_dir = data_dir.join("stops");
        if stops_dir.is_dir() {
            let entries = std::fs::read_dir(&stops_dir).map_err(|e| DataFetchError::MockData {
                message: format!("failed to read {}: {e}", stops_dir.display()),
            })?;

            for entry in entries {
                let entry = entry.map_err(|e| DataFetchError::MockData {
                    message: format!("failed to read directory entry: {e}"),
                })?;

                let path = entry.path();
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }

                // "Green-E.json" -> "Green-E"
                let route_id = path.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
                    DataFetchError::MockData {
                        message: format!("invalid filename: {}", path.display()),
                    }
                })?;

                let document: Document<StopResource> = read_json(&path)?;
                stops.insert(RouteId::new(route_id), stop_names(document));
            }
        }

        Ok(Self {
            routes: Arc::new(routes.data),
            stops: Arc::new(stops),
        })
    }

    /// Mimics `MbtaClient::fetch_routes`.
    pub async fn fetch_routes(&self) -> Result<Vec<RouteResource>, DataFetchError> {
        Ok(self.routes.as_ref().clone())
    }

    /// Mimics `MbtaClient::fetch_stops`.
    pub async fn fetch_stops(&self, route_id: &RouteId) -> Result<Vec<String>, DataFetchError> {
        self.stops
            .get(route_id)
            .cloned()
            .ok_or_else(|| DataFetchError::Api {
                status: 404,
                message: format!("no mock stops for route {route_id}"),
            })
    }

    /// Route ids that have stop data.
    pub fn available_routes(&self) -> Vec<RouteId> {
        let mut ids: Vec<RouteId> = self.stops.keys().cloned().collect();
        ids.sort();
        ids
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataFetchError> {
    let json = std::fs::read_to_string(path).map_err(|e| DataFetchError::MockData {
        message: format!("failed to read {}: {e}", path.display()),
    })?;

    serde_json::from_str(&json).map_err(|e| DataFetchError::Json {
        message: format!("{}: {e}", path.display()),
    })
}
