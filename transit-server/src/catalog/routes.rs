//! Route catalog: routes of selected types.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{RouteSummary, RouteType};

use super::TransitSource;

/// Lists routes of the requested types.
pub struct RouteCatalog<S> {
    source: Arc<S>,
}

impl<S: TransitSource> RouteCatalog<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Routes whose type is in `types`, as id and display name, in source
    /// order.
    ///
    /// Returns `None` if the source could not be read; callers treat that as
    /// "no routes of the requested type". An empty `types` gives an empty
    /// list without touching the source.
    pub async fn get_routes(&self, types: &[RouteType]) -> Option<Vec<RouteSummary>> {
        if types.is_empty() {
            return Some(Vec::new());
        }

        let all = match self.source.fetch_routes().await {
            Ok(routes) => routes,
            Err(e) => {
                warn!(error = %e, "Unable to fetch routes");
                return None;
            }
        };

        let routes: Vec<RouteSummary> = all
            .iter()
            .filter(|r| r.route_type().is_some_and(|t| types.contains(&t)))
            .map(|r| r.to_summary())
            .collect();

        debug!(
            fetched = all.len(),
            selected = routes.len(),
            ?types,
            "Filtered routes by type"
        );

        Some(routes)
    }
}
