//! Stop catalog: cached stop lists per route.
//!
//! Each route's stop list is fetched on first request and then served from
//! a moka cache until its TTL runs out. Concurrent misses for the same route
//! may both fetch; the later insert simply overwrites the earlier one, which
//! is harmless because the source is read-only.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{trace, warn};

use crate::domain::RouteId;

use super::TransitSource;

/// Cached stop list entry.
type StopsEntry = Arc<Vec<String>>;

/// Configuration for the stop cache.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// TTL for cached stop lists.
    pub ttl: Duration,

    /// Maximum number of cached routes.
    pub max_capacity: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(6 * 60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Stop lists by route, fetched lazily and cached.
pub struct StopCatalog<S> {
    source: Arc<S>,
    cache: MokaCache<RouteId, StopsEntry>,
}

impl<S: TransitSource> StopCatalog<S> {
    /// Create a new catalog with the given configuration.
    pub fn new(source: Arc<S>, config: &CatalogConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, cache }
    }

    /// Ordered stop names of a route.
    ///
    /// Returns `None` if the stops could not be fetched; the failure is
    /// logged and nothing is cached, so a later call retries.
    pub async fn get_stops(&self, route_id: &RouteId) -> Option<StopsEntry> {
        if let Some(cached) = self.cache.get(route_id).await {
            trace!(route = %route_id, "Stop cache hit");
            return Some(cached);
        }

        let stops = match self.source.fetch_stops(route_id).await {
            Ok(stops) => Arc::new(stops),
            Err(e) => {
                warn!(route = %route_id, error = %e, "Unable to fetch stops");
                return None;
            }
        };

        self.cache.insert(route_id.clone(), stops.clone()).await;

        Some(stops)
    }
}
