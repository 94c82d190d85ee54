//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogConfig;
use crate::domain::{InvalidRouteType, RouteType};
use crate::mbta::MbtaConfig;
use crate::planner::PlannerConfig;

/// Address the server binds to when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid ROUTE_TYPES: {0}")]
    RouteTypes(#[from] InvalidRouteType),

    #[error("invalid BIND_ADDR {0:?}")]
    BindAddr(String),

    #[error("invalid {name}: expected a positive integer, got {value:?}")]
    Number { name: &'static str, value: String },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mbta: MbtaConfig,
    /// Serve data from this directory instead of the live API.
    pub mock_data_dir: Option<PathBuf>,
    pub catalog: CatalogConfig,
    pub planner: PlannerConfig,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    ///
    /// - `MBTA_API_KEY`: sent as `x-api-key`
    /// - `MBTA_BASE_URL`: API base URL
    /// - `MBTA_TIMEOUT_SECS`: request timeout
    /// - `MBTA_MAX_CONCURRENT`: in-flight request limit
    /// - `MOCK_DATA_DIR`: offline data directory
    /// - `ROUTE_TYPES`: comma-separated type codes or names (default subway)
    /// - `BIND_ADDR`: listen address (default [`DEFAULT_BIND_ADDR`])
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut mbta = MbtaConfig::new();
        if let Some(key) = get("MBTA_API_KEY") {
            mbta = mbta.with_api_key(key.trim());
        }
        if let Some(url) = get("MBTA_BASE_URL") {
            mbta = mbta.with_base_url(url.trim());
        }
        if let Some(secs) = get("MBTA_TIMEOUT_SECS") {
            mbta = mbta.with_timeout(positive("MBTA_TIMEOUT_SECS", &secs)?);
        }
        if let Some(n) = get("MBTA_MAX_CONCURRENT") {
            mbta = mbta.with_max_concurrent(positive("MBTA_MAX_CONCURRENT", &n)?);
        }

        let mut planner = PlannerConfig::default();
        if let Some(types) = get("ROUTE_TYPES") {
            planner = planner.with_route_types(RouteType::parse_list(&types)?);
        }

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::BindAddr(bind.clone()))?;

        Ok(Self {
            mbta,
            mock_data_dir: get("MOCK_DATA_DIR").map(PathBuf::from),
            catalog: CatalogConfig::default(),
            planner,
            bind_addr,
        })
    }
}

fn positive<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
{
    match value.trim().parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(ConfigError::Number {
            name,
            value: value.to_string(),
        }),
    }
}
