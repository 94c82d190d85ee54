//! Line planner.
//!
//! Answers "which lines do I ride, in order, to get from this stop to that
//! one?". The primary mode walks a stop-level connectivity graph depth-first
//! and reports the routes labelling the edges it took; the legacy mode
//! reasons about whole routes linked by shared stops.

mod config;
mod dfs;
mod links;
mod network;
mod search;
mod summary;

pub use config::{PlannerConfig, ResolveMode};
pub use dfs::{PathSearch, find_path, resolve_path, search};
pub use links::{RouteLinks, resolve_links};
pub use network::TransitNetwork;
pub use search::{PlanOutcome, PlanRequest, TransitPlanner};
pub use summary::{Interchange, NetworkSummary, RouteSize, find_interchanges};
