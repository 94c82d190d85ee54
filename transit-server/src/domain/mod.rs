//! Domain types for the transit line planner.
//!
//! Routes are ordered stop sequences identified by a stable id and shown by
//! display name. Stops are identified by display name alone.

mod error;
mod plan;
mod route;
mod route_type;

pub use error::PlanError;
pub use plan::{TravelPlan, distinct_routes};
pub use route::{Route, RouteId, RouteSummary};
pub use route_type::{InvalidRouteType, RouteType};
