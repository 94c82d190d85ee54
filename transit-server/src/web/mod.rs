//! Web layer for the transit line planner.
//!
//! Provides HTTP endpoints for planning journeys and summarising routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
