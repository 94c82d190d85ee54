//! MBTA v3 API client.
//!
//! The MBTA publishes routes and stops as JSON:API documents. Two queries
//! are used, both read-only:
//! - `GET /routes` lists every route with its type code and names
//! - `GET /stops?filter[route]={id}` lists a route's stops in line order
//!
//! [`MockMbtaClient`] serves the same documents from disk for offline use.

mod client;
mod error;
mod mock;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use error::DataFetchError;
pub use mock::MockMbtaClient;
pub use types::{Document, RouteAttributes, RouteResource, StopAttributes, StopResource};
