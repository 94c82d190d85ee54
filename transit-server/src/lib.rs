//! Transit line planner server.
//!
//! A web application that answers: "Which lines do I ride, in order, to get
//! from this stop to that one?" Route and stop data come from the MBTA v3
//! API, or from JSON files on disk for offline use.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod graph;
pub mod mbta;
pub mod planner;
pub mod web;

#[cfg(test)]
mod test_support;
