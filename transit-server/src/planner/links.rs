//! Route-level link resolver (legacy mode).
//!
//! Instead of searching stop by stop, this mode links whole routes that share
//! at least one stop and answers with a single hop through such a link. It
//! only handles journeys needing at most one intermediate line from the
//! starting line's neighborhood; anything further is reported as not
//! possible. The stop-level search in [`super::dfs`] is the primary model.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{PlanError, TravelPlan};

use super::summary::Interchange;

/// Route name → names of routes sharing a stop with it.
///
/// Each link list keeps the order links were discovered in and never holds a
/// duplicate. Lists only grow.
#[derive(Debug, Clone, Default)]
pub struct RouteLinks {
    links: HashMap<String, Vec<String>>,
}

impl RouteLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build links from interchange stops, in interchange order.
    pub fn from_interchanges(interchanges: &[Interchange]) -> Self {
        let mut links = Self::new();
        for interchange in interchanges {
            links.add_shared_stop(&interchange.routes);
        }
        links
    }

    /// Record that all `routes` serve one common stop.
    pub fn add_shared_stop(&mut self, routes: &[String]) {
        for route in routes {
            let linked = self.links.entry(route.clone()).or_default();
            for other in routes.iter().filter(|r| *r != route) {
                if !linked.contains(other) {
                    linked.push(other.clone());
                }
            }
        }
    }

    /// Routes linked to `route`, in discovery order.
    pub fn links_of(&self, route: &str) -> &[String] {
        self.links.get(route).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `a` lists `b` as a link.
    pub fn are_linked(&self, a: &str, b: &str) -> bool {
        self.links_of(a).iter().any(|r| r == b)
    }

    /// First route (in `a`'s link order) also linked to `b`.
    pub fn first_common_link(&self, a: &str, b: &str) -> Option<&str> {
        self.links_of(a)
            .iter()
            .find(|r| self.are_linked(b, r))
            .map(String::as_str)
    }

    /// Number of routes with at least one link.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Resolve a start line and end line into a travel plan.
///
/// - Same line: ride it.
/// - End line linked to start line: change once, `[start, end]`.
/// - A line linked to both: `[start, common, end]`, taking the first common
///   link in the start line's link order.
/// - Otherwise each line linked to the start line is tried in turn as the
///   line to continue from, and becomes part of the plan. When none works the
///   journey is not possible.
pub fn resolve_links(
    links: &RouteLinks,
    start_line: &str,
    end_line: &str,
) -> Result<TravelPlan, PlanError> {
    if start_line == end_line {
        return Ok(TravelPlan::from_path(vec![start_line.to_string()]));
    }

    if let Some(tail) = hop(links, start_line, end_line) {
        return Ok(plan(start_line, None, tail));
    }

    for candidate in links.links_of(start_line) {
        debug!(start_line, candidate = %candidate, end_line, "Trying linked line");
        if let Some(tail) = hop(links, candidate, end_line) {
            return Ok(plan(start_line, Some(candidate.as_str()), tail));
        }
    }

    Err(PlanError::no_path(start_line, end_line))
}

/// Lines after `from` that reach `to` through at most one common link.
fn hop<'a>(links: &'a RouteLinks, from: &str, to: &'a str) -> Option<Vec<&'a str>> {
    if links.are_linked(from, to) {
        return Some(vec![to]);
    }
    links
        .first_common_link(from, to)
        .map(|common| vec![common, to])
}

fn plan<'a>(start: &'a str, via: Option<&'a str>, tail: Vec<&'a str>) -> TravelPlan {
    let path = std::iter::once(start)
        .chain(via)
        .chain(tail)
        .map(str::to_string)
        .collect();
    TravelPlan::from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| (*s).to_string()).collect()
    }

    fn links(shared: &[&[&str]]) -> RouteLinks {
        let mut links = RouteLinks::new();
        for routes in shared {
            links.add_shared_stop(&strings(routes));
        }
        links
    }

    #[test]
    fn links_are_symmetric_and_deduplicated() {
        let links = links(&[&["Red", "Green"], &["Red", "Orange"], &["Red", "Green"]]);
        assert_eq!(links.links_of("Red"), strings(&["Green", "Orange"]).as_slice());
        assert_eq!(links.links_of("Green"), strings(&["Red"]).as_slice());
        assert!(links.are_linked("Orange", "Red"));
        assert!(!links.are_linked("Orange", "Green"));
        assert!(links.links_of("Blue").is_empty());
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn three_way_stop_links_all_pairs() {
        let links = links(&[&["Orange", "Green D", "Green E"]]);
        assert_eq!(
            links.links_of("Green D"),
            strings(&["Orange", "Green E"]).as_slice()
        );
    }

    #[test]
    fn from_interchanges() {
        let interchanges = vec![
            Interchange {
                stop: "Park Street".into(),
                routes: strings(&["Red Line", "Green Line E"]),
            },
            Interchange {
                stop: "Downtown Crossing".into(),
                routes: strings(&["Red Line", "Orange Line"]),
            },
        ];
        let links = RouteLinks::from_interchanges(&interchanges);
        assert_eq!(
            links.links_of("Red Line"),
            strings(&["Green Line E", "Orange Line"]).as_slice()
        );
    }

    #[test]
    fn same_line() {
        let links = links(&[&["Red", "Orange"]]);
        let plan = resolve_links(&links, "Red", "Red").unwrap();
        assert_eq!(plan.lines(), ["Red"]);
    }

    #[test]
    fn direct_link_gives_two_lines() {
        let links = links(&[&["Red", "Green"], &["Red", "Orange"]]);
        let plan = resolve_links(&links, "Red", "Orange").unwrap();
        assert_eq!(plan.lines(), ["Red", "Orange"]);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn common_link_gives_three_lines() {
        let links = links(&[&["Red", "Orange"], &["Orange", "Blue"]]);
        let plan = resolve_links(&links, "Red", "Blue").unwrap();
        assert_eq!(plan.lines(), ["Red", "Orange", "Blue"]);
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn first_common_link_wins() {
        // Both Green and Orange link Red to Blue; Green was discovered first.
        let links = links(&[
            &["Red", "Green"],
            &["Red", "Orange"],
            &["Orange", "Blue"],
            &["Green", "Blue"],
        ]);
        let plan = resolve_links(&links, "Red", "Blue").unwrap();
        assert_eq!(plan.lines(), ["Red", "Green", "Blue"]);
    }

    #[test]
    fn falls_back_to_linked_candidate() {
        // Red - Orange - Blue - Silver: two intermediate lines.
        let links = links(&[&["Red", "Orange"], &["Orange", "Blue"], &["Blue", "Silver"]]);
        let plan = resolve_links(&links, "Red", "Silver").unwrap();
        assert_eq!(plan.lines(), ["Red", "Orange", "Blue", "Silver"]);
    }

    #[test]
    fn exhausted_candidates_not_possible() {
        let links = links(&[
            &["Red", "Orange"],
            &["Orange", "Blue"],
            &["Blue", "Silver"],
            &["Silver", "Ferry"],
        ]);
        assert_eq!(
            resolve_links(&links, "Red", "Ferry"),
            Err(PlanError::no_path("Red", "Ferry"))
        );
    }

    #[test]
    fn unlinked_lines_not_possible() {
        let links = links(&[&["Red", "Orange"]]);
        assert_eq!(
            resolve_links(&links, "Red", "Blue"),
            Err(PlanError::no_path("Red", "Blue"))
        );
        assert_eq!(
            resolve_links(&RouteLinks::new(), "R1", "R2"),
            Err(PlanError::no_path("R1", "R2"))
        );
    }
}
