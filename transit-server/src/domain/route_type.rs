//! Route type (transit mode) codes.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid route type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route type: {reason}")]
pub struct InvalidRouteType {
    reason: String,
}

/// The mode of a route, as coded by the transit data source.
///
/// The numeric codes follow the MBTA v3 API (which in turn follows GTFS):
///
/// | code | mode          |
/// |------|---------------|
/// | 0    | light rail    |
/// | 1    | heavy rail    |
/// | 2    | commuter rail |
/// | 3    | bus           |
/// | 4    | ferry         |
///
/// # Examples
///
/// ```
/// use transit_server::domain::RouteType;
///
/// assert_eq!(RouteType::from_code(1).unwrap(), RouteType::HeavyRail);
/// assert_eq!("light_rail".parse::<RouteType>().unwrap(), RouteType::LightRail);
/// assert_eq!("2".parse::<RouteType>().unwrap(), RouteType::CommuterRail);
/// assert!(RouteType::from_code(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteType {
    LightRail,
    HeavyRail,
    CommuterRail,
    Bus,
    Ferry,
}

impl RouteType {
    /// All route types, in code order.
    pub const ALL: [RouteType; 5] = [
        RouteType::LightRail,
        RouteType::HeavyRail,
        RouteType::CommuterRail,
        RouteType::Bus,
        RouteType::Ferry,
    ];

    /// The rapid-transit subset (light and heavy rail).
    pub const SUBWAY: [RouteType; 2] = [RouteType::LightRail, RouteType::HeavyRail];

    /// Look up a route type by its numeric code.
    pub fn from_code(code: u8) -> Result<Self, InvalidRouteType> {
        match code {
            0 => Ok(RouteType::LightRail),
            1 => Ok(RouteType::HeavyRail),
            2 => Ok(RouteType::CommuterRail),
            3 => Ok(RouteType::Bus),
            4 => Ok(RouteType::Ferry),
            other => Err(InvalidRouteType {
                reason: format!("unknown code {other}"),
            }),
        }
    }

    /// The numeric code used by the data source.
    pub fn code(self) -> u8 {
        match self {
            RouteType::LightRail => 0,
            RouteType::HeavyRail => 1,
            RouteType::CommuterRail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }

    /// Snake-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            RouteType::LightRail => "light_rail",
            RouteType::HeavyRail => "heavy_rail",
            RouteType::CommuterRail => "commuter_rail",
            RouteType::Bus => "bus",
            RouteType::Ferry => "ferry",
        }
    }

    /// Parse a comma-separated list of route types (codes or names).
    ///
    /// Duplicates are dropped; order of first appearance is kept.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, InvalidRouteType> {
        let mut types = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let route_type = part.parse()?;
            if !types.contains(&route_type) {
                types.push(route_type);
            }
        }
        Ok(types)
    }
}

impl FromStr for RouteType {
    type Err = InvalidRouteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }

        let normalized = s.to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "light_rail" | "lightrail" => Ok(RouteType::LightRail),
            "heavy_rail" | "heavyrail" | "subway" => Ok(RouteType::HeavyRail),
            "commuter_rail" | "commuterrail" => Ok(RouteType::CommuterRail),
            "bus" => Ok(RouteType::Bus),
            "ferry" => Ok(RouteType::Ferry),
            _ => Err(InvalidRouteType {
                reason: format!("unknown name {s:?}"),
            }),
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
