use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::distance::distance_km;

/// Reference point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Countries a buyer or shipper can be located in.
///
/// Each country resolves to a single representative coordinate. The
/// sub-locations are offered for display and never change a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Location {
    #[serde(rename = "India")]
    India,
    #[serde(rename = "United States")]
    UnitedStates,
    #[serde(rename = "China")]
    China,
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    #[serde(rename = "Australia")]
    Australia,
    #[serde(rename = "Germany")]
    Germany,
    #[serde(rename = "France")]
    France,
    #[serde(rename = "Japan")]
    Japan,
}

impl Location {
    pub const fn ordered() -> [Location; 8] {
        [
            Location::India,
            Location::UnitedStates,
            Location::China,
            Location::UnitedKingdom,
            Location::Australia,
            Location::Germany,
            Location::France,
            Location::Japan,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Location::India => "India",
            Location::UnitedStates => "United States",
            Location::China => "China",
            Location::UnitedKingdom => "United Kingdom",
            Location::Australia => "Australia",
            Location::Germany => "Germany",
            Location::France => "France",
            Location::Japan => "Japan",
        }
    }

    pub fn coordinate(self) -> Coordinate {
        match self {
            Location::India => Coordinate::new(22.5937, 78.9629),
            Location::UnitedStates => Coordinate::new(37.0902, -95.7129),
            Location::China => Coordinate::new(35.8617, 104.1954),
            Location::UnitedKingdom => Coordinate::new(55.3781, -3.4360),
            Location::Australia => Coordinate::new(-25.2744, 133.7751),
            Location::Germany => Coordinate::new(51.1657, 10.4515),
            Location::France => Coordinate::new(46.6034, 1.8883),
            Location::Japan => Coordinate::new(36.2048, 138.2529),
        }
    }

    pub const fn sub_locations(self) -> &'static [&'static str] {
        match self {
            Location::India => &[
                "Delhi",
                "Mumbai",
                "Chennai",
                "Bangalore",
                "Hyderabad",
                "Kolkata",
                "Pune",
                "Jaipur",
                "Ahmedabad",
                "Kochi",
            ],
            Location::UnitedStates => &[
                "New York",
                "Los Angeles",
                "Chicago",
                "Houston",
                "Phoenix",
                "Dallas",
                "San Diego",
                "San Jose",
                "Austin",
                "Seattle",
            ],
            Location::China => &[
                "Beijing",
                "Shanghai",
                "Shenzhen",
                "Guangzhou",
                "Chengdu",
                "Wuhan",
                "Hangzhou",
                "Xi'an",
                "Nanjing",
                "Tianjin",
            ],
            Location::UnitedKingdom => &[
                "London",
                "Manchester",
                "Birmingham",
                "Liverpool",
                "Leeds",
                "Sheffield",
                "Bristol",
                "Oxford",
                "Cambridge",
                "Nottingham",
            ],
            Location::Australia => &[
                "Sydney",
                "Melbourne",
                "Brisbane",
                "Perth",
                "Adelaide",
                "Canberra",
                "Hobart",
                "Darwin",
                "Gold Coast",
                "Newcastle",
            ],
            Location::Germany => &[
                "Berlin",
                "Munich",
                "Hamburg",
                "Frankfurt",
                "Cologne",
                "Stuttgart",
                "Dusseldorf",
                "Leipzig",
                "Bonn",
                "Dresden",
            ],
            Location::France => &[
                "Paris",
                "Lyon",
                "Marseille",
                "Nice",
                "Toulouse",
                "Bordeaux",
                "Lille",
                "Nantes",
                "Strasbourg",
                "Montpellier",
            ],
            Location::Japan => &[
                "Tokyo",
                "Osaka",
                "Kyoto",
                "Nagoya",
                "Yokohama",
                "Kobe",
                "Hiroshima",
                "Fukuoka",
                "Sendai",
                "Sapporo",
            ],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Location::ordered()
            .into_iter()
            .find(|location| location.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LookupError(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<Location>().map_err(de::Error::custom)
    }
}

/// Raised when a name does not match any configured location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown location '{0}'")]
pub struct LookupError(pub String);

/// Resolve a location name to its reference coordinate.
pub fn coordinate_of(name: &str) -> Result<Coordinate, LookupError> {
    name.parse::<Location>().map(Location::coordinate)
}
