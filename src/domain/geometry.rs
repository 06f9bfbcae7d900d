//! Geographic coordinate type shared by entities and the map viewport

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Unvalidated wire form of a coordinate pair, as it appears in fixtures
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawCoordinate {
    lat: f64,
    long: f64,
}

/// A validated WGS84 position in decimal degrees
///
/// Construction rejects non-finite and out-of-range components, so every
/// `Coordinate` held by an entity or the viewport is safe to feed into
/// distance math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    long: f64,
}

impl Coordinate {
    /// Create a validated coordinate from decimal degrees
    pub fn new(lat: f64, long: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !long.is_finite() {
            return Err(GeoError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&long) {
            return Err(GeoError::LongitudeOutOfRange(long));
        }
        Ok(Self { lat, long })
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub fn long(&self) -> f64 {
        self.long
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.long)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            long: coordinate.long,
        }
    }
}
