//! Great-circle distance and travel-time estimation

use std::fmt;

use crate::domain::Coordinate;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const WALKING_SPEED_KMH: f64 = 5.0;
const RUNNING_SPEED_KMH: f64 = 10.0;

/// Great-circle distance between two validated coordinates, in kilometres
///
/// Pure and deterministic. Callers without both endpoints must not call
/// this; absence is handled by the distance resolver, not here.
pub fn haversine_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_long = (b.long() - a.long()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_long / 2.0).sin().powi(2);
    // Floating-point noise can push h past 1 for near-antipodal points
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Whole hours plus leftover minutes; minutes are always below 60
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTime {
    pub hours: u32,
    pub minutes: u32,
}

impl TravelTime {
    fn from_hours(time_in_hours: f64) -> Self {
        let hours = time_in_hours.floor();
        let minutes = ((time_in_hours - hours) * 60.0).round();
        // A fraction just under the next hour rounds to 60; carry it over
        if minutes >= 60.0 {
            Self {
                hours: hours as u32 + 1,
                minutes: 0,
            }
        } else {
            Self {
                hours: hours as u32,
                minutes: minutes as u32,
            }
        }
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Walking and running estimates for one distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTimes {
    pub walking: TravelTime,
    pub running: TravelTime,
}

/// Derive walking (5 km/h) and running (10 km/h) estimates for a distance
pub fn estimate_travel_times(distance_km: f64) -> TravelTimes {
    TravelTimes {
        walking: TravelTime::from_hours(distance_km / WALKING_SPEED_KMH),
        running: TravelTime::from_hours(distance_km / RUNNING_SPEED_KMH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(lat: f64, long: f64) -> Coordinate {
        Coordinate::new(lat, long).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let vienna = coordinate(48.2082, 16.3738);
        assert_eq!(haversine_distance_km(vienna, vienna), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = coordinate(48.2124853, 16.3599297);
        let b = coordinate(46.637434, 14.312366);
        let forward = haversine_distance_km(a, b);
        let backward = haversine_distance_km(b, a);
        assert!((forward - backward).abs() <= 1e-9 * forward.abs());
    }

    #[test]
    fn test_university_of_vienna_to_tu_wien() {
        let uni_wien = coordinate(48.2124853, 16.3599297);
        let tu_wien = coordinate(48.192, 16.3671);
        let distance = haversine_distance_km(uni_wien, tu_wien);
        assert!(
            (distance - 2.3).abs() < 0.2,
            "expected ~2.3 km, got {distance}"
        );
    }

    #[test]
    fn test_travel_times_for_ten_kilometres() {
        let times = estimate_travel_times(10.0);
        assert_eq!(times.walking.to_string(), "2h 0m");
        assert_eq!(times.running.to_string(), "1h 0m");
    }

    #[test]
    fn test_minute_rounding() {
        // 7.3 km at 5 km/h = 1.46 h = 1 h 27.6 min
        let times = estimate_travel_times(7.3);
        assert_eq!(times.walking, TravelTime { hours: 1, minutes: 28 });
    }

    #[test]
    fn test_minute_overflow_carries_into_hours() {
        // 4.96 km at 5 km/h = 0.992 h; 59.52 min rounds to 60
        let times = estimate_travel_times(4.96);
        assert_eq!(times.walking, TravelTime { hours: 1, minutes: 0 });
        assert_eq!(times.walking.to_string(), "1h 0m");
    }

    #[test]
    fn test_zero_distance_formats_as_zero() {
        let times = estimate_travel_times(0.0);
        assert_eq!(times.walking.to_string(), "0h 0m");
        assert_eq!(times.running.to_string(), "0h 0m");
    }
}
