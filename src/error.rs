//! Error taxonomy for selection mutations and coordinate validation

use thiserror::Error;

use crate::domain::{ActiveView, PlaceKind};

/// A mutation was called with an entity whose kind does not fit the context.
/// The selection state is left unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Highlighting is only valid for the entity kind backing the active list
    #[error("cannot highlight a {found} while the {view} view is active")]
    HighlightKindMismatch { view: ActiveView, found: PlaceKind },
    /// Only houses and stations can serve as the distance origin
    #[error("a {found} cannot be picked as distance origin")]
    OriginKindMismatch { found: PlaceKind },
    /// Only universities can serve as the distance destination
    #[error("a {found} cannot be picked as distance destination")]
    DestinationKindMismatch { found: PlaceKind },
    /// Stations are selectable as origin only while the transport overlay is on
    #[error("stations are unavailable as origin while the transport overlay is off")]
    StationsUnavailable,
}

/// A latitude/longitude pair failed validation. Rejected at construction so
/// NaN distances can never reach a rendered tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("coordinate components must be finite")]
    NonFinite,
}
