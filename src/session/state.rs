//! Session-scoped selection state and its mutation operations
//!
//! One [`SelectionState`] exists per session. Fields are private and change
//! only through the operations below; each operation either applies fully
//! or rejects and leaves the state untouched.

use crate::config::ExplorerConfig;
use crate::domain::{ActiveView, Company, House, Located, Place, PlaceKind};
use crate::error::SelectionError;
use crate::region::entities_in_region;

/// The one mutable aggregate of the engine
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    active_view: ActiveView,
    region_filter: Option<String>,
    highlighted: Option<Place>,
    origin: Option<Place>,
    destination: Option<Place>,
    transport_overlay_enabled: bool,
    from_query: String,
    to_query: String,
}

impl SelectionState {
    /// Fresh state seeded from the user's preferences
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            active_view: config.startup_view,
            transport_overlay_enabled: config.transport_overlay_enabled,
            ..Self::default()
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn region_filter(&self) -> Option<&str> {
        self.region_filter.as_deref()
    }

    pub fn highlighted(&self) -> Option<&Place> {
        self.highlighted.as_ref()
    }

    pub fn origin(&self) -> Option<&Place> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&Place> {
        self.destination.as_ref()
    }

    pub fn transport_overlay_enabled(&self) -> bool {
        self.transport_overlay_enabled
    }

    pub fn from_query(&self) -> &str {
        &self.from_query
    }

    pub fn to_query(&self) -> &str {
        &self.to_query
    }

    /// Switch the active tab
    ///
    /// The region filter and the distance picks survive view switches. A
    /// highlight whose kind no longer matches the incoming view is cleared.
    pub fn set_active_view(&mut self, view: ActiveView) {
        let keep_highlight = match (&self.highlighted, view.highlight_kind()) {
            (Some(place), Some(kind)) => place.kind() == kind,
            (Some(_), None) => false,
            (None, _) => true,
        };
        if !keep_highlight {
            self.highlighted = None;
        }
        self.active_view = view;
    }

    /// Set or clear the region filter
    ///
    /// Unknown names are accepted as valid no-match filters. A filter that
    /// excludes the current highlight clears it.
    pub fn set_region_filter(&mut self, region: Option<String>) {
        if let (Some(name), Some(highlighted)) = (region.as_deref(), &self.highlighted) {
            if highlighted.region() != Some(name) {
                self.highlighted = None;
            }
        }
        self.region_filter = region;
    }

    /// Clear the region filter and the highlight together
    pub fn reset_region_filter(&mut self) {
        self.region_filter = None;
        self.highlighted = None;
    }

    /// Highlight an entity of the active list, or clear the highlight
    pub fn set_highlighted(&mut self, place: Option<Place>) -> Result<(), SelectionError> {
        let Some(place) = place else {
            self.highlighted = None;
            return Ok(());
        };
        match self.active_view.highlight_kind() {
            Some(kind) if place.kind() == kind => {
                self.highlighted = Some(place);
                Ok(())
            }
            _ => Err(SelectionError::HighlightKindMismatch {
                view: self.active_view,
                found: place.kind(),
            }),
        }
    }

    /// Pick the distance origin, or clear it
    ///
    /// Houses are always selectable; stations only while the transport
    /// overlay is on. Accepted in every view so endpoints can be chosen
    /// before the distance tab is opened.
    pub fn set_origin(&mut self, place: Option<Place>) -> Result<(), SelectionError> {
        if let Some(place) = &place {
            match place.kind() {
                PlaceKind::House => {}
                PlaceKind::Station if self.transport_overlay_enabled => {}
                PlaceKind::Station => return Err(SelectionError::StationsUnavailable),
                kind => return Err(SelectionError::OriginKindMismatch { found: kind }),
            }
        }
        self.origin = place;
        Ok(())
    }

    /// Pick the distance destination, or clear it
    pub fn set_destination(&mut self, place: Option<Place>) -> Result<(), SelectionError> {
        if let Some(place) = &place {
            if place.kind() != PlaceKind::University {
                return Err(SelectionError::DestinationKindMismatch {
                    found: place.kind(),
                });
            }
        }
        self.destination = place;
        Ok(())
    }

    /// Flip the rail overlay
    ///
    /// Turning it off clears a station origin; the station does not come
    /// back when the overlay is re-enabled.
    pub fn toggle_transport_overlay(&mut self) {
        self.transport_overlay_enabled = !self.transport_overlay_enabled;
        if !self.transport_overlay_enabled
            && self
                .origin
                .as_ref()
                .is_some_and(|origin| origin.kind() == PlaceKind::Station)
        {
            self.origin = None;
        }
    }

    pub fn set_from_query(&mut self, query: String) {
        self.from_query = query;
    }

    pub fn set_to_query(&mut self, query: String) {
        self.to_query = query;
    }

    /// Entities of the active list under the current region filter
    ///
    /// Pure derived view; the distance tab shows no list of its own.
    pub fn filtered_entities(&self, companies: &[Company], houses: &[House]) -> Vec<Place> {
        let region = self.region_filter.as_deref();
        match self.active_view {
            ActiveView::Company => entities_in_region(companies, region)
                .into_iter()
                .cloned()
                .map(Place::from)
                .collect(),
            ActiveView::House => entities_in_region(houses, region)
                .into_iter()
                .cloned()
                .map(Place::from)
                .collect(),
            ActiveView::Distance => Vec::new(),
        }
    }
}

/// Case-insensitive substring match on entity names
///
/// An empty query returns all candidates unchanged.
pub fn search_filter<'a, T: Located>(candidates: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return candidates.iter().collect();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.name().to_lowercase().contains(&needle))
        .collect()
}
