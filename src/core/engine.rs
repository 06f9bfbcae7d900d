//! The explorer aggregate and its gesture dispatch
//!
//! [`Explorer`] owns the loaded entity lists, the region index, the
//! session selection state and the distance resolver. The renderer reads
//! derived views from it and feeds user gestures back in through
//! [`Explorer::update`]; state never flows the other way.

use crate::config::ExplorerConfig;
use crate::distance::{DistanceReading, DistanceResolver};
use crate::domain::{Company, Coordinate, House, Located, Place, Station, University};
use crate::error::SelectionError;
use crate::region::RegionIndex;
use crate::repository::{EntityRepository, FixtureRepository};
use crate::session::messages::{DistanceMsg, ListMsg, MapMsg, Msg};
use crate::session::state::{SelectionState, search_filter};

pub struct Explorer {
    config: ExplorerConfig,
    companies: Vec<Company>,
    houses: Vec<House>,
    universities: Vec<University>,
    stations: Vec<Station>,
    regions: RegionIndex,
    session: SelectionState,
    resolver: DistanceResolver,
}

impl Explorer {
    /// Build an engine from an already-loaded repository and polygon set
    pub fn new(
        repository: &dyn EntityRepository,
        regions: RegionIndex,
        config: ExplorerConfig,
    ) -> Self {
        let session = SelectionState::new(&config);
        Self {
            companies: repository.companies().to_vec(),
            houses: repository.houses().to_vec(),
            universities: repository.universities().to_vec(),
            stations: repository.stations().to_vec(),
            regions,
            session,
            resolver: DistanceResolver::default(),
            config,
        }
    }

    /// Build an engine from the embedded fixtures and the user config
    pub fn from_fixtures() -> anyhow::Result<Self> {
        let repository = FixtureRepository::load()?;
        let regions = FixtureRepository::regions()?;
        Ok(Self::new(&repository, regions, ExplorerConfig::load()))
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn session(&self) -> &SelectionState {
        &self.session
    }

    pub fn regions(&self) -> &RegionIndex {
        &self.regions
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// University markers are drawn in every view
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    /// Station markers, drawn only while the transport overlay is on
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Apply one renderer gesture
    ///
    /// Every mutation is atomic: a rejected gesture leaves the session
    /// untouched and reports why.
    pub fn update(&mut self, msg: Msg) -> Result<(), SelectionError> {
        match msg {
            Msg::SwitchView(view) => {
                self.session.set_active_view(view);
                Ok(())
            }
            Msg::Map(MapMsg::RegionClicked(feature)) => {
                match self.regions.resolve_region(&feature) {
                    Some(name) => {
                        if !self.regions.contains(name) {
                            log::debug!("Region click resolved to unknown name {name:?}");
                        }
                        let name = name.to_owned();
                        self.session.set_region_filter(Some(name));
                    }
                    None => log::debug!("Ignoring click on a nameless region polygon"),
                }
                Ok(())
            }
            Msg::Map(MapMsg::ResetRegion) => {
                self.session.reset_region_filter();
                Ok(())
            }
            Msg::List(ListMsg::Highlight(place)) => self.session.set_highlighted(Some(place)),
            Msg::List(ListMsg::ClearHighlight) => self.session.set_highlighted(None),
            Msg::Distance(DistanceMsg::PickOrigin(place)) => self.session.set_origin(Some(place)),
            Msg::Distance(DistanceMsg::PickDestination(place)) => {
                self.session.set_destination(Some(place))
            }
            Msg::Distance(DistanceMsg::FromQueryChanged(query)) => {
                self.session.set_from_query(query);
                Ok(())
            }
            Msg::Distance(DistanceMsg::ToQueryChanged(query)) => {
                self.session.set_to_query(query);
                Ok(())
            }
            Msg::ToggleTransportOverlay => {
                self.session.toggle_transport_overlay();
                Ok(())
            }
        }
    }

    /// Entities of the active list under the current region filter
    pub fn visible_markers(&self) -> Vec<Place> {
        self.session.filtered_entities(&self.companies, &self.houses)
    }

    /// Where the map should re-center, if anything is highlighted
    pub fn focus(&self) -> Option<Coordinate> {
        self.session.highlighted().map(Located::coordinate)
    }

    /// Current distance readout for the distance tab
    pub fn distance(&mut self) -> DistanceReading {
        self.resolver
            .resolve(self.session.origin(), self.session.destination())
    }

    /// From-picker entries: houses, then stations while the overlay is on,
    /// narrowed by the from-query
    pub fn origin_candidates(&self) -> Vec<Place> {
        let query = self.session.from_query();
        let mut candidates: Vec<Place> = search_filter(&self.houses, query)
            .into_iter()
            .cloned()
            .map(Place::from)
            .collect();
        if self.session.transport_overlay_enabled() {
            candidates.extend(
                search_filter(&self.stations, query)
                    .into_iter()
                    .cloned()
                    .map(Place::from),
            );
        }
        candidates
    }

    /// To-picker entries: universities narrowed by the to-query
    pub fn destination_candidates(&self) -> Vec<Place> {
        search_filter(&self.universities, self.session.to_query())
            .into_iter()
            .cloned()
            .map(Place::from)
            .collect()
    }
}
