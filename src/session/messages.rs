//! Message types for renderer gestures
//!
//! This module contains the Msg enum with nested sub-enums, one variant per
//! user gesture the renderer forwards into the engine. State changes happen
//! only through these messages; hover is presentational and never arrives
//! here.

use crate::domain::{ActiveView, Place};
use crate::region::RegionFeature;

/// Gestures on the map itself
#[derive(Debug, Clone)]
pub enum MapMsg {
    /// A region polygon was clicked
    RegionClicked(RegionFeature),
    /// The active region filter was dismissed
    ResetRegion,
}

/// Gestures on the entity list next to the map
#[derive(Debug, Clone)]
pub enum ListMsg {
    /// A list row was clicked; the map re-centers on this entity
    Highlight(Place),
    /// The current highlight was dismissed
    ClearHighlight,
}

/// Gestures on the distance tab pickers
#[derive(Debug, Clone)]
pub enum DistanceMsg {
    /// An origin was chosen from the from-picker
    PickOrigin(Place),
    /// A destination was chosen from the to-picker
    PickDestination(Place),
    /// The from-picker search field changed
    FromQueryChanged(String),
    /// The to-picker search field changed
    ToQueryChanged(String),
}

/// All messages the renderer can send
#[derive(Debug, Clone)]
pub enum Msg {
    /// A tab was selected
    SwitchView(ActiveView),
    /// Map gestures
    Map(MapMsg),
    /// List gestures
    List(ListMsg),
    /// Distance tab gestures
    Distance(DistanceMsg),
    /// The rail overlay toggle was clicked
    ToggleTransportOverlay,
}
