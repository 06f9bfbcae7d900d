//! Selection types for the explorer views

use std::fmt;

use serde::{Deserialize, Serialize};

use super::place::PlaceKind;

/// The list category or mode the user is browsing
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveView {
    /// Company list with company markers
    #[default]
    Company,
    /// House list with house markers
    House,
    /// Origin/destination pickers with the distance line
    Distance,
}

impl ActiveView {
    /// Lowercase label used in log lines and error messages
    pub fn label(self) -> &'static str {
        match self {
            ActiveView::Company => "company",
            ActiveView::House => "house",
            ActiveView::Distance => "distance",
        }
    }

    /// Entity kind a highlight must carry in this view, if any
    pub fn highlight_kind(self) -> Option<PlaceKind> {
        match self {
            ActiveView::Company => Some(PlaceKind::Company),
            ActiveView::House => Some(PlaceKind::House),
            ActiveView::Distance => None,
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
