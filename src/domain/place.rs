//! Entity records loaded from the static fixtures
//!
//! The four categories share one tagged sum type, [`Place`], with an
//! explicit [`PlaceKind`] discriminant. Entities are immutable value
//! records; the engine only references and clones them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Coordinate;

/// Discriminant for the entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceKind {
    Company,
    House,
    Station,
    University,
}

impl PlaceKind {
    /// Lowercase label used in log lines and error messages
    pub fn label(self) -> &'static str {
        match self {
            PlaceKind::Company => "company",
            PlaceKind::House => "house",
            PlaceKind::Station => "station",
            PlaceKind::University => "university",
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cross-category identity: fixture ids are unique within a category only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceKey {
    pub kind: PlaceKind,
    pub id: u32,
}

/// A business location with its sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub sector: String,
    pub url: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// A rentable residence with its monthly rent in euros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub rent: u32,
    pub url: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// A rail station from the transport overlay; carries no region membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// A university, selectable as distance destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: u32,
    pub name: String,
    pub region: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// Common capabilities of every entity category
pub trait Located {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
    fn coordinate(&self) -> Coordinate;
    /// Region membership; stations have none
    fn region(&self) -> Option<&str> {
        None
    }
}

impl Located for Company {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }
}

impl Located for House {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }
}

impl Located for Station {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl Located for University {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }
}

/// Any entity the map can mark or a picker can offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Place {
    Company(Company),
    House(House),
    Station(Station),
    University(University),
}

impl Place {
    pub fn kind(&self) -> PlaceKind {
        match self {
            Place::Company(_) => PlaceKind::Company,
            Place::House(_) => PlaceKind::House,
            Place::Station(_) => PlaceKind::Station,
            Place::University(_) => PlaceKind::University,
        }
    }

    /// Identity used for value-equality comparisons across code paths
    pub fn key(&self) -> PlaceKey {
        PlaceKey {
            kind: self.kind(),
            id: self.id(),
        }
    }
}

impl Located for Place {
    fn id(&self) -> u32 {
        match self {
            Place::Company(c) => c.id,
            Place::House(h) => h.id,
            Place::Station(s) => s.id,
            Place::University(u) => u.id,
        }
    }

    fn name(&self) -> &str {
        match self {
            Place::Company(c) => &c.name,
            Place::House(h) => &h.name,
            Place::Station(s) => &s.name,
            Place::University(u) => &u.name,
        }
    }

    fn coordinate(&self) -> Coordinate {
        match self {
            Place::Company(c) => c.coordinate,
            Place::House(h) => h.coordinate,
            Place::Station(s) => s.coordinate,
            Place::University(u) => u.coordinate,
        }
    }

    fn region(&self) -> Option<&str> {
        match self {
            Place::Company(c) => Some(&c.region),
            Place::House(h) => Some(&h.region),
            Place::Station(_) => None,
            Place::University(u) => Some(&u.region),
        }
    }
}

impl From<Company> for Place {
    fn from(company: Company) -> Self {
        Place::Company(company)
    }
}

impl From<House> for Place {
    fn from(house: House) -> Self {
        Place::House(house)
    }
}

impl From<Station> for Place {
    fn from(station: Station) -> Self {
        Place::Station(station)
    }
}

impl From<University> for Place {
    fn from(university: University) -> Self {
        Place::University(university)
    }
}
