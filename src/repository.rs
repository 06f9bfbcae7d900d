//! Static fixture data embedded into the binary
//!
//! Entity lists load once at startup and stay read-only for the session.
//! Coordinate validation happens during deserialization, so a malformed
//! fixture is a startup error rather than a NaN on the map.

use anyhow::Context;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;

use crate::domain::{Company, House, Station, University};
use crate::region::RegionIndex;

#[derive(RustEmbed)]
#[folder = "data/"]
struct Fixtures;

/// Supplier of the four static, order-preserving entity lists
pub trait EntityRepository {
    fn companies(&self) -> &[Company];
    fn houses(&self) -> &[House];
    fn universities(&self) -> &[University];
    fn stations(&self) -> &[Station];
}

/// Repository backed by the embedded JSON fixtures
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    companies: Vec<Company>,
    houses: Vec<House>,
    universities: Vec<University>,
    stations: Vec<Station>,
}

impl FixtureRepository {
    /// Parse and validate every embedded entity list
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            companies: read_fixture("companies.json")?,
            houses: read_fixture("houses.json")?,
            universities: read_fixture("universities.json")?,
            stations: read_fixture("stations.json")?,
        })
    }

    /// Build the region index from the embedded boundary GeoJSON
    pub fn regions() -> anyhow::Result<RegionIndex> {
        let file = Fixtures::get("austria.geojson")
            .context("missing embedded fixture austria.geojson")?;
        RegionIndex::from_geojson(&file.data)
    }
}

impl EntityRepository for FixtureRepository {
    fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn houses(&self) -> &[House] {
        &self.houses
    }

    fn universities(&self) -> &[University] {
        &self.universities
    }

    fn stations(&self) -> &[Station] {
        &self.stations
    }
}

fn read_fixture<T: DeserializeOwned>(path: &str) -> anyhow::Result<Vec<T>> {
    let file =
        Fixtures::get(path).with_context(|| format!("missing embedded fixture {path}"))?;
    serde_json::from_slice(&file.data).with_context(|| format!("malformed fixture {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Located;

    #[test]
    fn test_fixtures_parse_and_are_nonempty() {
        let repo = FixtureRepository::load().unwrap();
        assert!(!repo.companies().is_empty());
        assert!(!repo.houses().is_empty());
        assert!(!repo.universities().is_empty());
        assert!(!repo.stations().is_empty());
    }

    #[test]
    fn test_ids_are_unique_within_each_category() {
        let repo = FixtureRepository::load().unwrap();

        fn assert_unique<T: Located>(entities: &[T]) {
            let mut ids: Vec<u32> = entities.iter().map(Located::id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), entities.len());
        }

        assert_unique(repo.companies());
        assert_unique(repo.houses());
        assert_unique(repo.universities());
        assert_unique(repo.stations());
    }

    #[test]
    fn test_company_and_house_regions_have_polygons() {
        let repo = FixtureRepository::load().unwrap();
        let regions = FixtureRepository::regions().unwrap();

        for company in repo.companies() {
            assert!(
                regions.contains(&company.region),
                "company {} names unknown region {}",
                company.name,
                company.region
            );
        }
        for house in repo.houses() {
            assert!(
                regions.contains(&house.region),
                "house {} names unknown region {}",
                house.name,
                house.region
            );
        }
    }

    #[test]
    fn test_all_nine_states_are_present() {
        let regions = FixtureRepository::regions().unwrap();
        for name in [
            "Vienna",
            "Lower Austria",
            "Upper Austria",
            "Styria",
            "Tyrol",
            "Carinthia",
            "Salzburg",
            "Vorarlberg",
            "Burgenland",
        ] {
            assert!(regions.contains(name), "missing polygon for {name}");
        }
    }
}
