//! Region polygon lookup and membership filters
//!
//! The polygon set comes from a GeoJSON feature collection. Boundary
//! geometry stays opaque here; only the renderer interprets it.

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::Located;

/// One polygon from the region GeoJSON
#[derive(Debug, Clone, Deserialize)]
pub struct RegionFeature {
    #[serde(default)]
    pub properties: Value,
    #[serde(default)]
    pub geometry: Value,
}

impl RegionFeature {
    /// The `name` property of the polygon, if the feature carries one
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RegionCollection {
    features: Vec<RegionFeature>,
}

/// The loaded polygon set, resolving clicks to region names
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    features: Vec<RegionFeature>,
}

impl RegionIndex {
    /// Parse a GeoJSON feature collection into an index
    pub fn from_geojson(raw: &[u8]) -> anyhow::Result<Self> {
        let collection: RegionCollection =
            serde_json::from_slice(raw).context("malformed region GeoJSON")?;
        Ok(Self {
            features: collection.features,
        })
    }

    /// Resolve a clicked polygon to a region name
    ///
    /// A feature without a name resolves to `None`; the click is a no-op,
    /// not an error.
    pub fn resolve_region<'a>(&self, feature: &'a RegionFeature) -> Option<&'a str> {
        feature.name()
    }

    /// Whether a name belongs to the loaded polygon set
    pub fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|f| f.name() == Some(name))
    }

    /// Polygons for the renderer to draw
    pub fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    /// Names of all named polygons, in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().filter_map(RegionFeature::name)
    }
}

/// Keep entities whose region matches `region`, preserving input order
///
/// `None` applies no filter. Entities without a region never match a named
/// filter, and an unknown name is a valid empty result, not an error.
pub fn entities_in_region<'a, T: Located>(entities: &'a [T], region: Option<&str>) -> Vec<&'a T> {
    match region {
        Some(name) => entities
            .iter()
            .filter(|entity| entity.region() == Some(name))
            .collect(),
        None => entities.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, House, Station};

    fn house(id: u32, region: &str) -> House {
        House {
            id,
            name: format!("House {id}"),
            region: region.into(),
            rent: 800 + id,
            url: format!("https://example.at/house/{id}"),
            coordinate: Coordinate::new(48.2, 16.37).unwrap(),
        }
    }

    fn index() -> RegionIndex {
        let raw = br#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "Vienna"}, "geometry": {"type": "Polygon", "coordinates": []}},
                {"type": "Feature", "properties": {"name": "Styria"}, "geometry": {"type": "Polygon", "coordinates": []}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon", "coordinates": []}}
            ]
        }"#;
        RegionIndex::from_geojson(raw).unwrap()
    }

    #[test]
    fn test_resolves_named_feature() {
        let index = index();
        assert_eq!(index.resolve_region(&index.features()[0]), Some("Vienna"));
    }

    #[test]
    fn test_nameless_feature_resolves_to_none() {
        let index = index();
        assert_eq!(index.resolve_region(&index.features()[2]), None);
    }

    #[test]
    fn test_contains_only_named_polygons() {
        let index = index();
        assert!(index.contains("Vienna"));
        assert!(index.contains("Styria"));
        assert!(!index.contains("Tyrol"));
        assert_eq!(index.names().count(), 2);
    }

    #[test]
    fn test_membership_filter() {
        let homes = vec![house(1, "Vienna"), house(2, "Styria"), house(3, "Vienna")];

        let vienna = entities_in_region(&homes, Some("Vienna"));
        assert_eq!(vienna.iter().map(|h| h.id).collect::<Vec<_>>(), [1, 3]);

        assert!(entities_in_region(&homes, Some("Tyrol")).is_empty());
    }

    #[test]
    fn test_no_filter_returns_input_unchanged() {
        let homes = vec![house(1, "Vienna"), house(2, "Styria")];
        let all = entities_in_region(&homes, None);
        assert_eq!(all.len(), homes.len());
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    #[test]
    fn test_regionless_entities_never_match() {
        let stations = vec![Station {
            id: 1,
            name: "Wien Hauptbahnhof".into(),
            coordinate: Coordinate::new(48.185, 16.375).unwrap(),
        }];
        assert!(entities_in_region(&stations, Some("Vienna")).is_empty());
        assert_eq!(entities_in_region(&stations, None).len(), 1);
    }
}
