//! Minimal GeoJSON reader for region outlines.
//!
//! Only the pieces a regions file needs are modeled: a feature collection
//! of Polygon/MultiPolygon features carrying `NAME` and `ISO_A2`
//! properties (the Natural Earth admin-0 attribute names). Features with
//! other geometry kinds, or with a missing or placeholder ISO code, are
//! skipped rather than an error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::MapError;

/// ISO code Natural Earth uses for "no code assigned".
const PLACEHOLDER_ISO: &str = "-99";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(rename = "NAME")]
    name: Option<String>,
    #[serde(rename = "ISO_A2")]
    iso_a2: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
    #[serde(other)]
    Other,
}

/// One ring of (longitude, latitude) degree pairs.
pub type Ring = Vec<(f64, f64)>;

/// One polygon: an exterior ring followed by any hole rings.
pub type Polygon = Vec<Ring>;

/// A named region with its polygon geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Region display name.
    pub name: String,
    /// Two-letter ISO code (lowercase used for flag lookups).
    pub iso_a2: String,
    /// Polygons in (longitude, latitude) degrees.
    pub polygons: Vec<Polygon>,
}

impl Region {
    /// Iterates over every ring of every polygon.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons.iter().flatten()
    }
}

fn convert_ring(ring: &[[f64; 2]]) -> Ring {
    ring.iter().map(|p| (p[0], p[1])).collect()
}

fn convert_geometry(geometry: &Geometry) -> Vec<Polygon> {
    match geometry {
        Geometry::Polygon { coordinates } => {
            vec![coordinates.iter().map(|r| convert_ring(r)).collect()]
        }
        Geometry::MultiPolygon { coordinates } => coordinates
            .iter()
            .map(|poly| poly.iter().map(|r| convert_ring(r)).collect())
            .collect(),
        Geometry::Other => Vec::new(),
    }
}

/// Parses regions from GeoJSON text.
pub fn parse_regions(geojson: &str) -> Result<Vec<Region>, MapError> {
    let collection: FeatureCollection = serde_json::from_str(geojson)?;
    let mut regions = Vec::new();

    for feature in &collection.features {
        let (Some(name), Some(iso_a2)) = (&feature.properties.name, &feature.properties.iso_a2)
        else {
            continue;
        };
        if iso_a2 == PLACEHOLDER_ISO {
            continue;
        }
        let polygons = match &feature.geometry {
            Some(geometry) => convert_geometry(geometry),
            None => continue,
        };
        if polygons.is_empty() {
            continue;
        }
        regions.push(Region {
            name: name.clone(),
            iso_a2: iso_a2.clone(),
            polygons,
        });
    }

    Ok(regions)
}

/// Loads regions from a GeoJSON file.
pub fn load_regions(path: &Path) -> Result<Vec<Region>, MapError> {
    let text = fs::read_to_string(path)?;
    parse_regions(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> &'static str {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"NAME": "Squareland", "ISO_A2": "SQ"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"NAME": "Nowhere", "ISO_A2": "-99"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[20.0, 20.0], [21.0, 20.0], [21.0, 21.0], [20.0, 20.0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"NAME": "Twin Isles", "ISO_A2": "TI"},
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[30.0, 0.0], [31.0, 0.0], [31.0, 1.0], [30.0, 0.0]]],
                            [[[33.0, 0.0], [34.0, 0.0], [34.0, 1.0], [33.0, 0.0]]]
                        ]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"NAME": "Pointville", "ISO_A2": "PV"},
                    "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}
                }
            ]
        }"#
    }

    #[test]
    fn test_parse_skips_placeholder_and_points() {
        let regions = parse_regions(sample()).unwrap();
        let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Squareland", "Twin Isles"]);
    }

    #[test]
    fn test_polygon_coordinates() {
        let regions = parse_regions(sample()).unwrap();
        let square = &regions[0];
        assert_eq!(square.iso_a2, "SQ");
        assert_eq!(square.polygons.len(), 1);
        assert_eq!(square.polygons[0][0][0], (0.0, 0.0));
        assert_eq!(square.polygons[0][0][2], (10.0, 10.0));
    }

    #[test]
    fn test_multipolygon_split() {
        let regions = parse_regions(sample()).unwrap();
        let isles = &regions[1];
        assert_eq!(isles.polygons.len(), 2);
        assert_eq!(isles.rings().count(), 2);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(parse_regions("not json"), Err(MapError::Json(_))));
    }
}
