//! GeoJSON FeatureCollection export.
//!
//! One Point feature per record. GeoJSON positions are
//! `[longitude, latitude]` — the reverse of the display order used
//! everywhere else, so the swap happens exactly here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ExportError;
use fra_atlas_core::{Asset, Claim, Coordinates};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn to_string_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn point_feature<T: Serialize>(record: &T, at: Coordinates) -> Result<Feature, ExportError> {
    let mut properties = match serde_json::to_value(record)? {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".into(), other);
            map
        }
    };
    // The geometry carries the position; drop it from the properties.
    properties.remove("coordinates");
    Ok(Feature {
        kind: "Feature".into(),
        properties,
        geometry: Geometry {
            kind: "Point".into(),
            coordinates: [at.longitude, at.latitude],
        },
    })
}

/// Claims as a Point FeatureCollection.
pub fn claims_to_geojson(claims: &[&Claim]) -> Result<FeatureCollection, ExportError> {
    let features = claims
        .iter()
        .map(|c| point_feature(c, c.coordinates))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        kind: "FeatureCollection".into(),
        features,
    })
}

/// Assets as a Point FeatureCollection.
pub fn assets_to_geojson(assets: &[&Asset]) -> Result<FeatureCollection, ExportError> {
    let features = assets
        .iter()
        .map(|a| point_feature(a, a.coordinates))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        kind: "FeatureCollection".into(),
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_atlas_core::Dataset;

    #[test]
    fn one_feature_per_claim() {
        let ds = Dataset::mock();
        let refs: Vec<&Claim> = ds.claims.iter().collect();
        let fc = claims_to_geojson(&refs).unwrap();
        assert_eq!(fc.kind, "FeatureCollection");
        assert_eq!(fc.features.len(), ds.claims.len());
    }

    #[test]
    fn geometry_is_longitude_then_latitude() {
        let ds = Dataset::mock();
        let refs: Vec<&Claim> = ds.claims.iter().collect();
        let fc = claims_to_geojson(&refs).unwrap();
        for (feature, claim) in fc.features.iter().zip(&ds.claims) {
            assert_eq!(feature.geometry.kind, "Point");
            assert_eq!(
                feature.geometry.coordinates,
                [claim.coordinates.longitude, claim.coordinates.latitude]
            );
        }
    }

    #[test]
    fn properties_carry_record_fields_without_geometry() {
        let ds = Dataset::mock();
        let refs: Vec<&Asset> = ds.assets.iter().collect();
        let fc = assets_to_geojson(&refs).unwrap();
        let first = &fc.features[0];
        assert_eq!(first.properties["id"], "ast-001");
        assert_eq!(first.properties["landUseType"], "Agriculture");
        assert_eq!(first.properties["satelliteSource"], "Sentinel-2");
        assert!(first.properties.get("coordinates").is_none());
    }

    #[test]
    fn filtered_subset_exports_only_matching_features() {
        let ds = Dataset::mock();
        let odisha: Vec<&Claim> = ds
            .claims
            .iter()
            .filter(|c| c.village_name == "Simlipal Buffer")
            .collect();
        let fc = claims_to_geojson(&odisha).unwrap();
        assert_eq!(fc.features.len(), odisha.len());
        assert!(fc.features.len() < ds.claims.len());
    }

    #[test]
    fn output_parses_back_as_geojson() {
        let ds = Dataset::mock();
        let refs: Vec<&Claim> = ds.claims.iter().collect();
        let text = claims_to_geojson(&refs).unwrap().to_string_pretty().unwrap();
        let parsed: FeatureCollection = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.features.len(), ds.claims.len());
    }
}
