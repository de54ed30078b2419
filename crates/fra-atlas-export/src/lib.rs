//! Download formats for filtered collections: GeoJSON, flat JSON, CSV.

pub mod csv;
pub mod geojson;
pub mod rows;

use thiserror::Error;

pub use csv::{CsvRecord, to_csv};
pub use geojson::{Feature, FeatureCollection, Geometry, assets_to_geojson, claims_to_geojson};
pub use rows::{ClaimRow, RecommendationRow};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pretty-printed JSON array of flattened rows.
pub fn to_json<T: serde::Serialize>(rows: &[T]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}
