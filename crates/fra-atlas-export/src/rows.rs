//! Flattened export rows.
//!
//! Downloads flatten nested records into one level: coordinates become a
//! `"lat, lon"` string and implementation steps join with `"; "`, matching
//! the original export shapes.

use serde::Serialize;

use fra_atlas_core::{Claim, PolicyRecommendation};

/// One claim, flattened for JSON/CSV download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRow {
    pub id: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub holder: String,
    pub claim_type: String,
    pub status: String,
    pub area: f64,
    /// `"latitude, longitude"`.
    pub coordinates: String,
}

impl From<&Claim> for ClaimRow {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.clone(),
            village: claim.village_name.clone(),
            district: claim.district.clone(),
            state: claim.state.as_str().to_string(),
            holder: claim.holder_name.clone(),
            claim_type: claim.claim_type.as_str().to_string(),
            status: claim.status.as_str().to_string(),
            area: claim.area_hectares,
            coordinates: format!(
                "{}, {}",
                claim.coordinates.latitude, claim.coordinates.longitude
            ),
        }
    }
}

/// One recommendation, flattened for download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRow {
    pub village: String,
    pub scheme: String,
    pub priority: String,
    pub reasoning: String,
    pub estimated_benefit: String,
    /// Steps joined with `"; "`.
    pub implementation_steps: String,
    pub generated_date: String,
}

impl From<&PolicyRecommendation> for RecommendationRow {
    fn from(rec: &PolicyRecommendation) -> Self {
        Self {
            village: rec.village_name.clone(),
            scheme: rec.recommendation_type.as_str().to_string(),
            priority: rec.priority.as_str().to_string(),
            reasoning: rec.reasoning.clone(),
            estimated_benefit: rec.estimated_benefit.clone(),
            implementation_steps: rec.implementation_steps.join("; "),
            generated_date: rec.generated_date.clone(),
        }
    }
}
