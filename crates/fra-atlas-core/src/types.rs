//! Shared domain types for FRA Atlas.
//!
//! Wire shapes use camelCase field names so exports and API responses match
//! the original portal's JSON. Dates are ISO 8601 strings throughout; no
//! entity is mutated after construction except the recommendation list,
//! which only ever grows.

use serde::{Deserialize, Serialize};

/// WGS84 point. Serialized as `{ "latitude": .., "longitude": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The four states covered by the demo dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    #[serde(rename = "Madhya Pradesh")]
    MadhyaPradesh,
    Tripura,
    Odisha,
    Telangana,
}

impl State {
    pub const ALL: [State; 4] = [
        State::MadhyaPradesh,
        State::Tripura,
        State::Odisha,
        State::Telangana,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Tripura => "Tripura",
            Self::Odisha => "Odisha",
            Self::Telangana => "Telangana",
        }
    }

    /// Parse the display name, e.g. "Madhya Pradesh".
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|st| st.as_str() == s)
    }
}

/// FRA claim category: Individual Forest Rights, Community Rights, or
/// Community Forest Resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    IFR,
    CR,
    CFR,
}

impl ClaimType {
    pub const ALL: [ClaimType; 3] = [ClaimType::IFR, ClaimType::CR, ClaimType::CFR];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IFR => "IFR",
            Self::CR => "CR",
            Self::CFR => "CFR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

/// Claim processing status. Statuses are independent tags; the system
/// enforces no transition order between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Verified,
    Granted,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Pending,
        ClaimStatus::Verified,
        ClaimStatus::Granted,
        ClaimStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Granted => "granted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|st| st.as_str() == s)
    }
}

/// A Forest Rights Act claim record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    pub village_id: String,
    pub village_name: String,
    pub district: String,
    pub state: State,
    pub holder_name: String,
    pub coordinates: Coordinates,
    pub claim_type: ClaimType,
    pub status: ClaimStatus,
    pub area_hectares: f64,
    /// ISO 8601 date string.
    pub submission_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_date: Option<String>,
    pub documents: Vec<String>,
}

/// Land-use class assigned by the (simulated) satellite pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandUseType {
    Agriculture,
    Forest,
    Water,
    Settlements,
    Degraded,
}

impl LandUseType {
    pub const ALL: [LandUseType; 5] = [
        LandUseType::Agriculture,
        LandUseType::Forest,
        LandUseType::Water,
        LandUseType::Settlements,
        LandUseType::Degraded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agriculture => "Agriculture",
            Self::Forest => "Forest",
            Self::Water => "Water",
            Self::Settlements => "Settlements",
            Self::Degraded => "Degraded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

/// A satellite-derived land-use asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub coordinates: Coordinates,
    pub land_use_type: LandUseType,
    pub area_hectares: f64,
    /// Classifier confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    pub last_updated: String,
    pub satellite_source: String,
}

/// Aggregation root for per-village analysis: a village owns the claims
/// filed from it and the assets mapped within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub id: String,
    pub name: String,
    pub district: String,
    pub state: State,
    pub coordinates: Coordinates,
    pub population: u32,
    /// Forest cover as a percentage of village area.
    pub forest_cover: f64,
    /// Composite water-availability index in `[0.0, 1.0]`.
    pub water_index: f64,
    pub claims: Vec<Claim>,
    pub assets: Vec<Asset>,
}

/// Government scheme a recommendation maps a village onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    #[serde(rename = "PM-KISAN")]
    PmKisan,
    #[serde(rename = "Jal Jeevan Mission")]
    JalJeevanMission,
    #[serde(rename = "MGNREGA")]
    Mgnrega,
    #[serde(rename = "Forest Conservation")]
    ForestConservation,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PmKisan => "PM-KISAN",
            Self::JalJeevanMission => "Jal Jeevan Mission",
            Self::Mgnrega => "MGNREGA",
            Self::ForestConservation => "Forest Conservation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        [Self::High, Self::Medium, Self::Low]
            .into_iter()
            .find(|p| p.as_str() == s)
    }
}

/// A scheme recommendation produced by the (simulated) decision-support
/// analysis for one village.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecommendation {
    pub id: String,
    pub village_id: String,
    pub village_name: String,
    pub recommendation_type: Scheme,
    pub priority: Priority,
    pub reasoning: String,
    pub estimated_benefit: String,
    pub implementation_steps: Vec<String>,
    pub generated_date: String,
}

/// Entities the (simulated) NER pass pulls out of a scanned claim form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrEntities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Output of one simulated document scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResult {
    pub extracted_text: String,
    pub confidence: f64,
    pub entities: OcrEntities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serializes_as_display_name() {
        let json = serde_json::to_string(&State::MadhyaPradesh).unwrap();
        assert_eq!(json, "\"Madhya Pradesh\"");
        let parsed: State = serde_json::from_str("\"Odisha\"").unwrap();
        assert_eq!(parsed, State::Odisha);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClaimStatus::Granted).unwrap(),
            "\"granted\""
        );
        assert_eq!(ClaimStatus::parse("rejected"), Some(ClaimStatus::Rejected));
        assert_eq!(ClaimStatus::parse("Granted"), None);
    }

    #[test]
    fn scheme_serializes_display_names() {
        assert_eq!(
            serde_json::to_string(&Scheme::PmKisan).unwrap(),
            "\"PM-KISAN\""
        );
        assert_eq!(
            serde_json::to_string(&Scheme::JalJeevanMission).unwrap(),
            "\"Jal Jeevan Mission\""
        );
    }

    #[test]
    fn claim_wire_shape_is_camel_case() {
        let claim = Claim {
            id: "fra-900".into(),
            village_id: "vil-001".into(),
            village_name: "Kanha Village".into(),
            district: "Mandla".into(),
            state: State::MadhyaPradesh,
            holder_name: "Ramesh Kumar".into(),
            coordinates: Coordinates {
                latitude: 22.3344,
                longitude: 80.6093,
            },
            claim_type: ClaimType::IFR,
            status: ClaimStatus::Pending,
            area_hectares: 2.5,
            submission_date: "2024-01-15".into(),
            verification_date: None,
            grant_date: None,
            documents: vec!["claim_form.pdf".into()],
        };
        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(value["villageName"], "Kanha Village");
        assert_eq!(value["holderName"], "Ramesh Kumar");
        assert_eq!(value["areaHectares"], 2.5);
        assert_eq!(value["coordinates"]["latitude"], 22.3344);
        // Absent optional dates are omitted, not null.
        assert!(value.get("verificationDate").is_none());
    }

    #[test]
    fn ocr_entities_skip_missing_fields() {
        let result = OcrResult {
            extracted_text: "Village: Kanha Village".into(),
            confidence: 0.92,
            entities: OcrEntities {
                village_name: Some("Kanha Village".into()),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["entities"]["villageName"], "Kanha Village");
        assert!(value["entities"].get("claimType").is_none());
    }
}
