//! The demo dataset.
//!
//! Everything here is fixture data constructed once at startup. Nothing is
//! persisted; reloading the process rebuilds the same collections. Claim,
//! village and recommendation ids follow the `fra-…`/`vil-…`/`rec-…`
//! numbering of the original portal fixtures.

use crate::types::{
    Asset, Claim, ClaimStatus, ClaimType, Coordinates, LandUseType, PolicyRecommendation, Priority,
    Scheme, State, Village,
};

/// In-memory collection root. Claims, assets and villages are read-only
/// after construction; recommendations are seeded here and appended to by
/// the decision-support pipeline.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub claims: Vec<Claim>,
    pub assets: Vec<Asset>,
    pub villages: Vec<Village>,
    pub recommendations: Vec<PolicyRecommendation>,
}

impl Dataset {
    /// Build the fixture dataset: four villages across the four covered
    /// states, with claims and assets nested under their villages.
    pub fn mock() -> Self {
        let claims = mock_claims();
        let assets = mock_assets();
        let villages = mock_villages(&claims, &assets);
        let recommendations = mock_recommendations();
        tracing::debug!(
            claims = claims.len(),
            assets = assets.len(),
            villages = villages.len(),
            "built demo dataset"
        );
        Self {
            claims,
            assets,
            villages,
            recommendations,
        }
    }

    pub fn claim(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }

    pub fn village(&self, id: &str) -> Option<&Village> {
        self.villages.iter().find(|v| v.id == id)
    }
}

fn claim(
    id: &str,
    village_id: &str,
    village_name: &str,
    district: &str,
    state: State,
    holder_name: &str,
    (latitude, longitude): (f64, f64),
    claim_type: ClaimType,
    status: ClaimStatus,
    area_hectares: f64,
    submission_date: &str,
    verification_date: Option<&str>,
    grant_date: Option<&str>,
    documents: &[&str],
) -> Claim {
    Claim {
        id: id.into(),
        village_id: village_id.into(),
        village_name: village_name.into(),
        district: district.into(),
        state,
        holder_name: holder_name.into(),
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        claim_type,
        status,
        area_hectares,
        submission_date: submission_date.into(),
        verification_date: verification_date.map(Into::into),
        grant_date: grant_date.map(Into::into),
        documents: documents.iter().map(|d| d.to_string()).collect(),
    }
}

fn mock_claims() -> Vec<Claim> {
    vec![
        claim(
            "fra-001",
            "vil-001",
            "Kanha Village",
            "Mandla",
            State::MadhyaPradesh,
            "Ramesh Kumar",
            (22.3344, 80.6093),
            ClaimType::IFR,
            ClaimStatus::Granted,
            2.5,
            "2024-01-15",
            Some("2024-02-10"),
            Some("2024-03-05"),
            &["claim_form.pdf", "land_survey.pdf", "community_verification.pdf"],
        ),
        claim(
            "fra-002",
            "vil-001",
            "Kanha Village",
            "Mandla",
            State::MadhyaPradesh,
            "Sunita Bai",
            (22.3398, 80.6121),
            ClaimType::IFR,
            ClaimStatus::Pending,
            1.8,
            "2024-02-02",
            None,
            None,
            &["claim_form.pdf"],
        ),
        claim(
            "fra-003",
            "vil-002",
            "Agartala Rural",
            "West Tripura",
            State::Tripura,
            "Biplab Debbarma",
            (23.8103, 91.2868),
            ClaimType::CFR,
            ClaimStatus::Verified,
            15.0,
            "2024-01-20",
            Some("2024-02-18"),
            None,
            &["cfr_application.pdf", "gram_sabha_resolution.pdf"],
        ),
        claim(
            "fra-004",
            "vil-003",
            "Simlipal Buffer",
            "Mayurbhanj",
            State::Odisha,
            "Droupadi Soren",
            (21.9497, 86.1006),
            ClaimType::CR,
            ClaimStatus::Pending,
            8.2,
            "2024-02-11",
            None,
            None,
            &["community_rights_form.pdf"],
        ),
        claim(
            "fra-005",
            "vil-003",
            "Simlipal Buffer",
            "Mayurbhanj",
            State::Odisha,
            "Mangal Murmu",
            (21.9533, 86.0958),
            ClaimType::IFR,
            ClaimStatus::Rejected,
            3.1,
            "2023-11-28",
            Some("2023-12-20"),
            None,
            &["claim_form.pdf", "objection_notice.pdf"],
        ),
        claim(
            "fra-006",
            "vil-004",
            "Pakhal Village",
            "Warangal",
            State::Telangana,
            "Lakshmi Naik",
            (17.9689, 79.9974),
            ClaimType::CFR,
            ClaimStatus::Granted,
            22.4,
            "2023-10-05",
            Some("2023-11-12"),
            Some("2024-01-08"),
            &["cfr_application.pdf", "forest_dept_noc.pdf", "boundary_sketch.pdf"],
        ),
    ]
}

fn asset(
    id: &str,
    (latitude, longitude): (f64, f64),
    land_use_type: LandUseType,
    area_hectares: f64,
    confidence: f64,
    last_updated: &str,
    satellite_source: &str,
) -> Asset {
    Asset {
        id: id.into(),
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        land_use_type,
        area_hectares,
        confidence,
        last_updated: last_updated.into(),
        satellite_source: satellite_source.into(),
    }
}

fn mock_assets() -> Vec<Asset> {
    vec![
        asset(
            "ast-001",
            (22.3350, 80.6101),
            LandUseType::Agriculture,
            12.3,
            0.91,
            "2024-01-15",
            "Sentinel-2",
        ),
        asset(
            "ast-002",
            (22.3311, 80.6154),
            LandUseType::Forest,
            48.7,
            0.95,
            "2024-01-15",
            "Sentinel-2",
        ),
        asset(
            "ast-003",
            (23.8140, 91.2819),
            LandUseType::Water,
            4.6,
            0.88,
            "2024-01-12",
            "Landsat-8",
        ),
        asset(
            "ast-004",
            (21.9481, 86.1042),
            LandUseType::Forest,
            85.0,
            0.93,
            "2024-01-15",
            "Sentinel-2",
        ),
        asset(
            "ast-005",
            (21.9550, 86.0911),
            LandUseType::Degraded,
            6.8,
            0.77,
            "2024-01-10",
            "Landsat-8",
        ),
        asset(
            "ast-006",
            (17.9702, 79.9931),
            LandUseType::Settlements,
            9.4,
            0.84,
            "2024-01-14",
            "Sentinel-2",
        ),
    ]
}

/// Asset ids mapped within each village, in village order.
const VILLAGE_ASSETS: [(&str, &[&str]); 4] = [
    ("vil-001", &["ast-001", "ast-002"]),
    ("vil-002", &["ast-003"]),
    ("vil-003", &["ast-004", "ast-005"]),
    ("vil-004", &["ast-006"]),
];

fn mock_villages(claims: &[Claim], assets: &[Asset]) -> Vec<Village> {
    let rows: [(&str, &str, &str, State, (f64, f64), u32, f64, f64); 4] = [
        (
            "vil-001",
            "Kanha Village",
            "Mandla",
            State::MadhyaPradesh,
            (22.3344, 80.6093),
            1250,
            68.0,
            0.72,
        ),
        (
            "vil-002",
            "Agartala Rural",
            "West Tripura",
            State::Tripura,
            (23.8103, 91.2868),
            3400,
            45.0,
            0.81,
        ),
        (
            "vil-003",
            "Simlipal Buffer",
            "Mayurbhanj",
            State::Odisha,
            (21.9497, 86.1006),
            890,
            85.0,
            0.58,
        ),
        (
            "vil-004",
            "Pakhal Village",
            "Warangal",
            State::Telangana,
            (17.9689, 79.9974),
            2100,
            52.0,
            0.66,
        ),
    ];

    rows.into_iter()
        .map(
            |(id, name, district, state, (latitude, longitude), population, forest_cover, water_index)| {
                let owned_assets: Vec<Asset> = VILLAGE_ASSETS
                    .iter()
                    .find(|(vid, _)| *vid == id)
                    .map(|(_, ids)| {
                        assets
                            .iter()
                            .filter(|a| ids.contains(&a.id.as_str()))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                Village {
                    id: id.into(),
                    name: name.into(),
                    district: district.into(),
                    state,
                    coordinates: Coordinates {
                        latitude,
                        longitude,
                    },
                    population,
                    forest_cover,
                    water_index,
                    claims: claims.iter().filter(|c| c.village_id == id).cloned().collect(),
                    assets: owned_assets,
                }
            },
        )
        .collect()
}

fn mock_recommendations() -> Vec<PolicyRecommendation> {
    vec![
        PolicyRecommendation {
            id: "rec-001".into(),
            village_id: "vil-002".into(),
            village_name: "Agartala Rural".into(),
            recommendation_type: Scheme::JalJeevanMission,
            priority: Priority::High,
            reasoning: "Low water index (0.81 surface but poor household coverage) with dense \
                        settlement pattern"
                .into(),
            estimated_benefit: "Piped water connections for 3,400 residents".into(),
            implementation_steps: vec![
                "Survey existing water sources and household coverage".into(),
                "Prepare village action plan with gram panchayat".into(),
                "Submit proposal under Jal Jeevan Mission state allocation".into(),
            ],
            generated_date: "2024-01-18".into(),
        },
        PolicyRecommendation {
            id: "rec-002".into(),
            village_id: "vil-001".into(),
            village_name: "Kanha Village".into(),
            recommendation_type: Scheme::Mgnrega,
            priority: Priority::Medium,
            reasoning: "Pending IFR claimants need interim livelihood support during verification".into(),
            estimated_benefit: "100 days guaranteed employment for 40 households".into(),
            implementation_steps: vec![
                "Issue job cards to claimant households".into(),
                "Identify watershed and plantation works near claimed parcels".into(),
            ],
            generated_date: "2024-01-18".into(),
        },
        PolicyRecommendation {
            id: "rec-003".into(),
            village_id: "vil-004".into(),
            village_name: "Pakhal Village".into(),
            recommendation_type: Scheme::PmKisan,
            priority: Priority::Low,
            reasoning: "Granted CFR title covers agricultural plots eligible for income support".into(),
            estimated_benefit: "₹6,000 annual support per eligible farming family".into(),
            implementation_steps: vec![
                "Cross-check granted patta holders against PM-KISAN registry".into(),
                "Enrol unregistered eligible farmers".into(),
            ],
            generated_date: "2024-01-18".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ds = Dataset::mock();
        let claim_ids: HashSet<_> = ds.claims.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(claim_ids.len(), ds.claims.len());
        let asset_ids: HashSet<_> = ds.assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(asset_ids.len(), ds.assets.len());
        let village_ids: HashSet<_> = ds.villages.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(village_ids.len(), ds.villages.len());
    }

    #[test]
    fn claims_reference_existing_villages() {
        let ds = Dataset::mock();
        for claim in &ds.claims {
            let village = ds.village(&claim.village_id).expect("village exists");
            assert_eq!(village.name, claim.village_name);
            assert_eq!(village.state, claim.state);
        }
    }

    #[test]
    fn villages_own_their_claims_and_assets() {
        let ds = Dataset::mock();
        let nested_claims: usize = ds.villages.iter().map(|v| v.claims.len()).sum();
        assert_eq!(nested_claims, ds.claims.len());
        let nested_assets: usize = ds.villages.iter().map(|v| v.assets.len()).sum();
        assert_eq!(nested_assets, ds.assets.len());
        for village in &ds.villages {
            for claim in &village.claims {
                assert_eq!(claim.village_id, village.id);
            }
        }
    }

    #[test]
    fn all_four_states_are_covered() {
        let ds = Dataset::mock();
        let states: HashSet<_> = ds.claims.iter().map(|c| c.state).collect();
        assert_eq!(states.len(), 4);
    }

    #[test]
    fn confidences_are_probabilities() {
        let ds = Dataset::mock();
        for asset in &ds.assets {
            assert!((0.0..=1.0).contains(&asset.confidence), "{}", asset.id);
        }
    }

    #[test]
    fn recommendations_reference_existing_villages() {
        let ds = Dataset::mock();
        for rec in &ds.recommendations {
            let village = ds.village(&rec.village_id).expect("village exists");
            assert_eq!(village.name, rec.village_name);
            assert!(!rec.implementation_steps.is_empty());
        }
    }
}
