//! Aggregate counts and summary statistics for the dashboard.
//!
//! Outputs are sums, counts and means; there is no ranking, so ties need
//! no tie-break. Percentages over possibly-empty sets go through
//! [`percentage`], which returns 0.0 for an empty denominator instead of
//! NaN.

use serde::Serialize;

use fra_atlas_core::{Asset, Claim, ClaimStatus, ClaimType, LandUseType, State};

/// Claim counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub granted: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn of(claims: &[Claim]) -> Self {
        let mut counts = Self {
            total: claims.len(),
            ..Default::default()
        };
        for claim in claims {
            match claim.status {
                ClaimStatus::Pending => counts.pending += 1,
                ClaimStatus::Verified => counts.verified += 1,
                ClaimStatus::Granted => counts.granted += 1,
                ClaimStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    /// Granted share of all claims, in percent. 0.0 when there are no claims.
    pub fn success_rate(&self) -> f64 {
        percentage(self.granted, self.total)
    }
}

/// Per-state claim count, one bar of the "Claims by State" chart.
#[derive(Debug, Clone, Serialize)]
pub struct StateCount {
    pub state: State,
    pub claims: usize,
}

/// Per-type claim count, one slice of the distribution pie.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTypeCount {
    pub claim_type: ClaimType,
    pub count: usize,
}

/// Count, summed area and mean classifier confidence for one land-use class.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandUseBreakdown {
    pub land_use_type: LandUseType,
    pub count: usize,
    pub area_hectares: f64,
    /// Mean confidence over this class; 0.0 when the class is empty.
    pub mean_confidence: f64,
}

/// Claim count per state, covering all four states (zero included).
pub fn claims_by_state(claims: &[Claim]) -> Vec<StateCount> {
    State::ALL
        .iter()
        .map(|&state| StateCount {
            state,
            claims: claims.iter().filter(|c| c.state == state).count(),
        })
        .collect()
}

/// Claim count per claim type, covering all types (zero included).
pub fn claims_by_type(claims: &[Claim]) -> Vec<ClaimTypeCount> {
    ClaimType::ALL
        .iter()
        .map(|&claim_type| ClaimTypeCount {
            claim_type,
            count: claims.iter().filter(|c| c.claim_type == claim_type).count(),
        })
        .collect()
}

/// Count, area sum, and mean confidence per land-use class.
pub fn land_use_breakdown(assets: &[Asset]) -> Vec<LandUseBreakdown> {
    LandUseType::ALL
        .iter()
        .map(|&land_use_type| {
            let class: Vec<&Asset> = assets
                .iter()
                .filter(|a| a.land_use_type == land_use_type)
                .collect();
            let area_hectares = class.iter().map(|a| a.area_hectares).sum();
            let mean_confidence = if class.is_empty() {
                0.0
            } else {
                class.iter().map(|a| a.confidence).sum::<f64>() / class.len() as f64
            };
            LandUseBreakdown {
                land_use_type,
                count: class.len(),
                area_hectares,
                mean_confidence,
            }
        })
        .collect()
}

/// Everything the overview dashboard renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub status: StatusCounts,
    /// Granted share of all claims, percent, zero-guarded.
    pub success_rate: f64,
    pub by_state: Vec<StateCount>,
    pub by_type: Vec<ClaimTypeCount>,
    pub land_use: Vec<LandUseBreakdown>,
    pub villages_covered: usize,
}

impl DashboardSummary {
    pub fn compute(claims: &[Claim], assets: &[Asset], village_count: usize) -> Self {
        let status = StatusCounts::of(claims);
        Self {
            success_rate: status.success_rate(),
            status,
            by_state: claims_by_state(claims),
            by_type: claims_by_type(claims),
            land_use: land_use_breakdown(assets),
            villages_covered: village_count,
        }
    }
}

/// `part / whole * 100`, or 0.0 when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
