//! Pure filter and aggregation functions over the demo collections.

pub mod filter;
pub mod stats;

pub use filter::{AssetFilter, ClaimFilter, RecommendationFilter};
pub use stats::{
    ClaimTypeCount, DashboardSummary, LandUseBreakdown, StateCount, StatusCounts, claims_by_state,
    claims_by_type, land_use_breakdown, percentage,
};
