//! Multi-predicate filters.
//!
//! A record matches a filter only if every *active* predicate matches
//! (conjunction). Inactive predicates (`None` / empty sets / empty search
//! string) match everything. Filtering preserves the input collection's
//! order.

use std::collections::HashSet;

use fra_atlas_core::{
    Asset, Claim, ClaimStatus, ClaimType, LandUseType, PolicyRecommendation, Priority, State,
};

/// Filter over [`Claim`] collections.
///
/// Mirrors the portal's map-view controls: state/district/village
/// dropdowns, claim-type and status checkbox sets, and a free-text search
/// over holder and village names.
#[derive(Debug, Clone, Default)]
pub struct ClaimFilter {
    pub state: Option<State>,
    pub district: Option<String>,
    pub village: Option<String>,
    /// Empty set means "any claim type".
    pub claim_types: HashSet<ClaimType>,
    /// Empty set means "any status".
    pub statuses: HashSet<ClaimStatus>,
    /// Case-insensitive substring over holder name and village name.
    pub search: String,
}

impl ClaimFilter {
    pub fn matches(&self, claim: &Claim) -> bool {
        if let Some(state) = self.state {
            if claim.state != state {
                return false;
            }
        }
        if let Some(district) = &self.district {
            if claim.district != *district {
                return false;
            }
        }
        if let Some(village) = &self.village {
            if claim.village_name != *village {
                return false;
            }
        }
        if !self.claim_types.is_empty() && !self.claim_types.contains(&claim.claim_type) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&claim.status) {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let holder = claim.holder_name.to_lowercase();
            let village = claim.village_name.to_lowercase();
            if !holder.contains(&needle) && !village.contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Filtered view of `claims`, in input order.
    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        claims.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Filter over [`Asset`] collections.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    /// Empty set means "any land use".
    pub land_uses: HashSet<LandUseType>,
}

impl AssetFilter {
    pub fn matches(&self, asset: &Asset) -> bool {
        self.land_uses.is_empty() || self.land_uses.contains(&asset.land_use_type)
    }

    pub fn apply<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        assets.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Filter over [`PolicyRecommendation`] collections.
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    pub village: Option<String>,
    pub priority: Option<Priority>,
}

impl RecommendationFilter {
    pub fn matches(&self, rec: &PolicyRecommendation) -> bool {
        if let Some(village) = &self.village {
            if rec.village_name != *village {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if rec.priority != priority {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, recs: &'a [PolicyRecommendation]) -> Vec<&'a PolicyRecommendation> {
        recs.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_atlas_core::Dataset;

    #[test]
    fn default_filter_matches_everything() {
        let ds = Dataset::mock();
        let filtered = ClaimFilter::default().apply(&ds.claims);
        assert_eq!(filtered.len(), ds.claims.len());
    }

    #[test]
    fn filtered_set_is_subset_satisfying_all_predicates() {
        let ds = Dataset::mock();
        let filter = ClaimFilter {
            state: Some(State::Odisha),
            claim_types: [ClaimType::IFR, ClaimType::CR].into_iter().collect(),
            statuses: [ClaimStatus::Pending, ClaimStatus::Rejected]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let filtered = filter.apply(&ds.claims);
        assert!(!filtered.is_empty());
        assert!(filtered.len() < ds.claims.len());
        for claim in &filtered {
            assert_eq!(claim.state, State::Odisha);
            assert!(filter.claim_types.contains(&claim.claim_type));
            assert!(filter.statuses.contains(&claim.status));
        }
    }

    #[test]
    fn predicates_conjoin_rather_than_union() {
        let ds = Dataset::mock();
        // Madhya Pradesh has claims, and granted claims exist elsewhere, but
        // only fra-001 is both.
        let filter = ClaimFilter {
            state: Some(State::MadhyaPradesh),
            statuses: [ClaimStatus::Granted].into_iter().collect(),
            ..Default::default()
        };
        let filtered = filter.apply(&ds.claims);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "fra-001");
    }

    #[test]
    fn search_is_case_insensitive_over_holder_and_village() {
        let ds = Dataset::mock();
        let by_holder = ClaimFilter {
            search: "rAmEsH".into(),
            ..Default::default()
        };
        assert_eq!(by_holder.apply(&ds.claims).len(), 1);

        let by_village = ClaimFilter {
            search: "simlipal".into(),
            ..Default::default()
        };
        let filtered = by_village.apply(&ds.claims);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|c| c.village_name == "Simlipal Buffer"));
    }

    #[test]
    fn search_that_matches_nothing_yields_empty() {
        let ds = Dataset::mock();
        let filter = ClaimFilter {
            search: "no such person".into(),
            ..Default::default()
        };
        assert!(filter.apply(&ds.claims).is_empty());
    }

    #[test]
    fn empty_type_set_is_inactive_not_impossible() {
        let ds = Dataset::mock();
        let filter = ClaimFilter {
            claim_types: HashSet::new(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&ds.claims).len(), ds.claims.len());
    }

    #[test]
    fn filter_preserves_input_order() {
        let ds = Dataset::mock();
        let filter = ClaimFilter {
            statuses: [ClaimStatus::Pending].into_iter().collect(),
            ..Default::default()
        };
        let ids: Vec<&str> = filter.apply(&ds.claims).iter().map(|c| c.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "mock claims are id-ordered, so output should be too");
    }

    #[test]
    fn asset_filter_by_land_use() {
        let ds = Dataset::mock();
        let filter = AssetFilter {
            land_uses: [LandUseType::Forest].into_iter().collect(),
        };
        let filtered = filter.apply(&ds.assets);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|a| a.land_use_type == LandUseType::Forest));
    }

    #[test]
    fn recommendation_filter_by_village_and_priority() {
        let ds = Dataset::mock();
        let filter = RecommendationFilter {
            village: Some("Agartala Rural".into()),
            priority: Some(Priority::High),
        };
        let filtered = filter.apply(&ds.recommendations);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "rec-001");

        let mismatch = RecommendationFilter {
            village: Some("Agartala Rural".into()),
            priority: Some(Priority::Low),
        };
        assert!(mismatch.apply(&ds.recommendations).is_empty());
    }
}
