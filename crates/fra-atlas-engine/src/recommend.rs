//! Simulated decision-support analysis.
//!
//! Five one-second stages with the portal's analysis captions, then two
//! additional canned recommendations appended to whatever the caller
//! already holds.

use std::time::Duration;

use fra_atlas_core::{PolicyRecommendation, Priority, Scheme};

use crate::progress::{Stage, StagedJob};

const STAGE_DELAY: Duration = Duration::from_secs(1);

const RECOMMEND_STAGES: [Stage; 5] = [
    Stage {
        percent: 20,
        label: "Analyzing FRA claim data...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 40,
        label: "Processing village demographics...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 60,
        label: "Evaluating land use patterns...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 80,
        label: "Applying policy matching rules...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 100,
        label: "Generating recommendations...",
        delay: STAGE_DELAY,
    },
];

/// The recommendation-generation pipeline definition.
pub fn recommendation_job() -> StagedJob {
    StagedJob::new(RECOMMEND_STAGES)
}

/// The two recommendations every "analysis" run produces.
pub fn generated_recommendations() -> Vec<PolicyRecommendation> {
    vec![
        PolicyRecommendation {
            id: "rec-004".into(),
            village_id: "vil-003".into(),
            village_name: "Simlipal Buffer".into(),
            recommendation_type: Scheme::ForestConservation,
            priority: Priority::High,
            reasoning: "High forest cover (85%) with active FRA claims requires conservation \
                        support"
                .into(),
            estimated_benefit: "Preserve 85 hectares of forest ecosystem".into(),
            implementation_steps: vec![
                "Establish community forest management committee".into(),
                "Provide training on sustainable forest practices".into(),
                "Set up monitoring and protection systems".into(),
            ],
            generated_date: "2024-01-20".into(),
        },
        PolicyRecommendation {
            id: "rec-005".into(),
            village_id: "vil-001".into(),
            village_name: "Kanha Village".into(),
            recommendation_type: Scheme::PmKisan,
            priority: Priority::Medium,
            reasoning: "Granted FRA patta holders engaged in agricultural activities".into(),
            estimated_benefit: "₹6,000 annual support for 15 farming families".into(),
            implementation_steps: vec![
                "Verify agricultural land ownership through FRA pattas".into(),
                "Register eligible farmers in PM-KISAN database".into(),
                "Facilitate bank account linking for direct transfers".into(),
            ],
            generated_date: "2024-01-20".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_atlas_core::Dataset;

    #[test]
    fn stage_captions_match_the_analysis_script() {
        let labels: Vec<&str> = recommendation_job()
            .stages()
            .iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels[0], "Analyzing FRA claim data...");
        assert_eq!(labels[4], "Generating recommendations...");
        assert_eq!(labels.len(), 5);
    }

    #[tokio::test]
    async fn run_appends_to_existing_recommendations() {
        let mut recs = Dataset::mock().recommendations;
        let seed = recs.len();
        let handle = recommendation_job()
            .zero_delay()
            .spawn(generated_recommendations);
        let generated = handle.join().await.unwrap().expect("not cancelled");
        recs.extend(generated);
        assert_eq!(recs.len(), seed + 2);
        assert_eq!(recs.last().unwrap().id, "rec-005");
    }

    #[test]
    fn generated_recommendations_reference_known_villages() {
        let ds = Dataset::mock();
        for rec in generated_recommendations() {
            assert!(ds.village(&rec.village_id).is_some(), "{}", rec.village_id);
        }
    }
}
