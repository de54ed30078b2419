//! Simulated satellite land-use analysis.
//!
//! Five 800 ms stages with the portal's progress captions. Completion
//! hands back the asset collection unchanged — the "classification" is
//! already baked into the fixtures.

use std::time::Duration;

use crate::progress::{Stage, StagedJob};

const STAGE_DELAY: Duration = Duration::from_millis(800);

const SATELLITE_STAGES: [Stage; 5] = [
    Stage {
        percent: 20,
        label: "Downloading satellite tiles...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 45,
        label: "Applying machine learning models...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 70,
        label: "Classifying land use types...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 85,
        label: "Classifying land use types...",
        delay: STAGE_DELAY,
    },
    Stage {
        percent: 100,
        label: "Generating confidence scores...",
        delay: STAGE_DELAY,
    },
];

/// The satellite-analysis pipeline definition.
pub fn satellite_job() -> StagedJob {
    StagedJob::new(SATELLITE_STAGES)
}
