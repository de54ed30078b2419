//! Simulated processing pipelines.
//!
//! Every "AI" step in the system is a staged timer chain with canned
//! output. The chains run through one explicit state machine
//! ([`progress::PipelineState`]) so real asynchronous work can replace the
//! timers later without changing the machine's shape.

pub mod ocr;
pub mod progress;
pub mod recommend;
pub mod satellite;

use thiserror::Error;

pub use ocr::{ocr_job, scan_results};
pub use progress::{JobHandle, JobSlot, PipelineState, Stage, StagedJob};
pub use recommend::{generated_recommendations, recommendation_job};
pub use satellite::satellite_job;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("a pipeline is already running")]
    Busy,
    #[error("pipeline task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
