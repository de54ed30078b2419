//! Staged-progress state machine.
//!
//! `Idle → Running { percent, label } → Done`, published through a
//! `tokio::sync::watch` channel. Each stage publishes its progress, then
//! waits out its delay. Cancellation interrupts the running stage's delay
//! and yields no result. Delays are data, so tests run the same machine
//! with zero-delay stage tables.

use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::EngineError;

/// Observable state of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Running { percent: u8, label: &'static str },
    Done,
}

/// One step of a staged pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub percent: u8,
    pub label: &'static str,
    pub delay: Duration,
}

/// A pipeline definition: an ordered stage table.
#[derive(Debug, Clone)]
pub struct StagedJob {
    stages: Vec<Stage>,
}

impl StagedJob {
    pub fn new(stages: impl Into<Vec<Stage>>) -> Self {
        Self {
            stages: stages.into(),
        }
    }

    /// Same stages with all delays removed. Used server-side and in tests,
    /// where the timer theatre adds nothing.
    pub fn zero_delay(mut self) -> Self {
        for stage in &mut self.stages {
            stage.delay = Duration::ZERO;
        }
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run the stage chain on a spawned task, then produce the result with
    /// `finish`. Progress is observable through the returned handle.
    pub fn spawn<T, F>(self, finish: F) -> JobHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(PipelineState::Idle);
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            for stage in &self.stages {
                // The caption belongs to the stage in progress, so it is
                // published before the stage's delay runs.
                tracing::debug!(percent = stage.percent, label = stage.label, "pipeline stage");
                let _ = state_tx.send(PipelineState::Running {
                    percent: stage.percent,
                    label: stage.label,
                });
                tokio::select! {
                    _ = tokio::time::sleep(stage.delay) => {}
                    _ = &mut cancel_rx => {
                        tracing::debug!("pipeline cancelled");
                        return None;
                    }
                }
            }
            let result = finish();
            let _ = state_tx.send(PipelineState::Done);
            Some(result)
        });

        JobHandle {
            progress: state_rx,
            cancel: Some(cancel_tx),
            task,
        }
    }
}

/// Handle to a running pipeline: progress observation, cancellation, join.
pub struct JobHandle<T> {
    progress: watch::Receiver<PipelineState>,
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<Option<T>>,
}

impl<T> JobHandle<T> {
    /// Current state snapshot.
    pub fn state(&self) -> PipelineState {
        *self.progress.borrow()
    }

    /// A receiver for awaiting state changes.
    pub fn watch(&self) -> watch::Receiver<PipelineState> {
        self.progress.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Request cancellation. Interrupts the running stage's delay; a run
    /// that already produced its result is unaffected.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the run to end. `None` means it was cancelled.
    pub async fn join(self) -> Result<Option<T>, EngineError> {
        Ok(self.task.await?)
    }
}

/// One-at-a-time gate for a component's pipeline runs.
///
/// The portal disables each trigger button while its own run is in flight;
/// this is that boolean gate made explicit.
pub struct JobSlot<T> {
    current: Option<JobHandle<T>>,
}

impl<T> Default for JobSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> JobSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run unless one is already in flight.
    pub fn try_start<F>(&mut self, job: StagedJob, finish: F) -> Result<&JobHandle<T>, EngineError>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        if let Some(handle) = &self.current {
            if !handle.is_finished() {
                return Err(EngineError::Busy);
            }
        }
        self.current = Some(job.spawn(finish));
        Ok(self.current.as_ref().expect("just set"))
    }

    /// Take the finished (or running) handle out of the slot.
    pub fn take(&mut self) -> Option<JobHandle<T>> {
        self.current.take()
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_finished())
    }
}
