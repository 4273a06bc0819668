// src/gate/mod.rs

//! Once-per-execution trigger gate and record routing.
//!
//! The gate runs the watch loop exactly once, on the first record it sees,
//! and routes every record (the triggering one included) to one of two
//! outputs based on the cached outcome. Later records never re-run the
//! watch.

use std::sync::Arc;

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::watch::poll::run_watch;
use crate::watch::{WatchOutcome, WatchSpec};

pub mod sink;
pub mod stage;

pub use sink::{RecordSink, WriterSink};
pub use stage::{run_stage, StageSummary};

/// Which of the two outputs a record goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// A selected event fired within the timeout.
    Normal,
    /// No selected event fired within the timeout.
    TimedOut,
}

impl Route {
    pub fn for_outcome(outcome: &WatchOutcome) -> Self {
        match outcome {
            WatchOutcome::Triggered { .. } => Route::Normal,
            WatchOutcome::TimedOut => Route::TimedOut,
        }
    }
}

/// Per-execution gate state.
///
/// Constructed fresh for every pipeline execution; there is no process-wide
/// state. The outcome is resolved at most once and read-only afterwards.
#[derive(Debug)]
pub struct TriggerGate {
    fs: Arc<dyn FileSystem>,
    spec: WatchSpec,
    resolved: Option<WatchOutcome>,
}

impl TriggerGate {
    pub fn new(fs: Arc<dyn FileSystem>, spec: WatchSpec) -> Self {
        Self {
            fs,
            spec,
            resolved: None,
        }
    }

    /// The cached outcome, if the watch has run.
    pub fn outcome(&self) -> Option<&WatchOutcome> {
        self.resolved.as_ref()
    }

    /// Decide the route for the next record.
    ///
    /// The first call drives the watch loop and can take up to the
    /// configured timeout; no record moves downstream until it returns.
    /// Later calls reuse the cached outcome without touching the
    /// filesystem.
    pub async fn route(&mut self) -> Result<Route> {
        if let Some(outcome) = &self.resolved {
            return Ok(Route::for_outcome(outcome));
        }

        let outcome = run_watch(self.fs.as_ref(), &self.spec).await?;
        let route = Route::for_outcome(&outcome);
        self.resolved = Some(outcome);
        Ok(route)
    }
}
