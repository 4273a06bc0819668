// src/watch/poll.rs

//! Polling loop that resolves a watch to an outcome.
//!
//! This module contains a synchronous, deterministic "polling core"
//! ([`PollState`]) that consumes snapshots and decides, per cycle, whether
//! the watch keeps going or is over. It holds no clocks, channels or
//! filesystem handles, so it can be extensively unit tested without Tokio
//! or a real directory.
//!
//! The async IO shell ([`run_watch`]) is responsible for:
//! - sleeping for the polling interval between cycles
//! - taking snapshots through the [`FileSystem`] trait
//! - emitting the notices describing what is watched and how it resolved

use std::time::Duration;

use tracing::{debug, info};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::watch::diff::SnapshotDiff;
use crate::watch::snapshot::{compile_pattern, take_snapshot, Snapshot};
use crate::watch::{InterestMask, WatchOutcome, WatchSpec};

/// Decision returned by the core after observing one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep {
    /// No selected event yet and time remains: sleep and snapshot again.
    Continue,
    /// The watch is over.
    Resolved(WatchOutcome),
}

/// Pure polling core.
///
/// Holds the previous snapshot and the accumulated elapsed time. The
/// timeout is only checked *after* a comparison, so even a timeout shorter
/// than the polling interval gets one chance to observe a fast event.
#[derive(Debug)]
pub struct PollState {
    mask: InterestMask,
    timeout: Duration,
    interval: Duration,
    elapsed: Duration,
    before: Snapshot,
}

impl PollState {
    pub fn new(
        mask: InterestMask,
        timeout: Duration,
        interval: Duration,
        initial: Snapshot,
    ) -> Self {
        Self {
            mask,
            timeout,
            interval,
            elapsed: Duration::ZERO,
            before: initial,
        }
    }

    /// Feed the snapshot taken after one polling sleep into the state
    /// machine.
    pub fn observe(&mut self, after: Snapshot) -> PollStep {
        let diff = SnapshotDiff::between(&self.before, &after);

        if let Some((kind, names)) = diff.first_interesting(&self.mask) {
            return PollStep::Resolved(WatchOutcome::Triggered {
                kind,
                names: names.to_vec(),
            });
        }

        self.before = after;
        self.elapsed += self.interval;
        if self.elapsed >= self.timeout {
            PollStep::Resolved(WatchOutcome::TimedOut)
        } else {
            PollStep::Continue
        }
    }

    /// Polling time accumulated so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Run one watch to completion.
///
/// Captures an initial snapshot, then alternates sleeping and comparing
/// until a selected event fires or the timeout elapses. Exactly one notice
/// describing the outcome is emitted.
pub async fn run_watch(fs: &dyn FileSystem, spec: &WatchSpec) -> Result<WatchOutcome> {
    let (dir, pattern) = spec.target.dir_and_pattern()?;
    let matcher = compile_pattern(&pattern)?;

    info!(
        dir = %dir.display(),
        pattern = %pattern,
        timeout_secs = spec.timeout.as_secs(),
        "monitoring path"
    );
    info!(
        additions = spec.mask.additions,
        deletions = spec.mask.deletions,
        changes = spec.mask.changes,
        "monitoring event kinds"
    );

    let initial = take_snapshot(fs, &dir, &matcher)?;
    let mut state = PollState::new(spec.mask, spec.timeout, spec.poll_interval, initial);

    loop {
        tokio::time::sleep(spec.poll_interval).await;
        let after = take_snapshot(fs, &dir, &matcher)?;

        match state.observe(after) {
            PollStep::Continue => {
                debug!(
                    elapsed_secs = state.elapsed().as_secs(),
                    "no selected event yet"
                );
            }
            PollStep::Resolved(outcome) => {
                match &outcome {
                    WatchOutcome::Triggered { kind, names } => {
                        info!(%kind, files = ?names, "watch triggered");
                    }
                    WatchOutcome::TimedOut => {
                        info!("timeout elapsed without capturing any events");
                    }
                }
                return Ok(outcome);
            }
        }
    }
}
