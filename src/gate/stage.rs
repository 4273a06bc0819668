// src/gate/stage.rs

//! The record pump: feeds a stream of records through the gate to a sink.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::errors::Result;
use crate::gate::sink::RecordSink;
use crate::gate::{Route, TriggerGate};

/// Counts of records delivered to each route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageSummary {
    pub normal: u64,
    pub timed_out: u64,
}

impl StageSummary {
    pub fn total(&self) -> u64 {
        self.normal + self.timed_out
    }
}

/// Pump records from `input` through `gate` into `sink`.
///
/// The first record resolves the watch; every record is then forwarded
/// unmodified to the route chosen by the cached outcome. Records are
/// newline-delimited; the delimiter stays part of the record, and a final
/// record without a trailing newline is still delivered.
pub async fn run_stage<R, S>(
    gate: &mut TriggerGate,
    input: &mut R,
    sink: &mut S,
) -> Result<StageSummary>
where
    R: AsyncBufRead + Unpin,
    S: RecordSink,
{
    let mut summary = StageSummary::default();
    let mut record = Vec::new();

    loop {
        record.clear();
        let n = input.read_until(b'\n', &mut record).await?;
        if n == 0 {
            break;
        }

        let route = gate.route().await?;
        sink.push(route, &record).await?;

        match route {
            Route::Normal => summary.normal += 1,
            Route::TimedOut => summary.timed_out += 1,
        }
    }

    sink.flush().await?;

    debug!(
        normal = summary.normal,
        timed_out = summary.timed_out,
        "record pump drained"
    );
    Ok(summary)
}
