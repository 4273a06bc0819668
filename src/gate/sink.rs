// src/gate/sink.rs

//! Pluggable record sink abstraction.
//!
//! The stage talks to a [`RecordSink`] instead of concrete writers. This
//! makes it easy to swap in a collecting sink in tests while keeping the
//! production writer implementation here.
//!
//! - [`WriterSink`] is the default implementation used by `eventgate`. It
//!   writes records to two async writers (stdout, stderr or files).
//! - Tests can provide their own `RecordSink` that, for example, records
//!   which route each record took.

use std::future::Future;
use std::pin::Pin;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::errors::Result;
use crate::gate::Route;
use crate::types::OutputTarget;

/// Trait abstracting where routed records end up.
///
/// A sink must preserve record bytes and per-route ordering; the stage
/// never inspects or rewrites a record on the way through.
pub trait RecordSink: Send {
    /// Deliver one record to the given route.
    fn push<'a>(
        &'a mut self,
        route: Route,
        record: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    /// Flush any buffered output on both routes.
    fn flush(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Production sink writing records to two async writers.
pub struct WriterSink<N, T> {
    normal: N,
    timed_out: T,
}

impl<N, T> WriterSink<N, T> {
    pub fn new(normal: N, timed_out: T) -> Self {
        Self { normal, timed_out }
    }

    /// Consume the sink and hand back the two writers.
    pub fn into_parts(self) -> (N, T) {
        (self.normal, self.timed_out)
    }
}

impl<N, T> RecordSink for WriterSink<N, T>
where
    N: AsyncWrite + Unpin + Send,
    T: AsyncWrite + Unpin + Send,
{
    fn push<'a>(
        &'a mut self,
        route: Route,
        record: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            match route {
                Route::Normal => self.normal.write_all(record).await?,
                Route::TimedOut => self.timed_out.write_all(record).await?,
            }
            Ok(())
        })
    }

    fn flush(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            self.normal.flush().await?;
            self.timed_out.flush().await?;
            Ok(())
        })
    }
}

/// Open an async writer for an [`OutputTarget`].
pub async fn open_target(
    target: &OutputTarget,
) -> Result<Box<dyn AsyncWrite + Unpin + Send>> {
    Ok(match target {
        OutputTarget::Stdout => Box::new(tokio::io::stdout()),
        OutputTarget::Stderr => Box::new(tokio::io::stderr()),
        OutputTarget::File(path) => Box::new(tokio::fs::File::create(path).await?),
    })
}
