use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use eventgate::errors::Result;
use eventgate::gate::sink::RecordSink;
use eventgate::gate::Route;

/// A fake sink that:
/// - records every routed record, in order, together with its route
/// - never writes anywhere.
pub struct CollectingSink {
    records: Arc<Mutex<Vec<(Route, Vec<u8>)>>>,
}

impl CollectingSink {
    pub fn new(records: Arc<Mutex<Vec<(Route, Vec<u8>)>>>) -> Self {
        Self { records }
    }
}

impl RecordSink for CollectingSink {
    fn push<'a>(
        &'a mut self,
        route: Route,
        record: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let records = Arc::clone(&self.records);
        Box::pin(async move {
            let mut guard = records.lock().unwrap();
            guard.push((route, record.to_vec()));
            Ok(())
        })
    }

    fn flush(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async { Ok(()) })
    }
}
