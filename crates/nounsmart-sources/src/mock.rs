//! Mock source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use nounsmart_core::table::NounTable;
use nounsmart_core::traits::NounSource;

use crate::error::SourceError;

/// A source that serves fixed CSV text, or fails, without any I/O.
pub struct MockSource {
    csv: Option<String>,
    call_count: AtomicU32,
}

impl MockSource {
    pub fn with_csv(csv: &str) -> Self {
        Self {
            csv: Some(csv.to_string()),
            call_count: AtomicU32::new(0),
        }
    }

    /// A source whose every load fails with a network error.
    pub fn failing() -> Self {
        Self {
            csv: None,
            call_count: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl NounSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn location(&self) -> String {
        "mock".into()
    }

    async fn load(&self) -> anyhow::Result<NounTable> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.csv {
            Some(csv) => Ok(NounTable::from_csv_str(csv).map_err(SourceError::from)?),
            None => Err(SourceError::Network("mock source is offline".into()).into()),
        }
    }
}
