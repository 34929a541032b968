//! Noun table read from a local CSV file.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::instrument;

use nounsmart_core::table::NounTable;
use nounsmart_core::traits::NounSource;

use crate::error::SourceError;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NounSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> anyhow::Result<NounTable> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let table = NounTable::from_csv_str(&content).map_err(SourceError::from)?;
        tracing::info!(rows = table.len(), "loaded noun table");
        Ok(table)
    }
}
