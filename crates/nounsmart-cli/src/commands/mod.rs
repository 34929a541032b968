//! Subcommand implementations.

pub mod init;
pub mod levels;
pub mod play;
pub mod plural;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use nounsmart_core::NounTable;
use nounsmart_sources::config::load_config_from;
use nounsmart_sources::{create_source, NounsmartConfig, SourceConfig};

/// A loaded table together with the configuration that produced it.
pub struct Loaded {
    pub config: NounsmartConfig,
    pub location: String,
    pub table: Arc<NounTable>,
}

/// Resolve config and `--source`, then load the table once.
pub async fn load_table(source: Option<String>, config_path: Option<PathBuf>) -> Result<Loaded> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(location) = source {
        config.source = SourceConfig::from_location(&location);
    }

    let source = create_source(&config.source)?;
    let location = source.location();
    tracing::info!(source = source.name(), %location, "loading noun table");
    let table = source.load().await?;

    Ok(Loaded {
        config,
        location,
        table: Arc::new(table),
    })
}
