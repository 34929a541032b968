//! The `nounsmart play` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use nounsmart_core::{Level, QuizSession};

use crate::console::Console;

pub async fn execute(
    level: Option<String>,
    seed: Option<u64>,
    source: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let start = level
        .map(|l| l.parse::<Level>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;

    let loaded = super::load_table(source, config_path).await?;
    let start = start.or(loaded.config.default_level);
    let levels = loaded.table.level_counts();

    let mut session = match seed.or(loaded.config.seed) {
        Some(seed) => QuizSession::with_seed(loaded.table, seed),
        None => QuizSession::new(loaded.table),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), levels).run(&mut session, start)
}
