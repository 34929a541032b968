//! The `nounsmart validate` command.

use std::path::PathBuf;

use anyhow::Result;

use nounsmart_core::table::validate_table;

pub async fn execute(source: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let loaded = super::load_table(source, config_path).await?;
    let table = &loaded.table;

    println!("Noun table: {} ({} nouns)", loaded.location, table.len());
    for count in table.level_counts() {
        println!("  {}", count.label());
    }

    let warnings = validate_table(table);
    for w in &warnings {
        println!("  [row {}: {}] WARNING: {}", w.row + 1, w.singular, w.message);
    }

    if warnings.is_empty() {
        println!("All nouns valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
