//! The `nounsmart levels` command.

use std::path::PathBuf;

use anyhow::Result;

use nounsmart_core::Level;

pub async fn execute(
    source: Option<String>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let loaded = super::load_table(source, config_path).await?;
    let counts = loaded.table.level_counts();

    match format.as_str() {
        "json" => {
            let body = serde_json::json!({
                "source": loaded.location,
                "total": loaded.table.len(),
                "levels": counts,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        _ => {
            use comfy_table::{Cell, Table};

            let mut table = Table::new();
            table.set_header(vec!["Level", "Nouns", "Rule"]);
            for count in &counts {
                table.add_row(vec![
                    Cell::new(count.level),
                    Cell::new(count.count),
                    Cell::new(rule_text(count.level)),
                ]);
            }

            println!("Source: {}", loaded.location);
            println!("{table}");
        }
    }

    Ok(())
}

fn rule_text(level: Level) -> &'static str {
    match level {
        Level::S => "add -s",
        Level::Es => "ends in s, sh, ch, x, z or o: add -es",
        Level::Ies => "consonant + y: change y to -ies",
    }
}
