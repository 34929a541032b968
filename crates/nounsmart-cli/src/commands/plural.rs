//! The `nounsmart plural` command.

use anyhow::Result;

use nounsmart_core::plural::{pluralize, rule_for};

pub fn execute(words: Vec<String>) -> Result<()> {
    anyhow::ensure!(!words.is_empty(), "give at least one noun");

    for word in &words {
        println!(
            "{} -> {} ({})",
            word.trim(),
            pluralize(word),
            rule_for(word)
        );
    }

    Ok(())
}
