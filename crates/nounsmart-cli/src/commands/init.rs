//! The `nounsmart init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("nounsmart.toml");
    if path.exists() {
        println!("nounsmart.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created nounsmart.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit nounsmart.toml to point at your noun list");
    println!("  2. Run: nounsmart validate");
    println!("  3. Run: nounsmart play --level s");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# nounsmart configuration

# Fixed seed for a repeatable noun order (remove for a random order)
# seed = 42

# Level to start on: "s", "es" or "ies"
default_level = "s"

# Where to load the noun list from.
# Setting NOUNSMART_CSV_URL in the environment overrides this section.
[source]
type = "http"
url = "https://raw.githubusercontent.com/kwonsungja/First-App-Nouns/main/regular_Nouns_real.csv"
timeout_secs = 30

# Alternatives:
# [source]
# type = "file"
# path = "${HOME}/nouns.csv"
#
# [source]
# type = "builtin"
"#;
