//! Configuration loading and the source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use nounsmart_core::traits::NounSource;
use nounsmart_core::Level;

use crate::builtin::BuiltinSource;
use crate::file::FileSource;
use crate::http::HttpSource;

/// Where the noun list lives unless configured otherwise.
pub const DEFAULT_CSV_URL: &str =
    "https://raw.githubusercontent.com/kwonsungja/First-App-Nouns/main/regular_Nouns_real.csv";

/// Environment variable that replaces the configured source with a URL.
pub const CSV_URL_ENV: &str = "NOUNSMART_CSV_URL";

/// Where to load the noun table from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        url: String,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
    File {
        path: PathBuf,
    },
    Builtin,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Http {
            url: DEFAULT_CSV_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// Interpret a command-line location: `builtin`, an `http(s)://` URL,
    /// or a file path.
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.eq_ignore_ascii_case("builtin") {
            SourceConfig::Builtin
        } else if location.starts_with("http://") || location.starts_with("https://") {
            SourceConfig::Http {
                url: location.to_string(),
                timeout_secs: None,
            }
        } else {
            SourceConfig::File {
                path: PathBuf::from(location),
            }
        }
    }
}

/// Top-level nounsmart configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounsmartConfig {
    /// Noun table location.
    #[serde(default)]
    pub source: SourceConfig,
    /// Fixed seed for a repeatable noun order.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Level to start on when none is given on the command line.
    #[serde(default)]
    pub default_level: Option<Level>,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::Http { url, timeout_secs } => SourceConfig::Http {
            url: resolve_env_vars(url),
            timeout_secs: *timeout_secs,
        },
        SourceConfig::File { path } => SourceConfig::File {
            path: PathBuf::from(resolve_env_vars(&path.to_string_lossy())),
        },
        SourceConfig::Builtin => SourceConfig::Builtin,
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `nounsmart.toml` in the current directory
/// 2. `~/.config/nounsmart/config.toml`
///
/// `NOUNSMART_CSV_URL` overrides the source with an HTTP source.
pub fn load_config() -> Result<NounsmartConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<NounsmartConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("nounsmart.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading config");
            parse_config(
                &std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?,
            )
            .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => NounsmartConfig::default(),
    };

    if let Ok(url) = std::env::var(CSV_URL_ENV) {
        if !url.trim().is_empty() {
            config.source = SourceConfig::Http {
                url,
                timeout_secs: None,
            };
        }
    }

    config.source = resolve_source_config(&config.source);
    Ok(config)
}

/// Parse config TOML text.
pub fn parse_config(content: &str) -> Result<NounsmartConfig> {
    Ok(toml::from_str::<NounsmartConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("nounsmart"))
}

/// Create a source instance from its configuration.
pub fn create_source(config: &SourceConfig) -> Result<Box<dyn NounSource>> {
    match config {
        SourceConfig::Http { url, timeout_secs } => {
            Ok(Box::new(HttpSource::new(url, *timeout_secs)?))
        }
        SourceConfig::File { path } => Ok(Box::new(FileSource::new(path.clone()))),
        SourceConfig::Builtin => Ok(Box::new(BuiltinSource)),
    }
}
