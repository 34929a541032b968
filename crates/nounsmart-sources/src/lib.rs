//! nounsmart-sources — Noun table sources and configuration.
//!
//! Implements the `NounSource` trait for HTTP, local files and the bundled
//! sample list, and loads the nounsmart configuration file.

pub mod builtin;
pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod mock;

pub use config::{create_source, load_config, NounsmartConfig, SourceConfig};
pub use error::SourceError;
