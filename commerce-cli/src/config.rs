//! Configuration loading from environment.

use std::env;

const DEFAULT_LOG_FILTER: &str = "warn,commerce_cli=info";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Print single-line JSON instead of pretty JSON
    pub compact_json: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let log_filter = lookup("COMMERCE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compact_json = match lookup("COMMERCE_COMPACT_JSON").as_deref() {
            None | Some("") => false,
            Some(raw) => parse_flag(raw).ok_or_else(|| {
                anyhow::anyhow!("COMMERCE_COMPACT_JSON must be true/false or 1/0, got {raw}")
            })?,
        };

        Ok(Self {
            log_filter,
            compact_json,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
