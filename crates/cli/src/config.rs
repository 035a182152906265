//! Driver configuration, read from the environment.

use std::path::PathBuf;

use anyhow::{Result, bail};

pub const INPUT_VAR: &str = "QUOTEALLOC_INPUT";
pub const PRETTY_VAR: &str = "QUOTEALLOC_PRETTY";
pub const VALIDATE_VAR: &str = "QUOTEALLOC_VALIDATE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON input document; the sample data set is used when unset.
    pub input: Option<PathBuf>,
    /// Pretty-print the JSON output.
    pub pretty: bool,
    /// Reject duplicate ids before allocating.
    pub validate: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: None,
            pretty: false,
            validate: true,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let input = lookup(INPUT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let pretty = match lookup(PRETTY_VAR) {
            Some(v) => parse_flag(PRETTY_VAR, &v)?,
            None => defaults.pretty,
        };
        let validate = match lookup(VALIDATE_VAR) {
            Some(v) => parse_flag(VALIDATE_VAR, &v)?,
            None => defaults.validate,
        };

        Ok(Self {
            input,
            pretty,
            validate,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean flag, got {other:?}"),
    }
}
