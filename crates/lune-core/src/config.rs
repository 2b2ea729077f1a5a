//! Host configuration
//!
//! Defaults reproduce the stock window layout. A JSON file named by
//! `LUNE_CONFIG` can override any field; nothing is ever written back.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use lune_windows::WindowSpec;

use crate::error::CoreError;
use crate::fetch::FetchPolicy;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Primary control surface
    #[serde(deserialize_with = "primary_overrides")]
    pub primary: WindowSpec,
    /// Always-on-top companion
    #[serde(deserialize_with = "companion_overrides")]
    pub companion: WindowSpec,
    /// Open the webview inspector on the primary window
    pub dev_tools: bool,
    /// Which origins hosted content may fetch from
    pub fetch: FetchPolicy,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary: WindowSpec::primary(),
            companion: WindowSpec::companion(),
            dev_tools: false,
            fetch: FetchPolicy::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// Fields given for a window replace that role's own defaults; the rest stay.
fn overlay<'de, D>(base: WindowSpec, deserializer: D) -> std::result::Result<WindowSpec, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = Map::<String, Value>::deserialize(deserializer)?;
    let mut merged = serde_json::to_value(base).map_err(D::Error::custom)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(overrides);
    }
    serde_json::from_value(merged).map_err(D::Error::custom)
}

fn primary_overrides<'de, D>(deserializer: D) -> std::result::Result<WindowSpec, D::Error>
where
    D: Deserializer<'de>,
{
    overlay(WindowSpec::primary(), deserializer)
}

fn companion_overrides<'de, D>(deserializer: D) -> std::result::Result<WindowSpec, D::Error>
where
    D: Deserializer<'de>,
{
    overlay(WindowSpec::companion(), deserializer)
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Defaults, then the `LUNE_CONFIG` file, then dev-mode variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup("LUNE_CONFIG") {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path))?,
            _ => Self::default(),
        };

        let lune_dev = lookup("LUNE_DEV").is_some_and(|v| v == "1" || v == "true");
        let node_dev = lookup("NODE_ENV").is_some_and(|v| v == "development");
        if lune_dev || node_dev {
            config.dev_tools = true;
        }

        Ok(config)
    }
}
