//! Aggregate configuration for host applications.
//!
//! Hosts that keep their settings in one JSON file can deserialize this
//! aggregate and hand the pieces to the crate: [`StudioConfig`] to the
//! gateway, [`RangePolicy`] to the controller. Both sections are optional;
//! a missing policy falls back to the service defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use fitlog::libs::config::Config;
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! let config = Config::read(Path::new("fitlog.json"))?;
//! if let Some(studio) = &config.studio {
//!     println!("API URL: {}", studio.api_url);
//! }
//! let policy = config.policy();
//! # Ok(())
//! # }
//! ```

use crate::api::studio::StudioConfig;
use crate::libs::validation::RangePolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration file shape.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Studio member API settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio: Option<StudioConfig>,
    /// History query limits; defaults apply when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<RangePolicy>,
}

impl Config {
    /// Reads a configuration file from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parses a configuration document.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes the configuration back to a document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective query limits, defaulted when the file has none.
    pub fn policy(&self) -> RangePolicy {
        self.policy.clone().unwrap_or_default()
    }
}
