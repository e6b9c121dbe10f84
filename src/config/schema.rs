//! Configuration schema definitions for appdesc.
//!
//! These structs map to `.appdesc/config.yml`. Every field is optional.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppdescConfig {
    /// Global settings
    pub settings: Settings,

    /// Remote module registry
    pub okapi: OkapiConfig,
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Connection settings for an Okapi module registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OkapiConfig {
    /// Base URL, e.g. `http://localhost:9130`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout in seconds; 0 falls back to the default
    pub timeout_secs: u64,

    /// Authorization header sent with every request
    pub auth: AuthConfig,
}

impl Default for OkapiConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth: AuthConfig::default(),
        }
    }
}

impl OkapiConfig {
    /// The effective request timeout.
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }
}

/// A custom header used for authorization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,

    /// Header name, e.g. `X-Okapi-Token`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AuthConfig {
    /// The header to send, if auth is enabled and fully configured.
    pub fn header_pair(&self) -> Option<(&str, &str)> {
        if !self.enabled {
            return None;
        }
        match (self.header.as_deref(), self.value.as_deref()) {
            (Some(header), Some(value)) if !header.is_empty() && !value.is_empty() => {
                Some((header, value))
            }
            _ => None,
        }
    }
}
