//! Okapi module registry client.

use anyhow::{anyhow, bail, Context};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

use crate::config::{OkapiConfig, DEFAULT_TIMEOUT_SECS};
use crate::descriptor::ModuleDescriptor;
use crate::error::{AppdescError, Result};

use super::SearchBy;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// A header attached to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub name: String,
    pub value: String,
}

impl AuthHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Searches module descriptors through the Okapi proxy.
pub struct OkapiClient {
    client: Client,
    base_url: String,
    auth: Option<AuthHeader>,
}

impl OkapiClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: &str, auth: Option<AuthHeader>) -> Result<Self> {
        Self::with_timeout(base_url, auth, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: &str, auth: Option<AuthHeader>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("appdesc/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AppdescError::Remote {
                url: base_url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Build a client from configuration, with `url` taking precedence over
    /// the configured one.
    pub fn from_config(config: &OkapiConfig, url: Option<&str>) -> Result<Self> {
        let base_url = url
            .or(config.url.as_deref())
            .ok_or_else(|| anyhow!("No Okapi URL configured (use --url or okapi.url)"))?;
        let auth = config
            .auth
            .header_pair()
            .map(|(name, value)| AuthHeader::new(name, value));

        Self::with_timeout(base_url, auth, config.timeout())
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The full search URL for a query.
    pub fn search_url(&self, by: SearchBy, query: &str) -> Result<Url> {
        let endpoint = format!("{}/_/proxy/modules", self.base_url);
        Url::parse_with_params(&endpoint, &[("full", "true"), (by.query_param(), query)]).map_err(
            |e| AppdescError::Remote {
                url: endpoint.clone(),
                message: e.to_string(),
            },
        )
    }

    /// Search module descriptors.
    ///
    /// An empty query returns no results without contacting the server.
    pub fn search(&self, by: SearchBy, query: &str) -> Result<Vec<ModuleDescriptor>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.search_url(by, query)?;
        tracing::debug!("Searching modules: {}", url);

        self.fetch(url.clone()).map_err(|e| AppdescError::Remote {
            url: url.to_string(),
            message: format!("{:#}", e),
        })
    }

    fn fetch(&self, url: Url) -> anyhow::Result<Vec<ModuleDescriptor>> {
        let mut request = self
            .client
            .get(url)
            .header("Content-Type", "application/json");
        if let Some(auth) = &self.auth {
            request = request.header(auth.name.as_str(), auth.value.as_str());
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("HTTP {}: {}", status, body.trim());
        }

        response
            .json::<Vec<ModuleDescriptor>>()
            .context("Response is not a list of module descriptors")
    }
}
