//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ht_api::credentials::{self, CREDENTIALS_FILE_NAME, CredentialError};
use ht_api::{Client, ClientOptions, DEFAULT_API_URL};
use ht_core::{AggregateOptions, PercentBasis, RangePreset};
use serde::{Deserialize, Serialize};

/// Default number of entries rendered per breakdown.
pub const DEFAULT_MAX_ITEMS: usize = 30;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the WakaTime-compatible API.
    pub api_url: String,

    /// API key; overrides the one in `credentials_path` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// WakaTime configuration file holding `api_key = ...`.
    pub credentials_path: PathBuf,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,

    /// Range used when no range or dates are given.
    pub default_range: RangePreset,

    /// Maximum entries shown per breakdown.
    pub max_items: usize,

    /// Which entries get percentages recomputed during consolidation.
    pub percent_basis: PercentBasis,
}

/// Where the API key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// `api_key` in config.toml or `HT_API_KEY`.
    Config,
    /// The WakaTime credentials file.
    CredentialsFile,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("credentials_path", &self.credentials_path)
            .field("timeout_secs", &self.timeout_secs)
            .field("default_range", &self.default_range)
            .field("max_items", &self.max_items)
            .field("percent_basis", &self.percent_basis)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            credentials_path: credentials::default_credentials_path()
                .unwrap_or_else(|| PathBuf::from(CREDENTIALS_FILE_NAME)),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_range: RangePreset::default(),
            max_items: DEFAULT_MAX_ITEMS,
            percent_basis: PercentBasis::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (HT_*)
        figment = figment.merge(Env::prefixed("HT_"));

        figment.extract()
    }

    /// Finds the API key, preferring the configured one over the credentials file.
    pub fn resolve_api_key(&self) -> Result<(String, KeySource), CredentialError> {
        if let Some(key) = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        {
            return Ok((key.to_string(), KeySource::Config));
        }
        let key = credentials::load_api_key(&self.credentials_path)?;
        Ok((key, KeySource::CredentialsFile))
    }

    /// Options for building an API client from this configuration.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Builds an API client with the resolved key.
    pub fn client(&self) -> anyhow::Result<Client> {
        let (api_key, source) = self.resolve_api_key()?;
        tracing::debug!(?source, "resolved API key");
        Client::new(api_key, self.client_options()).context("failed to create API client")
    }

    pub const fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            percent_basis: self.percent_basis,
        }
    }
}

/// Returns the platform-specific config directory for ht.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ht"))
}
