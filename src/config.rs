//! Configuration loading
//!
//! Values come from, in increasing precedence: the TOML config file,
//! `CSHARE_*` environment variables, and command-line flags (applied by the
//! binary).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Default identity provider (GitHub users API)
pub const DEFAULT_IDENTITY_URL: &str = "https://api.github.com";

/// Country sent with every submission unless configured otherwise
pub const DEFAULT_COUNTRY: &str = "Korea";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the optimize/sharing backend
    pub api_url: Option<String>,
    /// Base URL of the identity provider
    pub identity_url: String,
    /// Country reported with submissions
    pub country: String,
    /// Timeout applied to every HTTP request
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Default config file location (`<config_dir>/carbon-share/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("carbon-share").join("config.toml"))
    }

    /// Load configuration from `path` (or the default location) and apply
    /// environment overrides. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        let mut config = match path {
            Some(ref p) if p.exists() => {
                debug!(path = %p.display(), "loading config file");
                Self::from_toml(&fs::read_to_string(p)?)?
            }
            _ => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `CSHARE_*` overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("CSHARE_API_URL") {
            self.api_url = Some(url);
        }
        if let Some(url) = lookup("CSHARE_IDENTITY_URL") {
            self.identity_url = url;
        }
        if let Some(country) = lookup("CSHARE_COUNTRY") {
            self.country = country;
        }
        if let Some(secs) = lookup("CSHARE_TIMEOUT_SECS") {
            self.timeout_secs = secs.trim().parse().map_err(|_| {
                Error::Config(format!("CSHARE_TIMEOUT_SECS must be a number, got: {secs}"))
            })?;
        }
        Ok(())
    }

    /// Validated backend base URL
    pub fn api_base(&self) -> Result<Url> {
        let raw = self.api_url.as_deref().ok_or_else(|| {
            Error::Config(
                "No backend URL configured. Set CSHARE_API_URL or pass --api-url".to_string(),
            )
        })?;
        parse_base_url(raw)
    }

    /// Validated identity provider base URL
    pub fn identity_base(&self) -> Result<Url> {
        parse_base_url(&self.identity_url)
    }
}

/// Parse a base URL so that relative joins append to its path
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("not a usable base URL: {raw}")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
