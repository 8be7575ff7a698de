//! Service factory
//!
//! Creates backend and identity services from configuration.

use crate::backend::{CodeService, HttpBackend};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::identity::{GitHubUsers, IdentityLookup};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Build the HTTP client shared by every service
pub fn build_http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("carbon-share/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Internal(format!("failed to create HTTP client: {e}")))
}

/// Create the optimize/sharing backend
pub fn create_backend(config: &Config, client: Client) -> Result<Arc<dyn CodeService>> {
    Ok(Arc::new(HttpBackend::new(client, config.api_base()?)))
}

/// Create the identity lookup service
pub fn create_identity_lookup(config: &Config, client: Client) -> Result<Arc<dyn IdentityLookup>> {
    Ok(Arc::new(GitHubUsers::new(client, config.identity_base()?)))
}
