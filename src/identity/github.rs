//! GitHub users API lookup

use crate::error::Result;
use crate::identity::IdentityLookup;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

/// Longest login GitHub accepts
const MAX_LOGIN_LEN: usize = 39;

/// Identity lookup against `GET {base}/users/{name}`
pub struct GitHubUsers {
    client: Client,
    base_url: Url,
}

impl GitHubUsers {
    /// `base_url` must end with `/`, e.g. `https://api.github.com/`
    pub const fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl IdentityLookup for GitHubUsers {
    async fn user_exists(&self, identity: &str) -> Result<bool> {
        if !is_valid_login(identity) {
            debug!(identity, "not a GitHub login, skipping lookup");
            return Ok(false);
        }

        let url = self
            .base_url
            .join(&format!("users/{}", urlencoding::encode(identity)))?;
        debug!(url = url.as_str(), "looking up identity");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        debug!(identity, status = status.as_u16(), "identity lookup response");
        Ok(status == StatusCode::OK)
    }
}

/// GitHub logins are ASCII letters, digits and hyphens. Anything else could
/// resolve to a different path (`.`, `..`) and must never be looked up.
fn is_valid_login(identity: &str) -> bool {
    !identity.is_empty()
        && identity.len() <= MAX_LOGIN_LEN
        && identity
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
