//! Identity verification
//!
//! Checks that a username exists at the identity provider before a result
//! is published under it.

mod github;

pub use github::GitHubUsers;

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Existence lookup at an identity provider
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    /// `Ok(true)` only when the provider explicitly reports the user as found
    async fn user_exists(&self, identity: &str) -> Result<bool>;
}

/// Fail-closed wrapper around an [`IdentityLookup`]
///
/// Every lookup error is reported as "not verified", so callers always get
/// a definite answer.
#[derive(Clone)]
pub struct IdentityVerifier {
    lookup: Arc<dyn IdentityLookup>,
}

impl IdentityVerifier {
    /// Verifier backed by `lookup`
    pub fn new(lookup: Arc<dyn IdentityLookup>) -> Self {
        Self { lookup }
    }

    /// Whether `identity` names an existing account
    pub async fn verify(&self, identity: &str) -> bool {
        match self.lookup.user_exists(identity).await {
            Ok(found) => {
                debug!(identity, found, "identity lookup finished");
                found
            }
            Err(e) => {
                warn!(identity, error = %e, "identity lookup failed, treating as unverified");
                false
            }
        }
    }
}
