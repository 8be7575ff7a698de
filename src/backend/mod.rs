//! Optimize and sharing backend
//!
//! Provides the interface the workflow needs from the code service.

mod factory;
mod http;

pub use factory::{build_http_client, create_backend, create_identity_lookup};
pub use http::HttpBackend;

use crate::error::Result;
use crate::types::{SharingRequest, SharingResponse, SubmissionRequest, SubmissionResult};
use async_trait::async_trait;

/// Code service trait for optimize and sharing calls
///
/// Implementations only move data; interpreting the sharing response is the
/// publisher's job.
#[async_trait]
pub trait CodeService: Send + Sync {
    /// Submit code for an energy-efficiency rewrite
    async fn optimize(&self, request: &SubmissionRequest) -> Result<SubmissionResult>;

    /// Post a result to the public board
    async fn share(&self, request: &SharingRequest) -> Result<SharingResponse>;
}
