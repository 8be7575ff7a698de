//! HTTP code service implementation

use crate::backend::CodeService;
use crate::error::{Error, Result};
use crate::types::{SharingRequest, SharingResponse, SubmissionRequest, SubmissionResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Code service using reqwest
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a new backend client rooted at `base_url`
    ///
    /// `base_url` must end with `/` so endpoints join under it; use
    /// [`crate::config::parse_base_url`] to normalize.
    pub const fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl CodeService for HttpBackend {
    async fn optimize(&self, request: &SubmissionRequest) -> Result<SubmissionResult> {
        let url = self.endpoint("code")?;
        debug!(
            url = url.as_str(),
            country = %request.country,
            bytes = request.code.len(),
            "submitting code"
        );

        let result: SubmissionResult = self
            .client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Backend(e.to_string()))?
            .json()
            .await?;

        debug!(code_id = %result.code_id, "received optimized code");
        Ok(result)
    }

    async fn share(&self, request: &SharingRequest) -> Result<SharingResponse> {
        let url = self.endpoint("sharing")?;
        debug!(
            url = url.as_str(),
            code_id = %request.code_id,
            anonymous = request.anonymous,
            "sharing code"
        );

        let response: SharingResponse = self
            .client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Backend(e.to_string()))?
            .json()
            .await?;

        debug!(success = ?response.success, "sharing response");
        Ok(response)
    }
}
