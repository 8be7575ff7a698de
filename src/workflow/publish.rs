//! Sharing publisher

use crate::backend::CodeService;
use crate::types::{SharingOutcome, SharingRequest};
use crate::workflow::notice::{Notice, Notifier};
use tracing::{debug, warn};

/// Sends one sharing request and reports how it went
pub struct SharingPublisher<'a> {
    backend: &'a dyn CodeService,
    notifier: &'a dyn Notifier,
}

impl<'a> SharingPublisher<'a> {
    /// Publisher posting through `backend`
    pub fn new(backend: &'a dyn CodeService, notifier: &'a dyn Notifier) -> Self {
        Self { backend, notifier }
    }

    /// Publish once, without retrying
    pub async fn publish(&self, request: &SharingRequest) -> SharingOutcome {
        let failure = match self.backend.share(request).await {
            Ok(response) if response.is_success() => {
                debug!(code_id = %request.code_id, "published");
                self.notifier.on_notice(&Notice::Published).await;
                return SharingOutcome::Published;
            }
            Ok(response) => match response.success {
                Some(status) => format!("backend reported status {status}"),
                None => "backend did not confirm the post".to_string(),
            },
            Err(e) => e.to_string(),
        };

        warn!(code_id = %request.code_id, reason = %failure, "publishing failed");
        self.notifier
            .on_notice(&Notice::PublishFailed { reason: failure })
            .await;
        SharingOutcome::Failed
    }
}
