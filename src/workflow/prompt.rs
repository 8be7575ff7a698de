//! Interactive questions asked during a run

use crate::emission::EmissionReport;
use crate::error::Result;
use async_trait::async_trait;

/// Prompter trait for the publish confirmation
///
/// Each method blocks the run until the user answers.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask whether to publish the result. `true` means publish.
    async fn confirm_publish(&self, emissions: &EmissionReport) -> Result<bool>;

    /// Ask for the identity to publish under. `None` means the user
    /// cancelled and wants to publish anonymously.
    async fn ask_identity(&self) -> Result<Option<String>>;
}
