//! dialoguer prompts

use async_trait::async_trait;
use carbon_share::emission::EmissionReport;
use carbon_share::error::{Error, Result};
use carbon_share::workflow::Prompter;
use dialoguer::{Confirm, Input};

/// Prompter reading answers from the terminal
pub struct DialoguerPrompter;

#[async_trait]
impl Prompter for DialoguerPrompter {
    async fn confirm_publish(&self, emissions: &EmissionReport) -> Result<bool> {
        let prompt = format!("Emissions {emissions}. Publish this code on the board?");
        tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| Error::Prompt(format!("Failed to read confirmation: {e}")))
        })
        .await
        .map_err(|e| Error::Internal(format!("prompt task failed: {e}")))?
    }

    async fn ask_identity(&self) -> Result<Option<String>> {
        let answer = tokio::task::spawn_blocking(|| {
            Input::<String>::new()
                .with_prompt("GitHub ID (leave empty to post anonymously)")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| Error::Prompt(format!("Failed to read GitHub ID: {e}")))
        })
        .await
        .map_err(|e| Error::Internal(format!("prompt task failed: {e}")))??;

        Ok((!answer.trim().is_empty()).then_some(answer))
    }
}
