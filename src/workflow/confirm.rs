//! Publish confirmation flow
//!
//! Two questions asked in order: publish at all, then under which identity.
//! The flow is a small state machine; each transition is a plain function
//! and [`ConfirmationFlow::run`] only feeds it answers.

use crate::emission::EmissionReport;
use crate::identity::IdentityVerifier;
use crate::types::PublishDecision;
use crate::workflow::notice::{Notice, Notifier};
use crate::workflow::prompt::Prompter;
use crate::workflow::state::{Phase, PhaseTracker};
use tracing::{debug, warn};

/// Answer to the visibility prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityAnswer {
    /// Go on to the identity prompt
    Publish,
    /// Do not publish
    KeepPrivate,
}

/// Answer to the identity prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityAnswer {
    /// Prompt dismissed without an answer
    Cancelled,
    /// Text as the user typed it
    Entered(String),
}

/// Position in the confirmation state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmStep {
    /// The identity prompt comes next
    AskIdentity,
    /// The identity must be verified before deciding
    Verify(String),
    /// Verification failed; publishing is cancelled
    Rejected(String),
    /// Final decision
    Decided(PublishDecision),
}

/// Next step once the visibility prompt is answered
pub fn after_visibility(answer: VisibilityAnswer) -> ConfirmStep {
    match answer {
        VisibilityAnswer::Publish => ConfirmStep::AskIdentity,
        VisibilityAnswer::KeepPrivate => ConfirmStep::Decided(PublishDecision::Skip),
    }
}

/// Next step once the identity prompt is answered.
///
/// Blank or whitespace-only input counts as a cancel and never reaches
/// verification. Anything else is verified and published exactly as typed,
/// so stray whitespace makes the lookup fail rather than being dropped.
pub fn after_identity(answer: IdentityAnswer) -> ConfirmStep {
    match answer {
        IdentityAnswer::Entered(text) if !text.trim().is_empty() => ConfirmStep::Verify(text),
        IdentityAnswer::Entered(_) | IdentityAnswer::Cancelled => {
            ConfirmStep::Decided(PublishDecision::anonymous())
        }
    }
}

/// Next step once the identity lookup is done
pub fn after_verification(identity: String, verified: bool) -> ConfirmStep {
    if verified {
        ConfirmStep::Decided(PublishDecision::attributed(identity))
    } else {
        ConfirmStep::Rejected(identity)
    }
}

/// Runs the confirmation prompts for one result
pub struct ConfirmationFlow<'a> {
    prompter: &'a dyn Prompter,
    verifier: &'a IdentityVerifier,
    notifier: &'a dyn Notifier,
}

impl<'a> ConfirmationFlow<'a> {
    /// Flow asking through `prompter` and checking identities with `verifier`
    pub fn new(
        prompter: &'a dyn Prompter,
        verifier: &'a IdentityVerifier,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            prompter,
            verifier,
            notifier,
        }
    }

    /// Ask the user and resolve a publish decision.
    ///
    /// A prompt that cannot be shown resolves to [`PublishDecision::Skip`].
    pub async fn run(
        &self,
        emissions: &EmissionReport,
        phases: &PhaseTracker<'_>,
    ) -> PublishDecision {
        let visibility = match self.prompter.confirm_publish(emissions).await {
            Ok(true) => VisibilityAnswer::Publish,
            Ok(false) => VisibilityAnswer::KeepPrivate,
            Err(e) => {
                warn!(error = %e, "visibility prompt failed, keeping result private");
                VisibilityAnswer::KeepPrivate
            }
        };
        debug!(?visibility, "visibility answered");

        let mut step = after_visibility(visibility);
        loop {
            step = match step {
                ConfirmStep::AskIdentity => {
                    let answer = match self.prompter.ask_identity().await {
                        Ok(Some(text)) => IdentityAnswer::Entered(text),
                        Ok(None) => IdentityAnswer::Cancelled,
                        Err(e) => {
                            warn!(error = %e, "identity prompt failed, not publishing");
                            return PublishDecision::Skip;
                        }
                    };
                    after_identity(answer)
                }
                ConfirmStep::Verify(identity) => {
                    phases.enter(Phase::VerifyingIdentity).await;
                    let verified = self.verifier.verify(&identity).await;
                    after_verification(identity, verified)
                }
                ConfirmStep::Rejected(identity) => {
                    debug!(identity, "identity rejected, cancelling publish");
                    self.notifier
                        .on_notice(&Notice::InvalidIdentity { identity })
                        .await;
                    return PublishDecision::Skip;
                }
                ConfirmStep::Decided(decision) => return decision,
            };
        }
    }
}
