//! Submission controller
//!
//! Entry point of a workflow run: validate, optimize, confirm, publish.
//! The controller is the only owner of the busy flag.

use crate::backend::CodeService;
use crate::emission::EmissionReport;
use crate::identity::IdentityVerifier;
use crate::types::{SharingOutcome, SubmissionRequest, SubmissionResult};
use crate::workflow::confirm::ConfirmationFlow;
use crate::workflow::notice::{Notice, Notifier};
use crate::workflow::prompt::Prompter;
use crate::workflow::publish::SharingPublisher;
use crate::workflow::state::{Phase, PhaseTracker, StateCell, StateSignal};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// An optimized submission, as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSubmission {
    /// Optimize response
    pub result: SubmissionResult,
    /// Rounded emissions for display
    pub emissions: EmissionReport,
}

/// What happened to the publish step of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishReport {
    /// Not published: kept private, identity rejected or prompt unavailable
    Skipped,
    /// The post reached the board
    Published,
    /// The sharing request failed
    Failed,
}

/// How a call to [`SubmissionController::submit`] ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Empty input, nothing was sent
    Rejected,
    /// Another run is in flight, nothing was sent
    Busy,
    /// The optimize request failed
    OptimizeFailed,
    /// The code was optimized; `publish` tells what happened next
    Completed {
        /// Result shown to the user
        submission: CompletedSubmission,
        /// Outcome of the publish step
        publish: PublishReport,
    },
}

/// Drives one submission at a time
pub struct SubmissionController {
    backend: Arc<dyn CodeService>,
    verifier: IdentityVerifier,
    prompter: Arc<dyn Prompter>,
    notifier: Arc<dyn Notifier>,
    country: String,
    state: StateCell,
    latest: Mutex<Option<CompletedSubmission>>,
}

impl SubmissionController {
    /// Controller submitting to `backend` for `country`
    pub fn new(
        backend: Arc<dyn CodeService>,
        verifier: IdentityVerifier,
        prompter: Arc<dyn Prompter>,
        notifier: Arc<dyn Notifier>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            verifier,
            prompter,
            notifier,
            country: country.into(),
            state: StateCell::new(),
            latest: Mutex::new(None),
        }
    }

    /// Read-only view of the busy flag and phase
    pub fn signal(&self) -> StateSignal {
        self.state.signal()
    }

    /// The most recent successful submission, if any
    pub fn latest(&self) -> Option<CompletedSubmission> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run the full workflow for `code`
    pub async fn submit(&self, code: &str) -> WorkflowOutcome {
        if code.trim().is_empty() {
            debug!("refusing empty submission");
            self.notifier.on_notice(&Notice::EmptyInput).await;
            return WorkflowOutcome::Rejected;
        }

        let Some(guard) = self.state.try_acquire() else {
            debug!("submission already in flight, ignoring");
            return WorkflowOutcome::Busy;
        };
        let phases = PhaseTracker::attached(guard, self.notifier.as_ref());
        phases.enter(Phase::Submitting).await;

        let outcome = self.run(code, &phases).await;

        phases.finish().await;
        outcome
    }

    async fn run(&self, code: &str, phases: &PhaseTracker<'_>) -> WorkflowOutcome {
        let request = SubmissionRequest::new(code, self.country.as_str());
        let result = match self.backend.optimize(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "optimize request failed");
                self.notifier
                    .on_notice(&Notice::SubmissionFailed {
                        reason: e.to_string(),
                    })
                    .await;
                return WorkflowOutcome::OptimizeFailed;
            }
        };

        let submission = CompletedSubmission {
            emissions: EmissionReport::from_result(&result),
            result,
        };
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(submission.clone());
        debug!(
            code_id = %submission.result.code_id,
            emissions = %submission.emissions,
            "code optimized"
        );

        phases.enter(Phase::Confirming).await;
        let decision = ConfirmationFlow::new(
            self.prompter.as_ref(),
            &self.verifier,
            self.notifier.as_ref(),
        )
        .run(&submission.emissions, phases)
        .await;
        debug!(?decision, "publish decision");

        let publish = match decision.sharing_request(&submission.result.code_id) {
            None => PublishReport::Skipped,
            Some(request) => {
                phases.enter(Phase::Publishing).await;
                match SharingPublisher::new(self.backend.as_ref(), self.notifier.as_ref())
                    .publish(&request)
                    .await
                {
                    SharingOutcome::Published => PublishReport::Published,
                    SharingOutcome::Failed => PublishReport::Failed,
                }
            }
        };

        WorkflowOutcome::Completed {
            submission,
            publish,
        }
    }
}
