//! Submission-and-sharing workflow
//!
//! Handles one run from code submission to the optional public post:
//! 1. Submitting - send the code to the optimizer
//! 2. Confirming - ask whether and under which identity to publish
//! 3. Publishing - post the result to the board

mod confirm;
mod controller;
mod notice;
mod prompt;
mod publish;
mod state;

pub use confirm::{
    ConfirmStep, ConfirmationFlow, IdentityAnswer, VisibilityAnswer, after_identity,
    after_verification, after_visibility,
};
pub use controller::{CompletedSubmission, PublishReport, SubmissionController, WorkflowOutcome};
pub use notice::{NoopNotifier, Notice, Notifier};
pub use prompt::Prompter;
pub use publish::SharingPublisher;
pub use state::{Phase, PhaseTracker, StateSignal, WorkflowState};
