//! Shared fixtures

use super::{MockBackend, MockIdentity, RecordingNotifier, ScriptedPrompter};
use carbon_share::identity::IdentityVerifier;
use carbon_share::types::{CodeId, SubmissionResult};
use carbon_share::workflow::SubmissionController;
use std::sync::Arc;

/// The result the optimizer returns for `print(1)`
pub fn sample_result() -> SubmissionResult {
    SubmissionResult {
        code_id: CodeId::from("abc"),
        rewritten_code: "print(1)".to_string(),
        before_emission: 10.26,
        after_emission: 3.04,
    }
}

/// Controller wired to mocks, with handles to inspect them afterwards
pub struct Harness {
    pub controller: SubmissionController,
    pub backend: Arc<MockBackend>,
    pub identity: Arc<MockIdentity>,
    pub prompter: Arc<ScriptedPrompter>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(backend: MockBackend, identity: MockIdentity, prompter: ScriptedPrompter) -> Self {
        let backend = Arc::new(backend);
        let identity = Arc::new(identity);
        let prompter = Arc::new(prompter);
        let notifier = Arc::new(RecordingNotifier::default());

        let controller = SubmissionController::new(
            backend.clone(),
            IdentityVerifier::new(identity.clone()),
            prompter.clone(),
            notifier.clone(),
            "Korea",
        );

        Self {
            controller,
            backend,
            identity,
            prompter,
            notifier,
        }
    }
}
