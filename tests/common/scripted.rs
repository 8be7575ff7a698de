//! Scripted prompter, identity provider and recording notifier

use async_trait::async_trait;
use carbon_share::emission::EmissionReport;
use carbon_share::error::{Error, Result};
use carbon_share::identity::IdentityLookup;
use carbon_share::workflow::{Notice, Notifier, Phase, Prompter};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Prompter answering from a fixed script
///
/// `None` for an answer makes that prompt fail as if no terminal were
/// attached.
pub struct ScriptedPrompter {
    publish: Option<bool>,
    identity: Option<Option<String>>,
    visibility_calls: AtomicUsize,
    identity_calls: AtomicUsize,
    shown: Mutex<Vec<EmissionReport>>,
}

impl ScriptedPrompter {
    fn new(publish: Option<bool>, identity: Option<Option<String>>) -> Self {
        Self {
            publish,
            identity,
            visibility_calls: AtomicUsize::new(0),
            identity_calls: AtomicUsize::new(0),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Keep the result private
    pub fn declines() -> Self {
        Self::new(Some(false), None)
    }

    /// Publish, then cancel the identity prompt
    pub fn anonymous() -> Self {
        Self::new(Some(true), Some(None))
    }

    /// Publish under `identity`
    pub fn with_identity(identity: &str) -> Self {
        Self::new(Some(true), Some(Some(identity.to_string())))
    }

    /// The visibility prompt cannot be shown
    pub fn broken() -> Self {
        Self::new(None, None)
    }

    pub fn visibility_calls(&self) -> usize {
        self.visibility_calls.load(Ordering::SeqCst)
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    /// Emission reports shown with the visibility prompt
    pub fn shown(&self) -> Vec<EmissionReport> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn confirm_publish(&self, emissions: &EmissionReport) -> Result<bool> {
        self.visibility_calls.fetch_add(1, Ordering::SeqCst);
        self.shown.lock().unwrap().push(*emissions);
        self.publish
            .ok_or_else(|| Error::Prompt("not a terminal".to_string()))
    }

    async fn ask_identity(&self) -> Result<Option<String>> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        self.identity
            .clone()
            .ok_or_else(|| Error::Prompt("not a terminal".to_string()))
    }
}

/// Identity provider with a fixed set of known users
#[derive(Default)]
pub struct MockIdentity {
    known: HashSet<String>,
    unreachable: bool,
    lookups: Mutex<Vec<String>>,
}

impl MockIdentity {
    pub fn knowing(users: &[&str]) -> Self {
        Self {
            known: users.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Every lookup fails with a transport error
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityLookup for MockIdentity {
    async fn user_exists(&self, identity: &str) -> Result<bool> {
        self.lookups.lock().unwrap().push(identity.to_string());
        if self.unreachable {
            return Err(Error::Identity("connection refused".to_string()));
        }
        Ok(self.known.contains(identity))
    }
}

/// Notifier that keeps everything it is told
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    phases: Mutex<Vec<Phase>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_notice(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
