//! Workflow phase and busy state
//!
//! The controller owns the only writer. The UI gets a [`StateSignal`], which
//! can observe the state but never change it.

use crate::workflow::notice::Notifier;
use std::fmt;
use tokio::sync::watch;

/// Workflow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No submission has started yet
    #[default]
    Idle,
    /// Waiting for the optimizer
    Submitting,
    /// Asking whether to publish
    Confirming,
    /// Checking the entered identity
    VerifyingIdentity,
    /// Waiting for the sharing backend
    Publishing,
    /// Run finished, by any path
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Submitting => write!(f, "Optimizing code"),
            Self::Confirming => write!(f, "Confirming"),
            Self::VerifyingIdentity => write!(f, "Verifying identity"),
            Self::Publishing => write!(f, "Publishing"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// Snapshot of the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkflowState {
    /// Current step of the run
    pub phase: Phase,
    /// A run is in flight; new submissions are refused
    pub busy: bool,
    /// At least one run has reached `Done`
    pub has_completed: bool,
}

/// Read-only view of the controller state
#[derive(Debug, Clone)]
pub struct StateSignal {
    rx: watch::Receiver<WorkflowState>,
}

impl StateSignal {
    /// Latest state
    pub fn current(&self) -> WorkflowState {
        *self.rx.borrow()
    }

    /// Whether the submit affordance should be disabled
    pub fn is_busy(&self) -> bool {
        self.rx.borrow().busy
    }

    /// Whether any run has finished
    pub fn has_completed(&self) -> bool {
        self.rx.borrow().has_completed
    }

    /// Wait for the next state change. Returns `false` once the controller
    /// is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

/// Writer side of the state, held by the controller
#[derive(Debug)]
pub(crate) struct StateCell {
    tx: watch::Sender<WorkflowState>,
}

impl StateCell {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(WorkflowState::default());
        Self { tx }
    }

    pub(crate) fn signal(&self) -> StateSignal {
        StateSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Mark the cell busy unless a run already holds it
    pub(crate) fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        let acquired = self.tx.send_if_modified(|state| {
            if state.busy {
                return false;
            }
            state.busy = true;
            state.phase = Phase::Submitting;
            true
        });
        acquired.then(|| BusyGuard { tx: &self.tx })
    }
}

/// Holds the busy flag for one run and releases it on drop
#[derive(Debug)]
pub(crate) struct BusyGuard<'a> {
    tx: &'a watch::Sender<WorkflowState>,
}

impl BusyGuard<'_> {
    fn enter(&self, phase: Phase) {
        self.tx.send_modify(|state| state.phase = phase);
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.tx.send_modify(|state| {
            state.phase = Phase::Done;
            state.busy = false;
            state.has_completed = true;
        });
    }
}

/// Moves the workflow through its phases and reports each one
pub struct PhaseTracker<'a> {
    guard: Option<BusyGuard<'a>>,
    notifier: &'a dyn Notifier,
}

impl<'a> PhaseTracker<'a> {
    /// Tracker that only reports phases, without controller state
    pub fn detached(notifier: &'a dyn Notifier) -> Self {
        Self {
            guard: None,
            notifier,
        }
    }

    pub(crate) fn attached(guard: BusyGuard<'a>, notifier: &'a dyn Notifier) -> Self {
        Self {
            guard: Some(guard),
            notifier,
        }
    }

    /// Move to `phase` and report it
    pub async fn enter(&self, phase: Phase) {
        if let Some(ref guard) = self.guard {
            guard.enter(phase);
        }
        self.notifier.on_phase(phase).await;
    }

    /// Release the busy flag and report `Done`
    pub async fn finish(mut self) {
        drop(self.guard.take());
        self.notifier.on_phase(Phase::Done).await;
    }
}
