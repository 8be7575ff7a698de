//! User-facing notices and the callback that delivers them
//!
//! Different front-ends (terminal, tests, a web view) implement [`Notifier`]
//! to show phase changes and notices.

use crate::workflow::state::Phase;
use async_trait::async_trait;
use std::fmt;

/// Notice shown to the user at the end of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Nothing to submit
    EmptyInput,
    /// The optimize request failed
    SubmissionFailed {
        /// Error reported by the backend or transport
        reason: String,
    },
    /// The entered identity could not be verified; publishing was cancelled
    InvalidIdentity {
        /// Identity as entered
        identity: String,
    },
    /// The result is on the public board
    Published,
    /// The sharing request failed
    PublishFailed {
        /// Error reported by the backend or transport
        reason: String,
    },
}

impl Notice {
    /// Whether the notice reports a failure
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Published)
    }

    /// Short heading for dialogs
    pub const fn title(&self) -> &'static str {
        if self.is_error() { "Error" } else { "Success" }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Enter some code to submit"),
            Self::SubmissionFailed { reason } => {
                write!(f, "Problem while submitting the code: {reason}")
            }
            Self::InvalidIdentity { identity } => {
                write!(f, "'{identity}' is not a valid GitHub ID, nothing was published")
            }
            Self::Published => write!(f, "Code published to the board"),
            Self::PublishFailed { reason } => {
                write!(f, "Problem while publishing the code: {reason}")
            }
        }
    }
}

/// Workflow callback trait
///
/// Implement this trait to follow a workflow run.
/// - CLI implementations print notices and drive a spinner
/// - Tests record what was shown
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Called when the workflow enters a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when a notice must be shown
    async fn on_notice(&self, notice: &Notice);
}

/// Notifier that ignores everything
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_notice(&self, _notice: &Notice) {}
}
