//! carbon-share - submit code for an energy-efficiency rewrite and share it
//!
//! The library drives the submission workflow: send code to the optimizer,
//! show the emission comparison, ask whether to publish, verify the
//! optional identity and post the result to the public board.

pub mod backend;
pub mod config;
pub mod emission;
pub mod error;
pub mod identity;
pub mod types;
pub mod workflow;

pub use config::Config;
pub use error::{Error, Result};
pub use workflow::{SubmissionController, WorkflowOutcome};
