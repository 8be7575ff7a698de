//! Common test utilities for carbon-share tests

pub mod fixtures;
pub mod mock_backend;
pub mod scripted;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_backend::MockBackend;
#[allow(unused_imports)]
pub use scripted::{MockIdentity, RecordingNotifier, ScriptedPrompter};
