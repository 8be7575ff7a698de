//! CLI commands and terminal front-end

mod logging;
mod notice;
mod prompt;
mod report;
mod style;
mod submit;
mod verify;

pub use logging::init_logging;
pub use notice::CliNotifier;
pub use prompt::DialoguerPrompter;
pub use submit::{SubmitOptions, run_submit};
pub use verify::run_verify;
