//! Logging setup

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr, leaving stdout to prompts and results
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "carbon_share=debug,cshare=debug"
    } else {
        "carbon_share=info,cshare=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = installed {
        debug!(error = %e, "subscriber already installed, keeping it");
    }
}
