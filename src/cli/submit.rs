//! Submit command - optimize code and optionally publish it

use crate::cli::report::{print_comparison, print_rewritten_code};
use crate::cli::{CliNotifier, DialoguerPrompter};
use carbon_share::Config;
use carbon_share::backend::{build_http_client, create_backend, create_identity_lookup};
use carbon_share::error::Result;
use carbon_share::identity::IdentityVerifier;
use carbon_share::workflow::{SubmissionController, WorkflowOutcome};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Options for the submit command
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions<'a> {
    /// File to read code from; stdin when `None` or `-`
    pub file: Option<&'a Path>,
    /// Country override
    pub country: Option<&'a str>,
}

/// Run the submit command
pub async fn run_submit(config: &Config, options: SubmitOptions<'_>) -> Result<()> {
    let client = build_http_client(config)?;
    let backend = create_backend(config, client.clone())?;
    let verifier = IdentityVerifier::new(create_identity_lookup(config, client)?);
    let country = options.country.unwrap_or(&config.country);

    let controller = SubmissionController::new(
        backend,
        verifier,
        Arc::new(DialoguerPrompter),
        Arc::new(CliNotifier::new()),
        country,
    );
    let signal = controller.signal();

    let code = read_code(options.file)?;
    let outcome = controller.submit(&code).await;

    if let WorkflowOutcome::Completed {
        submission,
        publish,
    } = &outcome
    {
        debug!(?publish, "workflow completed");
        print_rewritten_code(submission);
        if signal.has_completed() {
            print_comparison(&submission.emissions);
        }
    }

    Ok(())
}

fn read_code(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}
