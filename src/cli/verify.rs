//! Verify command - check a GitHub ID without submitting anything

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use carbon_share::Config;
use carbon_share::backend::{build_http_client, create_identity_lookup};
use carbon_share::error::Result;
use carbon_share::identity::IdentityVerifier;
use indicatif::ProgressBar;
use std::time::Duration;

/// Run the verify command
pub async fn run_verify(config: &Config, name: &str) -> Result<()> {
    let client = build_http_client(config)?;
    let verifier = IdentityVerifier::new(create_identity_lookup(config, client)?);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Verifying {name}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let verified = verifier.verify(name.trim()).await;

    spinner.finish_and_clear();
    if verified {
        println!("{} {} is a valid GitHub ID", check(), name.accent());
    } else {
        eprintln!("{} {} could not be verified", cross(), name.accent());
    }
    println!("  {} {}", "Provider:".muted(), config.identity_url);
    Ok(())
}
