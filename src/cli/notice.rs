//! Terminal notifier

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use carbon_share::workflow::{Notice, Notifier, Phase};
use indicatif::ProgressBar;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Notifier that prints notices and spins while the workflow waits on
/// the network
///
/// The spinner is cleared before every prompt and notice so it never
/// overwrites them.
#[derive(Default)]
pub struct CliNotifier {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliNotifier {
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start(&self, message: String) {
        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        *slot = Some(spinner);
    }

    fn stop(&self) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl Notifier for CliNotifier {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Submitting | Phase::VerifyingIdentity | Phase::Publishing => {
                self.start(format!("{phase}..."));
            }
            Phase::Idle | Phase::Confirming | Phase::Done => self.stop(),
        }
    }

    async fn on_notice(&self, notice: &Notice) {
        self.stop();
        if notice.is_error() {
            eprintln!("{} {}: {notice}", cross(), notice.title().failure());
        } else {
            println!("{} {}: {notice}", check(), notice.title().success());
        }
    }
}
