//! Emission values prepared for display

use crate::types::SubmissionResult;
use std::fmt;

/// Round a raw emission value to one decimal place, half-up.
///
/// Non-finite values become `0.0` and negatives are clamped to `0.0`.
pub fn round_emission(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    (raw * 10.0).round() / 10.0
}

/// Before/after emissions of one submission, rounded for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionReport {
    /// Emissions of the submitted code
    pub before: f64,
    /// Emissions of the rewritten code
    pub after: f64,
}

impl EmissionReport {
    /// Report from raw values, rounded for display
    pub fn new(before: f64, after: f64) -> Self {
        Self {
            before: round_emission(before),
            after: round_emission(after),
        }
    }

    /// Report for an optimize response
    pub fn from_result(result: &SubmissionResult) -> Self {
        Self::new(result.before_emission, result.after_emission)
    }

    /// Saved emissions (negative if the rewrite got worse)
    pub fn reduction(&self) -> f64 {
        round_emission_signed(self.before - self.after)
    }

    /// Saved emissions as a percentage of the original, `None` when the
    /// original is zero
    pub fn reduction_percent(&self) -> Option<f64> {
        if self.before <= 0.0 {
            return None;
        }
        Some(round_emission_signed(
            (self.before - self.after) / self.before * 100.0,
        ))
    }
}

fn round_emission_signed(raw: f64) -> f64 {
    if raw < 0.0 {
        -round_emission(-raw)
    } else {
        round_emission(raw)
    }
}

impl fmt::Display for EmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} → {:.1}", self.before, self.after)
    }
}
