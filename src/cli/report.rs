//! Result display: rewritten code and the before/after comparison

use crate::cli::style::Stylize;
use anstream::println;
use carbon_share::emission::EmissionReport;
use carbon_share::workflow::CompletedSubmission;

const BAR_WIDTH: usize = 30;

/// Length of a bar for `value` when `max` fills `width` cells
fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round();
    (cells.max(1.0) as usize).min(width)
}

/// Bar padded to the full width so the values line up
fn bar(value: f64, max: f64) -> String {
    let filled = "█".repeat(bar_len(value, max, BAR_WIDTH));
    format!("{filled:<BAR_WIDTH$}")
}

pub fn print_rewritten_code(submission: &CompletedSubmission) {
    println!("{}", "Optimized code".emphasis());
    println!("{}", submission.result.rewritten_code);
    println!();
}

pub fn print_comparison(emissions: &EmissionReport) {
    let max = emissions.before.max(emissions.after);
    println!("{}", "Emissions".emphasis());
    println!(
        "  {}  {}  {:.1}",
        "before".muted(),
        bar(emissions.before, max),
        emissions.before
    );
    println!(
        "  {}   {}  {:.1}",
        "after".muted(),
        bar(emissions.after, max).success(),
        emissions.after
    );
    match emissions.reduction_percent() {
        Some(percent) => println!(
            "  {}   {:.1} ({:.1}%)",
            "saved".muted(),
            emissions.reduction(),
            percent
        ),
        None => println!("  {}   {:.1}", "saved".muted(), emissions.reduction()),
    }
}
