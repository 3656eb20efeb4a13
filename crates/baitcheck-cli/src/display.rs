//! Plain-text rendering of a pipeline report.

use crate::pipeline::Report;

/// Print the local verdict, followed by the remote analysis (or the
/// reason it is missing) when one was requested.
pub fn print_report(report: &Report) {
    println!("=== Local model ===");
    println!("{}  ({})", report.verdict, report.prediction);

    if let Some(analysis) = &report.analysis {
        println!();
        println!("=== Remote analysis ===");
        println!("{analysis}");
    }

    if let Some(err) = &report.remote_error {
        println!();
        println!("remote analysis unavailable: {err}");
    }
}
