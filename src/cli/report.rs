//! Console summaries printed once a command is done.
//!
//! Detailed progress goes through the log; these are the final per-job lines on stdout.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, StepResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_result(result: &CommandResult) {
    print_result_to(result, &mut io::stdout().lock());
}

pub fn print_result_to<W: Write>(result: &CommandResult, writer: &mut W) {
    for step in &result.steps {
        let line = describe(step);
        let _ = if step.report.has_failures() {
            writeln!(writer, "{} {}", FAILURE_MARK.red(), line.red())
        } else {
            writeln!(writer, "{} {}", SUCCESS_MARK.green(), line.green())
        };
    }
}

fn describe(step: &StepResult) -> String {
    let report = &step.report;
    let mut parts = vec![format!(
        "{} {}",
        report.succeeded.len(),
        plural(report.succeeded.len(), "language")
    )];
    if !report.skipped.is_empty() {
        parts.push(format!(
            "{} skipped ({})",
            report.skipped.len(),
            report.skipped.join(", ")
        ));
    }
    if !report.failed.is_empty() {
        parts.push(format!(
            "{} failed ({})",
            report.failed.len(),
            report.failed.join(", ")
        ));
    }
    format!("{}: {}", step.name, parts.join(", "))
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

pub fn print_targets(targets: &[(&str, Vec<String>)]) {
    print_targets_to(targets, &mut io::stdout().lock());
}

pub fn print_targets_to<W: Write>(targets: &[(&str, Vec<String>)], writer: &mut W) {
    let _ = writeln!(writer, "List of targets");
    for (group, names) in targets {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "-- {} --", group.bold());
        for name in names {
            let _ = writeln!(writer, "  {}", name);
        }
    }
}
