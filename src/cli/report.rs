//! Report formatting and printing utilities.
//!
//! Separate from the scan logic so hanloc can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, TranslateSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::scanner::ComponentOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Translate(summary) => {
            print_translate(summary, verbose, &mut io::stdout().lock())
        }
        CommandSummary::Init(summary) => print_init(summary, &mut io::stdout().lock()),
    }
}

fn print_translate<W: Write>(summary: &TranslateSummary, verbose: bool, writer: &mut W) {
    let Some(root) = &summary.resolved_root else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Components directory not found: {}",
                summary.configured_root
            )
            .red()
        );
        return;
    };

    if verbose {
        for component in &summary.scan.components {
            let line = match component.outcome {
                ComponentOutcome::Translated => {
                    format!("{} {}", SUCCESS_MARK.green(), component.name)
                }
                ComponentOutcome::Skipped => {
                    format!("- {}", component.name).dimmed().to_string()
                }
                ComponentOutcome::Error => format!("{} {}", FAILURE_MARK.red(), component.name),
            };
            let _ = writeln!(writer, "{}", line);
        }
        if !summary.scan.components.is_empty() {
            let _ = writeln!(writer);
        }
    }

    // Failed components are always listed, verbose or not.
    for component in &summary.scan.components {
        if component.outcome == ComponentOutcome::Error {
            let _ = writeln!(
                writer,
                "{}: {}: {}",
                "error".bold().red(),
                component.name,
                component.detail.as_deref().unwrap_or("unknown error")
            );
        }
    }

    let counts = format!(
        "Translated {} component(s), skipped {} in {}",
        summary.scan.translated,
        summary.scan.skipped,
        root.display()
    );
    if summary.scan.errors > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({} error(s))",
            FAILURE_MARK.red(),
            counts,
            summary.scan.errors.to_string().red()
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), counts.green());
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}
