use std::io::{self, Write};

use colored::Colorize;

use crate::migration::MigrationReport;

/// Writes the human-readable end-of-run summary.
pub fn write_completion(report: &MigrationReport, output: &mut impl Write) -> io::Result<()> {
    for error in report.skipped() {
        writeln!(output, "{} {}", "skipped:".yellow().bold(), error)?;
    }

    writeln!(output, "{}", "Migration complete.".green().bold())?;

    let renamed = format!("{} renamed", report.renamed().len());
    if report.is_complete() {
        writeln!(output, "{}", renamed)
    } else {
        let skipped = format!("{} skipped", report.skipped().len());
        writeln!(output, "{}, {}", renamed, skipped.yellow())
    }
}
