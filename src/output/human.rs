#![forbid(unsafe_code)]

//! Human-readable formatter for validation results
//!
//! Each failure is printed on its own line with a colored severity label,
//! followed by a one-line summary.

use crate::result::{Failure, ValidationResult};
use crate::types::Severity;
use std::io;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Human-readable formatter
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the result as plain text
    pub fn format(&self, result: &ValidationResult) -> String {
        let mut buffer = Buffer::no_color();
        // Writing into an in-memory buffer does not fail
        let _ = self.write(result, &mut buffer);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Write the result to `out`, coloring severity labels when `out` supports it
    pub fn write<W: WriteColor>(&self, result: &ValidationResult, out: &mut W) -> io::Result<()> {
        for failure in result.failures() {
            self.write_failure(failure, out)?;
        }

        if result.is_valid() {
            writeln!(out, "No validation failures")?;
            return Ok(());
        }

        let counts = result.count_by_severity();
        writeln!(
            out,
            "{} {} ({} {}, {} {}, {} {})",
            counts.total(),
            plural(counts.total(), "failure", "failures"),
            counts.errors,
            plural(counts.errors, "error", "errors"),
            counts.warnings,
            plural(counts.warnings, "warning", "warnings"),
            counts.infos,
            plural(counts.infos, "info", "infos"),
        )
    }

    fn write_failure<W: WriteColor>(&self, failure: &Failure, out: &mut W) -> io::Result<()> {
        out.set_color(
            ColorSpec::new()
                .set_fg(Some(color_for(failure.severity)))
                .set_bold(true),
        )?;
        write!(out, "{}", failure.severity)?;
        out.reset()?;

        if failure.message.is_empty() {
            writeln!(out, ": {}", failure.field)
        } else {
            // Messages may span lines (JSON snapshots); keep continuation lines indented
            let message = failure.message.replace('\n', "\n    ");
            writeln!(out, ": {}: {}", failure.field, message)
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn color_for(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
