//! Report formatting and printing utilities.
//!
//! Dropped parameters are shown in cargo-style format. Separate from the
//! resolver so that apiconsole can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ExamplesSummary, FileDiagnostic, HashSummary, InitSummary,
    ResolveSummary, ShareSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::console::{ExampleSource, Preferences};
use crate::issues::{Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Indentation for multi-line values (code, options blocks).
const BLOCK_INDENT: &str = "    ";

/// Print dropped parameters in cargo-style format to stdout.
pub fn report(issues: &[FileDiagnostic]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print dropped parameters to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[FileDiagnostic], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    // Calculate max line number width for alignment
    let max_line_width = issues
        .iter()
        .map(|i| i.diagnostic.context().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no parameter was dropped.
pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} options {} - no issues found",
            files_checked,
            if files_checked == 1 { "file" } else { "files" }
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &FileDiagnostic, writer: &mut W, max_line_width: usize) {
    let diagnostic = &issue.diagnostic;
    let context = diagnostic.context();

    let severity = diagnostic.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        diagnostic.message(),
        diagnostic.report_rule().to_string().dimmed().cyan()
    );

    let source_line = context.source_line.trim_end();
    let indent = source_line.len() - source_line.trim_start().len();
    let col = source_line[..indent].chars().count() + 1;

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        issue.path,
        context.line,
        col
    );

    let caret = "^".repeat(UnicodeWidthStr::width(source_line.trim_start()).max(1));
    let caret = match severity {
        Severity::Error => caret.red(),
        Severity::Warning => caret.yellow(),
    };
    let caret_padding = UnicodeWidthStr::width(&source_line[..indent]);

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        context.line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret,
        width = max_line_width,
        padding = caret_padding
    );

    if let Some(details) = diagnostic.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(options) = &issue.extended {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} while extending {}",
            "",
            "=".blue(),
            "note:".bold(),
            options,
            width = max_line_width
        );
    }

    if let Some(hint) = diagnostic.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[FileDiagnostic], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.diagnostic.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} dropped ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 {
            "parameter"
        } else {
            "parameters"
        },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    let stderr = &mut io::stderr().lock();

    match &result.summary {
        CommandSummary::Resolve(summary) => {
            print_resolve(summary, stdout);
            report_to(&result.issues, stderr);
            if verbose && result.issues.is_empty() {
                let _ = writeln!(stderr, "{} no parameters dropped", SUCCESS_MARK.green());
            }
        }
        CommandSummary::Check => {
            report_to(&result.issues, stdout);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, stdout);
            }
        }
        CommandSummary::Hash(summary) => print_hash(summary, stdout, stderr),
        CommandSummary::Share(summary) => {
            report_to(&result.issues, stderr);
            print_share(summary, stdout, stderr);
        }
        CommandSummary::Examples(summary) => print_examples(summary, stdout),
        CommandSummary::Init(summary) => print_init(summary, stdout, stderr),
    }
}

fn print_resolve<W: Write>(summary: &ResolveSummary, out: &mut W) {
    let _ = write!(out, "{}", summary.text);
}

fn print_hash<W: Write, E: Write>(summary: &HashSummary, out: &mut W, err: &mut E) {
    match &summary.source {
        None => {
            let _ = writeln!(out, "{} {}", "example:".bold(), "(none)".dimmed());
        }
        Some(ExampleSource::Local { path }) => {
            let _ = writeln!(out, "{} {} {}", "example:".bold(), path, "(local)".dimmed());
        }
        Some(ExampleSource::Remote { url }) => {
            let _ = writeln!(out, "{} {} {}", "example:".bold(), url, "(remote)".dimmed());
        }
        Some(ExampleSource::Inline { code }) => {
            let _ = writeln!(out, "{} {}", "example:".bold(), "(inline code)".dimmed());
            print_block(code, out);
        }
    }

    if let Some(preferences) = &summary.preferences {
        print_preferences(preferences, out);
    }

    if let Some(error) = &summary.error {
        let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
    }
}

fn print_preferences<W: Write>(preferences: &Preferences, out: &mut W) {
    let fields = [
        ("framework", preferences.framework.as_deref().unwrap_or_default()),
        ("frameworkurl", preferences.frameworkurl.as_deref().unwrap_or_default()),
        ("apikey", preferences.apikey.as_deref().unwrap_or_default()),
    ];
    for (name, value) in fields {
        if !value.is_empty() {
            let _ = writeln!(out, "{} {}", format!("{}:", name).bold(), value);
        }
    }

    let blocks = [
        ("apioptions", preferences.apioptions.as_deref()),
        ("extendapioptions", preferences.extension()),
    ];
    for (name, value) in blocks {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "{}", format!("{}:", name).bold());
            print_block(value, out);
        }
    }
}

fn print_block<W: Write>(text: &str, out: &mut W) {
    for line in text.lines() {
        let _ = writeln!(out, "{}{}", BLOCK_INDENT, line);
    }
}

fn print_share<W: Write, E: Write>(summary: &ShareSummary, out: &mut W, err: &mut E) {
    let _ = writeln!(out, "{} {}", "link:".bold(), summary.href);
    match &summary.shortener {
        Ok(request) => {
            let _ = writeln!(out, "{} {}", "shorten:".bold(), request);
        }
        Err(too_long) => {
            let _ = writeln!(
                err,
                "{} {} ({} of {} characters)",
                "warning:".bold().yellow(),
                too_long,
                too_long.length,
                too_long.limit
            );
        }
    }
}

fn print_examples<W: Write>(summary: &ExamplesSummary, out: &mut W) {
    let name_width = summary
        .groups
        .iter()
        .flat_map(|g| &g.examples)
        .map(|e| UnicodeWidthStr::width(e.name.as_str()))
        .max()
        .unwrap_or(0);

    let mut total = 0;
    for group in &summary.groups {
        let _ = writeln!(out, "{}", group.category.bold());
        for example in &group.examples {
            let padding = name_width - UnicodeWidthStr::width(example.name.as_str());
            let _ = writeln!(
                out,
                "  {}{:padding$}  {}",
                example.name,
                "",
                example.reference.dimmed(),
                padding = padding
            );
            total += 1;
        }
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} {} in {}",
            total,
            if total == 1 { "example" } else { "examples" },
            summary.root
        )
        .green()
    );
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "Error: {}", error);
    }
}

// ============================================================
// Tests
// ============================================================
