//! Report formatting and printing utilities.
//!
//! Separate from the audit itself so the library can be used without
//! printing side effects. Everything is written to a `Write` so tests can
//! capture it.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{AuditReport, CommandResult, InitSummary};
use crate::core::{KeyUsage, LoadedLocale};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const RULE_WIDTH: usize = 30;

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    let _ = print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) -> io::Result<()> {
    match result {
        CommandResult::Check(report) => print_audit(report, verbose, writer),
        CommandResult::Init(summary) => print_init(summary, writer),
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.config_path).green()
    )
}

/// Print the full audit report.
///
/// Sections, in order: locale loading, locale-vs-locale comparison, code
/// scan, usages missing from the locales, summary.
pub fn print_audit<W: Write>(report: &AuditReport, verbose: bool, writer: &mut W) -> io::Result<()> {
    let base_dir = report.paths.base_dir.as_path();

    let names = LocaleNames::new(report);

    print_loading(&report.locale_a, base_dir, writer)?;
    print_loading(&report.locale_b, base_dir, writer)?;

    print_locale_comparison(report, &names, writer)?;
    print_code_scan(report, &names, verbose, writer)?;
    print_summary(report, writer)
}

/// How locales A and B are named in the report.
///
/// Locales are named by file name and label (`en.json`, `EN`). When both
/// files share a stem, both use their path relative to `baseDir`, and when
/// that is the same too, an `(A)`/`(B)` suffix.
struct LocaleNames {
    file_a: String,
    file_b: String,
    label_a: String,
    label_b: String,
}

impl LocaleNames {
    fn new(report: &AuditReport) -> Self {
        let a = &report.locale_a;
        let b = &report.locale_b;
        if a.label != b.label {
            return Self {
                file_a: file_name(&a.file_path),
                file_b: file_name(&b.file_path),
                label_a: a.label.clone(),
                label_b: b.label.clone(),
            };
        }

        let base_dir = report.paths.base_dir.as_path();
        let rel_a = relative_display(Path::new(&a.file_path), base_dir);
        let rel_b = relative_display(Path::new(&b.file_path), base_dir);
        if rel_a != rel_b {
            return Self {
                file_a: rel_a.clone(),
                file_b: rel_b.clone(),
                label_a: rel_a,
                label_b: rel_b,
            };
        }

        Self {
            file_a: format!("{} (A)", rel_a),
            file_b: format!("{} (B)", rel_b),
            label_a: format!("{} (A)", a.label),
            label_b: format!("{} (B)", b.label),
        }
    }
}

fn print_loading<W: Write>(locale: &LoadedLocale, base_dir: &Path, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "Loading {}...",
        relative_display(Path::new(&locale.file_path), base_dir)
    )?;
    if let Some(warning) = &locale.warning {
        let display_path = relative_display(Path::new(warning.file_path()), base_dir);
        print_error(&warning.message(&display_path), writer)?;
    }
    Ok(())
}

fn print_locale_comparison<W: Write>(
    report: &AuditReport,
    names: &LocaleNames,
    writer: &mut W,
) -> io::Result<()> {
    print_header(
        &format!("COMPARISON: {} vs {}", names.file_a, names.file_b),
        writer,
    )?;

    print_key_list(&report.diff.missing_in_b, &names.label_a, &names.label_b, writer)?;
    print_key_list(&report.diff.missing_in_a, &names.label_b, &names.label_a, writer)
}

/// Keys present in `present` but missing in `missing`, or the affirmative
/// line when there are none.
fn print_key_list<W: Write>(
    keys: &[String],
    present: &str,
    missing: &str,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer)?;
    if keys.is_empty() {
        return writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "No keys missing in {} (compared to {}).",
                missing, present
            )
            .green()
        );
    }

    writeln!(
        writer,
        "{} ({}):",
        format!("Keys present in {} but MISSING in {}", present, missing).bold(),
        keys.len()
    )?;
    for key in keys {
        writeln!(writer, "  - {}", key)?;
    }
    Ok(())
}

fn print_code_scan<W: Write>(
    report: &AuditReport,
    names: &LocaleNames,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    let base_dir = report.paths.base_dir.as_path();
    let a = &names.label_a;
    let b = &names.label_b;

    writeln!(writer)?;
    print_header(
        &format!(
            "CODEBASE SCAN: Checking usage in {}/",
            relative_display(&report.paths.source_dir, base_dir)
        ),
        writer,
    )?;

    for warning in &report.scan.warnings {
        print_error(
            &format!(
                "Failed to read {}: {}",
                relative_display(Path::new(&warning.file_path), base_dir),
                warning.error
            ),
            writer,
        )?;
    }

    if verbose {
        writeln!(
            writer,
            "Scanned {} source {}.",
            report.scan.files_scanned,
            plural(report.scan.files_scanned, "file", "files")
        )?;
    }
    writeln!(
        writer,
        "Found {} translation {} in code.",
        report.scan.usages.len(),
        plural(report.scan.usages.len(), "call", "calls")
    )?;

    let buckets = report.buckets();
    print_usage_bucket(
        &buckets.missing_in_both,
        "Keys used in code but MISSING IN BOTH files",
        "MISSING IN BOTH",
        base_dir,
        writer,
    )?;
    print_usage_bucket(
        &buckets.missing_in_a,
        &format!("Keys used in code but MISSING IN {}", a),
        &format!("MISSING IN {}", a),
        base_dir,
        writer,
    )?;
    print_usage_bucket(
        &buckets.missing_in_b,
        &format!("Keys used in code but MISSING IN {}", b),
        &format!("MISSING IN {}", b),
        base_dir,
        writer,
    )
}

/// Print one usage bucket. Empty buckets print nothing.
fn print_usage_bucket<W: Write>(
    usages: &[&KeyUsage],
    title: &str,
    tag: &str,
    base_dir: &Path,
    writer: &mut W,
) -> io::Result<()> {
    if usages.is_empty() {
        return Ok(());
    }

    writeln!(writer)?;
    writeln!(writer, "{} ({}):", title.bold(), usages.len())?;
    for usage in usages {
        writeln!(
            writer,
            "  - {}: '{}' at {}:{}",
            tag.red(),
            usage.key,
            relative_display(&usage.file_path, base_dir),
            usage.line
        )?;
    }
    Ok(())
}

fn print_summary<W: Write>(report: &AuditReport, writer: &mut W) -> io::Result<()> {
    let buckets = report.buckets();

    writeln!(writer)?;
    if report.diff.is_empty() && buckets.is_empty() {
        return writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Locales are in sync and every key used in code is defined".green()
        );
    }

    let out_of_sync = report.diff.len();
    let undefined = buckets.len();
    writeln!(
        writer,
        "{} {} locale {} out of sync, {} code {} missing a translation",
        FAILURE_MARK.red(),
        out_of_sync,
        plural(out_of_sync, "key", "keys"),
        undefined,
        plural(undefined, "usage", "usages")
    )
}

fn print_header<W: Write>(title: &str, writer: &mut W) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(writer, "{}", rule)?;
    writeln!(writer, "{}", title.bold())?;
    writeln!(writer, "{}", rule)
}

fn print_error<W: Write>(message: &str, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{} {}", "error:".bold().red(), message)
}

/// `path` relative to `base_dir`, or the full path when it lies outside.
pub fn relative_display(path: &Path, base_dir: &Path) -> String {
    match path.strip_prefix(base_dir) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

fn file_name(file_path: &str) -> String {
    Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string())
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
