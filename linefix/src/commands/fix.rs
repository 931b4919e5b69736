//! Catalog fix command.

use crate::catalog::{Catalog, DiagnosticEntry};
use crate::constants::DEFAULT_PARAM_NAME;
use crate::document::{Document, DocumentError};
use crate::rules::{Category, Outcome, RewriteEngine};
use crate::utils::{normalize_display_path, validate_path_within_root};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::PathBuf;

/// Options for a catalog run.
#[derive(Debug)]
pub struct FixOptions {
    /// Directory catalog paths are relative to
    pub root: PathBuf,
    /// Dry-run mode (show what would change)
    pub dry_run: bool,
    /// Verbose output
    pub verbose: bool,
    /// Parameter renamed by `unused_param` entries without detail
    pub param_name: String,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
            verbose: false,
            param_name: DEFAULT_PARAM_NAME.to_owned(),
        }
    }
}

/// What happened to one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// The line was rewritten.
    Applied,
    /// No sub-pattern matched; the file was still persisted.
    Unchanged,
    /// The line number is past the end of the file.
    OutOfBounds,
    /// The file was missing, outside the root, or could not be read or written.
    Skipped,
}

/// Result for one catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResult {
    /// File as written in the catalog
    pub file: String,
    /// Targeted line
    pub line: usize,
    /// Entry category
    pub category: Category,
    /// Entry detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Outcome
    pub status: EntryStatus,
    /// Why the entry was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Summary of a catalog run.
#[derive(Debug, Default, Serialize)]
pub struct FixReport {
    /// Whether files were left untouched
    pub dry_run: bool,
    /// One result per catalog entry, in catalog order
    pub entries: Vec<EntryResult>,
    /// Distinct files written (or that would be written), sorted
    pub files: BTreeSet<String>,
    /// Applied rewrites per category
    pub applied: BTreeMap<Category, usize>,
}

impl FixReport {
    /// Number of entries with the given status.
    #[must_use]
    pub fn count(&self, status: EntryStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    fn record(&mut self, entry: &DiagnosticEntry, status: EntryStatus, reason: Option<String>) {
        if status == EntryStatus::Applied {
            *self.applied.entry(entry.category).or_default() += 1;
        }
        self.entries.push(EntryResult {
            file: normalize_display_path(&entry.file),
            line: entry.line,
            category: entry.category,
            detail: entry.detail.clone(),
            status,
            reason,
        });
    }
}

/// Apply every catalog entry in order.
///
/// Each entry re-reads its file from disk, rewrites the one targeted line
/// and writes the file back, so several entries on the same file compose.
/// A failing entry is reported and skipped; the run always reaches the end.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn run_fix<W: Write>(
    catalog: &Catalog,
    options: &FixOptions,
    mut writer: W,
) -> Result<FixReport> {
    let engine = RewriteEngine::new(options.param_name.as_str());
    let mut report = FixReport {
        dry_run: options.dry_run,
        ..FixReport::default()
    };

    if options.dry_run {
        writeln!(
            writer,
            "{}",
            "[DRY-RUN] No files will be written.".yellow()
        )?;
    }

    for entry in catalog.entries() {
        let (status, reason) = apply_entry(&mut writer, &engine, entry, options, &mut report)?;
        if options.verbose {
            eprintln!(
                "[VERBOSE] {}:{} {:?}",
                normalize_display_path(&entry.file),
                entry.line,
                status
            );
        }
        report.record(entry, status, reason);
    }

    print_summary(&mut writer, &report)?;
    Ok(report)
}

fn apply_entry<W: Write>(
    writer: &mut W,
    engine: &RewriteEngine,
    entry: &DiagnosticEntry,
    options: &FixOptions,
    report: &mut FixReport,
) -> Result<(EntryStatus, Option<String>)> {
    let display = normalize_display_path(&entry.file);
    let full_path = options.root.join(&entry.file);

    if !full_path.exists() {
        let message = DocumentError::NotFound(full_path).to_string();
        writeln!(writer, "{}", message.yellow())?;
        return Ok((EntryStatus::Skipped, Some(message)));
    }

    let full_path = match validate_path_within_root(&full_path, &options.root) {
        Ok(p) => p,
        Err(e) => {
            writeln!(writer, "  {} {}: {}", "Skip:".yellow(), display, e)?;
            return Ok((EntryStatus::Skipped, Some(e.to_string())));
        }
    };

    let mut document = match Document::load(&full_path) {
        Ok(d) => d,
        Err(e) => {
            writeln!(writer, "{}", e.to_string().red())?;
            return Ok((EntryStatus::Skipped, Some(e.to_string())));
        }
    };

    writeln!(
        writer,
        "{} {}:{} ({})",
        "Fixing".cyan(),
        display,
        entry.line,
        entry.label()
    )?;

    let outcome = engine.apply(
        &mut document,
        entry.line,
        entry.category,
        entry.detail.as_deref(),
    );
    let status = match &outcome {
        Outcome::Applied { .. } => EntryStatus::Applied,
        Outcome::Unchanged => EntryStatus::Unchanged,
        Outcome::OutOfBounds => EntryStatus::OutOfBounds,
    };

    if options.dry_run {
        if let Outcome::Applied { before, after } = &outcome {
            writeln!(writer, "  Would rewrite {}:{}", display, entry.line)?;
            writeln!(writer, "    {} {}", "-".red(), before)?;
            writeln!(writer, "    {} {}", "+".green(), after)?;
        }
        report.files.insert(display);
        return Ok((status, None));
    }

    match document.save(&full_path) {
        Ok(()) => {
            report.files.insert(display);
            Ok((status, None))
        }
        Err(e) => {
            writeln!(writer, "{}", e.to_string().red())?;
            Ok((EntryStatus::Skipped, Some(e.to_string())))
        }
    }
}

fn print_summary<W: Write>(writer: &mut W, report: &FixReport) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Processed {} files", report.files.len())?;
    for file in &report.files {
        writeln!(writer, "  - {file}")?;
    }
    Ok(())
}
