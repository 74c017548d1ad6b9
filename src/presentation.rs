// src/presentation.rs
use std::{
    cell::RefCell,
    io::{self, Write},
    path::Path,
};

use nfo_sweep_ports::reporting::SweepReporter;
use nfo_sweep_shared_kernel::InfrastructureError;
use nfo_sweep_usecase::SweepSummary;

use crate::cli::SummaryFormat;

/// Line-oriented reporter: results on `out`, failures on `err`.
///
/// Write failures on either stream are ignored so that a closed pipe never
/// interrupts the sweep.
pub struct ConsoleReporter<O: Write, E: Write> {
    out: RefCell<O>,
    err: RefCell<E>,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out: RefCell::new(out), err: RefCell::new(err) }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

impl<O: Write, E: Write> SweepReporter for ConsoleReporter<O, E> {
    fn on_renamed(&self, from: &Path, to: &Path) {
        let (from, to) = (from.display(), to.display());
        let _ = writeln!(self.out.borrow_mut(), "Renamed: {from} -> {to}");
    }

    fn on_would_rename(&self, from: &Path, to: &Path) {
        let (from, to) = (from.display(), to.display());
        let _ = writeln!(self.out.borrow_mut(), "Would rename: {from} -> {to}");
    }

    fn on_read_error(&self, path: &Path, err: &InfrastructureError) {
        let path = path.display();
        let _ = writeln!(self.err.borrow_mut(), "Error reading {path}: {}", err.reason());
    }

    fn on_rename_error(&self, path: &Path, err: &InfrastructureError) {
        let path = path.display();
        let _ = writeln!(self.err.borrow_mut(), "Error renaming {path}: {}", err.reason());
    }
}

pub fn summary_line(summary: &SweepSummary) -> String {
    let verb = if summary.dry_run { "would rename" } else { "renamed" };
    format!(
        "Summary: {} folders ({} skipped), {} files inspected, {} out of date, {} invalid, \
         {} {}, {} read errors, {} rename errors",
        summary.folders_visited,
        summary.folders_skipped,
        summary.files_inspected,
        summary.files_out_of_date,
        summary.files_invalid,
        if summary.dry_run { summary.files_invalid } else { summary.files_renamed },
        verb,
        summary.read_errors,
        summary.rename_errors,
    )
}

/// Write the end-of-run summary: text goes to `err`, JSON to `out`.
///
/// # Errors
/// Returns an error if writing or serializing fails.
pub fn emit_summary(
    summary: &SweepSummary,
    format: SummaryFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match format {
        SummaryFormat::Text => writeln!(err, "{}", summary_line(summary)),
        SummaryFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)
        }
    }
}
