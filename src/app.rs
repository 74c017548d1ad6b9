use std::io;

use anyhow::{Context, Result};
use nfo_sweep_infra::{FsMetadataStore, WalkFolderScanner};
use nfo_sweep_usecase::{SweepInvalidMetadata, SweepSummary};
use tracing::debug;

use crate::{
    cli::{self, Args},
    logging, presentation,
    presentation::ConsoleReporter,
};

/// Run one sweep as described by `args`.
///
/// # Errors
/// Fails on invalid configuration or an unreadable root; per-file failures are only reported.
pub fn run(args: &Args) -> Result<SweepSummary> {
    logging::init(args.log_level());

    let config = cli::build_config(args).context("invalid arguments")?;
    debug!(?config, "resolved configuration");
    let scanner = WalkFolderScanner::new();
    let store = FsMetadataStore::new();
    let reporter = ConsoleReporter::stdio();

    let summary = SweepInvalidMetadata::new(&scanner, &store, &reporter)
        .run(&config)
        .with_context(|| format!("sweep of {} failed", config.root.display()))?;

    let (mut out, mut err) = (io::stdout().lock(), io::stderr().lock());
    presentation::emit_summary(&summary, args.format, &mut out, &mut err)
        .context("failed to emit summary")?;
    Ok(summary)
}
