use std::path::Path;

use nfo_sweep_domain::{MetadataFolder, SweepConfig};
use nfo_sweep_ports::{
    filesystem::{FolderListing, FolderScanner, MetadataStore},
    reporting::SweepReporter,
};
use nfo_sweep_shared_kernel::{ApplicationError, Result};
use tracing::{debug, info, warn};

use crate::dto::SweepSummary;

/// Renames metadata files that were touched on the target date but carry none of the markers.
pub struct SweepInvalidMetadata<'a> {
    scanner: &'a dyn FolderScanner,
    store: &'a dyn MetadataStore,
    reporter: &'a dyn SweepReporter,
}

impl<'a> SweepInvalidMetadata<'a> {
    pub fn new(
        scanner: &'a dyn FolderScanner,
        store: &'a dyn MetadataStore,
        reporter: &'a dyn SweepReporter,
    ) -> Self {
        Self { scanner, store, reporter }
    }

    /// Run one full sweep.
    ///
    /// Per-file read and rename failures are reported and counted, never returned.
    ///
    /// # Errors
    /// Returns an error when the configuration is invalid or the root cannot be scanned.
    pub fn run(&self, config: &SweepConfig) -> Result<SweepSummary> {
        config.validate()?;
        info!(
            root = %config.root.display(),
            date = %config.target_date,
            decode = %config.decode,
            dry_run = config.dry_run,
            "starting sweep"
        );

        let listings =
            self.scanner.scan(&config.root).map_err(|err| ApplicationError::ScanFailed {
                root: config.root.clone(),
                reason: "directory walk failed".to_string(),
                source: Some(Box::new(err)),
            })?;

        let mut summary = SweepSummary::new(config.dry_run);
        for listing in listings {
            self.sweep_folder(listing, config, &mut summary);
        }

        info!(
            folders = summary.folders_visited,
            inspected = summary.files_inspected,
            renamed = summary.files_renamed,
            errors = summary.error_count(),
            "sweep finished"
        );
        Ok(summary)
    }

    fn sweep_folder(
        &self,
        listing: FolderListing,
        config: &SweepConfig,
        summary: &mut SweepSummary,
    ) {
        summary.folders_visited += 1;
        let folder = MetadataFolder::select(listing.path, listing.files, config);
        if !folder.qualifies(config) {
            summary.folders_skipped += 1;
            debug!(
                folder = %folder.path().display(),
                count = folder.files.len(),
                "too few metadata files, skipping"
            );
            return;
        }

        for file in &folder.files {
            self.sweep_file(file, config, summary);
        }
    }

    fn sweep_file(&self, path: &Path, config: &SweepConfig, summary: &mut SweepSummary) {
        let modified = match self.store.modified_date(path) {
            Ok(date) => date,
            Err(err) => {
                summary.read_errors += 1;
                self.reporter.on_read_error(path, &err);
                return;
            }
        };
        if !config.is_target_date(modified) {
            summary.files_out_of_date += 1;
            return;
        }

        let content = match self.store.read_text(path, config.decode) {
            Ok(content) => content,
            Err(err) => {
                summary.read_errors += 1;
                self.reporter.on_read_error(path, &err);
                return;
            }
        };
        summary.files_inspected += 1;

        let verdict = config.classify(&content);
        if !verdict.is_invalid() {
            debug!(file = %path.display(), ?verdict, "tagged");
            return;
        }
        summary.files_invalid += 1;

        let Some(target) = config.invalid_path_for(path) else {
            warn!(file = %path.display(), "no file name to rename");
            return;
        };
        if config.dry_run {
            self.reporter.on_would_rename(path, &target);
            return;
        }

        match self.store.rename(path, &target) {
            Ok(()) => {
                summary.files_renamed += 1;
                self.reporter.on_renamed(path, &target);
            }
            Err(err) => {
                summary.rename_errors += 1;
                self.reporter.on_rename_error(path, &err);
            }
        }
    }
}
