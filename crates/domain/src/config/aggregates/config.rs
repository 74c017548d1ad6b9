use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use nfo_sweep_shared_kernel::{
    DomainError, DomainResult, FileExtension, path::with_final_extension,
};

use crate::{config::MarkerSet, model::Verdict, options::DecodeMode};

pub const DEFAULT_METADATA_EXT: &str = "nfo";
pub const DEFAULT_INVALID_EXT: &str = "invalidnfo";
/// Folders holding a single metadata file are not duplication candidates.
pub const DEFAULT_MIN_FILES: usize = 2;

/// Domain representation of one sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub root: PathBuf,
    /// Only files last modified on this local calendar date are inspected.
    pub target_date: NaiveDate,
    pub metadata_ext: FileExtension,
    pub invalid_ext: FileExtension,
    pub markers: MarkerSet,
    pub min_files: usize,
    pub decode: DecodeMode,
    pub dry_run: bool,
}

impl SweepConfig {
    /// Configuration with every knob at its default.
    pub fn new(root: impl Into<PathBuf>, target_date: NaiveDate) -> Self {
        Self {
            root: root.into(),
            target_date,
            metadata_ext: FileExtension::new(DEFAULT_METADATA_EXT),
            invalid_ext: FileExtension::new(DEFAULT_INVALID_EXT),
            markers: MarkerSet::default(),
            min_files: DEFAULT_MIN_FILES,
            decode: DecodeMode::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_extensions(
        mut self,
        metadata: impl Into<FileExtension>,
        invalid: impl Into<FileExtension>,
    ) -> Self {
        self.metadata_ext = metadata.into();
        self.invalid_ext = invalid.into();
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: MarkerSet) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn with_min_files(mut self, min_files: usize) -> Self {
        self.min_files = min_files;
        self
    }

    #[must_use]
    pub fn with_decode(mut self, decode: DecodeMode) -> Self {
        self.decode = decode;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reject settings that would make the sweep meaningless or self-feeding.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidConfiguration`] describing the first violation.
    pub fn validate(&self) -> DomainResult<()> {
        if self.metadata_ext.is_empty() {
            return Err(invalid("metadata extension must not be empty"));
        }
        if self.invalid_ext.is_empty() {
            return Err(invalid("invalid-marker extension must not be empty"));
        }
        if self.metadata_ext == self.invalid_ext {
            return Err(invalid(format!(
                "metadata extension and invalid-marker extension are both '{}'",
                self.metadata_ext
            )));
        }
        if self.markers.is_empty() {
            return Err(invalid("at least one non-empty marker is required"));
        }
        if self.min_files == 0 {
            return Err(invalid("minimum file count per folder must be at least 1"));
        }
        Ok(())
    }

    pub fn is_metadata_file(&self, name: &OsStr) -> bool {
        self.metadata_ext.matches_name(name)
    }

    pub fn is_target_date(&self, modified: NaiveDate) -> bool {
        modified == self.target_date
    }

    pub fn classify(&self, content: &str) -> Verdict {
        match self.markers.first_present(content) {
            Some(marker) => Verdict::Tagged { marker: marker.to_string() },
            None => Verdict::Untagged,
        }
    }

    /// Where an invalid metadata file is moved to: same folder and stem, new final extension.
    pub fn invalid_path_for(&self, path: &Path) -> Option<PathBuf> {
        with_final_extension(path, self.invalid_ext.as_str())
    }
}

fn invalid(reason: impl Into<String>) -> DomainError {
    DomainError::InvalidConfiguration { reason: reason.into() }
}
