use serde::Serialize;

/// Counters accumulated over one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    pub dry_run: bool,
    pub folders_visited: usize,
    /// Folders holding fewer metadata files than the configured minimum.
    pub folders_skipped: usize,
    /// Metadata files left alone because of their modification date.
    pub files_out_of_date: usize,
    /// Metadata files whose content was read and classified.
    pub files_inspected: usize,
    pub files_invalid: usize,
    pub files_renamed: usize,
    pub read_errors: usize,
    pub rename_errors: usize,
}

impl SweepSummary {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run, ..Self::default() }
    }

    pub fn error_count(&self) -> usize {
        self.read_errors + self.rename_errors
    }
}
