// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use nfo_sweep_domain::DecodeMode;
use nfo_sweep_shared_kernel::{InfraResult, Result};

/// DTO describing one directory discovered under the sweep root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub path: PathBuf,
    /// Immediate child regular files, full paths, unspecified order.
    pub files: Vec<PathBuf>,
}

/// Port for enumerating folders beneath a root, the root itself included.
pub trait FolderScanner {
    fn scan(&self, root: &Path) -> Result<Vec<FolderListing>>;
}

/// Port for the per-file operations of a sweep.
pub trait MetadataStore {
    /// Last-modified timestamp truncated to a local calendar date.
    fn modified_date(&self, path: &Path) -> InfraResult<NaiveDate>;

    /// Whole file content decoded according to `mode`.
    fn read_text(&self, path: &Path, mode: DecodeMode) -> InfraResult<String>;

    /// Single rename attempt that never overwrites an existing `to`.
    fn rename(&self, from: &Path, to: &Path) -> InfraResult<()>;
}
