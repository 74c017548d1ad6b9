use std::path::{Path, PathBuf};

use crate::config::SweepConfig;

/// A folder together with the metadata files found directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFolder {
    pub path: PathBuf,
    pub files: Vec<PathBuf>,
}

impl MetadataFolder {
    /// Keep the child files whose names carry the configured metadata extension.
    pub fn select<I>(path: impl Into<PathBuf>, children: I, config: &SweepConfig) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let files = children
            .into_iter()
            .filter(|child| child.file_name().is_some_and(|name| config.is_metadata_file(name)))
            .collect();
        Self { path: path.into(), files }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the folder holds enough metadata files to be inspected at all.
    pub fn qualifies(&self, config: &SweepConfig) -> bool {
        self.files.len() >= config.min_files
    }
}
