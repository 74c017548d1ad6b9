// crates/infra/src/filesystem.rs
use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, NaiveDate};
use ignore::WalkBuilder;
use nfo_sweep_domain::DecodeMode;
use nfo_sweep_ports::filesystem::{FolderListing, FolderScanner, MetadataStore};
use nfo_sweep_shared_kernel::{ErrorContext, InfraResult, InfrastructureError, Result};
use tracing::{debug, warn};

use crate::persistence::{FileMover, FileReader, decode};

/// Filesystem adapter implementing the `FolderScanner` port with a sequential walk.
///
/// Every directory is visited: ignore files and hidden-file rules are not
/// applied. Links are never followed, so a symlinked directory is not entered
/// and a symlink to a file is not listed, even when its name ends in the
/// metadata extension. Only regular files count towards a folder.
#[derive(Debug, Default)]
pub struct WalkFolderScanner;

impl WalkFolderScanner {
    pub fn new() -> Self {
        Self
    }
}

impl FolderScanner for WalkFolderScanner {
    fn scan(&self, root: &Path) -> Result<Vec<FolderListing>> {
        ensure_walkable(root).with_context(|| format!("sweep root {}", root.display()))?;
        Ok(walk_folders(root))
    }
}

fn ensure_walkable(root: &Path) -> InfraResult<()> {
    let metadata = std::fs::metadata(root)
        .map_err(|source| InfrastructureError::Metadata { path: root.to_path_buf(), source })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::Walk {
            path: root.to_path_buf(),
            details: "not a directory".to_string(),
        });
    }
    std::fs::read_dir(root)
        .map(drop)
        .map_err(|source| InfrastructureError::FileRead { path: root.to_path_buf(), source })
}

fn walk_folders(root: &Path) -> Vec<FolderListing> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).hidden(false).follow_links(false);

    // Keyed by directory so that folders without any file still show up once.
    let mut folders: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "walk error");
                continue;
            }
        };
        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            folders.entry(entry.into_path()).or_default();
        } else if file_type.is_file() {
            let path = entry.into_path();
            if let Some(parent) = path.parent() {
                folders.entry(parent.to_path_buf()).or_default().push(path);
            }
        }
    }

    debug!(root = %root.display(), folders = folders.len(), "walk complete");
    folders.into_iter().map(|(path, files)| FolderListing { path, files }).collect()
}

/// Filesystem adapter implementing the `MetadataStore` port.
#[derive(Debug, Default)]
pub struct FsMetadataStore;

impl FsMetadataStore {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataStore for FsMetadataStore {
    fn modified_date(&self, path: &Path) -> InfraResult<NaiveDate> {
        let metadata_err =
            |source: io::Error| InfrastructureError::Metadata { path: path.to_path_buf(), source };
        let modified =
            std::fs::metadata(path).and_then(|m| m.modified()).map_err(metadata_err)?;
        Ok(DateTime::<Local>::from(modified).date_naive())
    }

    fn read_text(&self, path: &Path, mode: DecodeMode) -> InfraResult<String> {
        let bytes = FileReader::read_to_end(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        decode(bytes, mode)
            .map_err(|details| InfrastructureError::Decode { path: path.to_path_buf(), details })
    }

    fn rename(&self, from: &Path, to: &Path) -> InfraResult<()> {
        FileMover::rename_no_clobber(from, to).map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                InfrastructureError::DestinationExists { path: to.to_path_buf() }
            } else {
                InfrastructureError::FileRename {
                    from: from.to_path_buf(),
                    to: to.to_path_buf(),
                    source,
                }
            }
        })
    }
}
