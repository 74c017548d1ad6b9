use std::{fs, io, path::Path};

/// Rename helpers that refuse to replace an existing destination.
pub struct FileMover;

impl FileMover {
    /// Rename `from` to `to` once, failing with [`io::ErrorKind::AlreadyExists`]
    /// when something is already at `to`.
    ///
    /// The existence check and the rename are separate calls, not one atomic step.
    pub fn rename_no_clobber(from: &Path, to: &Path) -> io::Result<()> {
        match fs::symlink_metadata(to) {
            Ok(_) => {
                Err(io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => fs::rename(from, to),
            Err(err) => Err(err),
        }
    }
}
