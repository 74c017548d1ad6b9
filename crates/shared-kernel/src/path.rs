// crates/shared-kernel/src/path.rs
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Replace everything after the last `.` of the file name with `ext`.
///
/// Unlike [`Path::with_extension`], a leading dot counts as a separator, so
/// `.nfo` becomes `.invalidnfo` rather than `.nfo.invalidnfo`. Names without a
/// dot get `.{ext}` appended. `ext` is given without its leading dot.
///
/// Returns `None` when `path` has no file name component.
pub fn with_final_extension(path: &Path, ext: &str) -> Option<PathBuf> {
    let mut renamed = final_stem(path.file_name()?);
    renamed.push(".");
    renamed.push(ext);
    Some(path.with_file_name(renamed))
}

#[cfg(unix)]
fn final_stem(name: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let stem = bytes.iter().rposition(|&b| b == b'.').map_or(bytes, |idx| &bytes[..idx]);
    OsString::from_vec(stem.to_vec())
}

#[cfg(not(unix))]
fn final_stem(name: &OsStr) -> OsString {
    let name = name.to_string_lossy();
    match name.rsplit_once('.') {
        Some((stem, _)) => OsString::from(stem),
        None => OsString::from(name.as_ref()),
    }
}
