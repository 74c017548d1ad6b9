use std::{
    fs::File,
    io::Read,
    path::Path,
};

use nfo_sweep_domain::DecodeMode;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Turn raw bytes into text according to `mode`.
///
/// # Errors
/// Only [`DecodeMode::Strict`] fails, with the position of the first invalid sequence.
pub fn decode(bytes: Vec<u8>, mode: DecodeMode) -> Result<String, String> {
    match mode {
        DecodeMode::Ignore => Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()),
        DecodeMode::Replace => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        DecodeMode::Strict => String::from_utf8(bytes).map_err(|err| err.utf8_error().to_string()),
    }
}
