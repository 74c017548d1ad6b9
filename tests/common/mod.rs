// tests/common/mod.rs
//! Shared fixtures for the integration suite.

use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{Local, NaiveDate, TimeZone};

pub const UNTAGGED: &str =
    "<?xml version=\"1.0\"?>\n<movie>\n  <title>Untitled</title>\n</movie>\n";
pub const WITH_STUDIO: &str = "<movie>\n  <studio>S1</studio>\n</movie>\n";

pub fn target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 17).unwrap()
}

pub fn other_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 16).unwrap()
}

/// Temporary media library whose files get an explicit modification date.
pub struct Library {
    dir: tempfile::TempDir,
}

impl Library {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `rel` and set its mtime to noon local time on `date`.
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>, date: NaiveDate) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        let noon = Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::from(noon)).unwrap();
        path
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.join(rel).exists()
    }
}
