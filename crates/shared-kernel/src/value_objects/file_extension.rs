// crates/shared-kernel/src/value_objects/file_extension.rs
use std::{
    ffi::OsStr,
    fmt,
    hash::{Hash, Hasher},
};

/// File extension stored without its leading dot, spelled as given.
///
/// Equality, hashing and [`FileExtension::matches_name`] ignore ASCII case, so
/// `".NFO"` and `"nfo"` compare equal while [`FileExtension::as_str`] still
/// returns the original spelling for anything written to disk.
#[derive(Debug, Clone)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(ext: impl AsRef<str>) -> Self {
        let ext = ext.as_ref().trim();
        Self(ext.strip_prefix('.').unwrap_or(ext).to_string())
    }

    /// The extension as configured, without the dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `name` ends with `.{ext}`, compared ASCII case-insensitively.
    ///
    /// Non UTF-8 names are compared through their lossy conversion.
    pub fn matches_name(&self, name: &OsStr) -> bool {
        if self.0.is_empty() {
            return false;
        }
        let name = name.to_string_lossy().to_ascii_lowercase();
        let key = self.0.to_ascii_lowercase();
        name.strip_suffix(key.as_str()).is_some_and(|head| head.ends_with('.'))
    }
}

impl PartialEq for FileExtension {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for FileExtension {}

impl Hash for FileExtension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.0)
    }
}
