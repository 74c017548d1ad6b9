// crates/domain/src/options.rs
use std::fmt;

/// How the bytes of a metadata file are turned into text before inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Drop byte sequences that are not valid UTF-8.
    #[default]
    Ignore,
    /// Substitute U+FFFD for byte sequences that are not valid UTF-8.
    Replace,
    /// Treat any invalid UTF-8 as a read failure.
    Strict,
}

impl DecodeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Replace => "replace",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
