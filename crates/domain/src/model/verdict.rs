/// Outcome of inspecting one metadata file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// At least one marker was found; `marker` is the first in configuration order.
    Tagged { marker: String },
    /// No marker was found.
    Untagged,
}

impl Verdict {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Untagged)
    }
}
