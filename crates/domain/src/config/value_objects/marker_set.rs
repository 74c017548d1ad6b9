// crates/domain/src/config/value_objects/marker_set.rs

/// Literal, case-sensitive substrings whose presence marks a metadata file as tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet(Vec<String>);

impl MarkerSet {
    /// Bracketed studio tag.
    pub const STUDIO: &'static str = "<studio>";
    /// Bracketed genre tag.
    pub const GENRE: &'static str = "<genre>";
    /// Bare keyword rather than a tag, so it also hits `<label>`, `<labels>` and
    /// any prose containing "label". Kept as-is; review before tightening.
    pub const LABEL: &'static str = "label";

    /// Builds a set from `markers`, discarding empty entries.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers = markers.into_iter().map(Into::into);
        Self(markers.filter(|m: &String| !m.is_empty()).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// First marker found in `content`, in configuration order.
    pub fn first_present(&self, content: &str) -> Option<&str> {
        self.iter().find(|marker| content.contains(marker))
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new([Self::STUDIO, Self::GENRE, Self::LABEL])
    }
}
