use std::path::Path;

/// Result of looking up one text field of a file's tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLookup {
    /// The tag carries this field.
    Present(String),
    /// The file has a tag, but not this field.
    FieldMissing,
    /// The file has no tag structure at all.
    NoHeader,
}

impl FieldLookup {
    /// The field text, if any. May still be empty or whitespace.
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldLookup::Present(v) => Some(v.as_str()),
            FieldLookup::FieldMissing | FieldLookup::NoHeader => None,
        }
    }
}

/// The fields the namer cares about, read fresh for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSnapshot {
    pub title: FieldLookup,
    pub artist: FieldLookup,
}

impl TagSnapshot {
    /// Snapshot for a file without a readable tag.
    pub fn no_header() -> Self {
        Self {
            title: FieldLookup::NoHeader,
            artist: FieldLookup::NoHeader,
        }
    }
}

pub trait TagReader {
    fn read(&self, path: &Path) -> TagSnapshot;
}
