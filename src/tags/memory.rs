//! In-memory tag reader for tests.

use std::collections::HashMap;
use std::path::Path;

use super::model::{FieldLookup, TagReader, TagSnapshot};

/// Serves snapshots keyed by file name; unknown files have no header.
#[derive(Debug, Default)]
pub struct MemoryReader {
    tags: HashMap<String, TagSnapshot>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file_name: &str, title: FieldLookup, artist: FieldLookup) -> Self {
        self.tags
            .insert(file_name.to_string(), TagSnapshot { title, artist });
        self
    }
}

impl TagReader for MemoryReader {
    fn read(&self, path: &Path) -> TagSnapshot {
        path.file_name()
            .and_then(|s| s.to_str())
            .and_then(|name| self.tags.get(name))
            .cloned()
            .unwrap_or_else(TagSnapshot::no_header)
    }
}

/// Shorthand for a present field.
pub fn present(v: &str) -> FieldLookup {
    FieldLookup::Present(v.to_string())
}
