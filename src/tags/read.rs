use std::borrow::Cow;
use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};
use lofty::probe::read_from_path;

use super::model::{FieldLookup, TagReader, TagSnapshot};

/// Reads tags with `lofty`, preferring the file's primary tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyReader;

impl TagReader for LoftyReader {
    fn read(&self, path: &Path) -> TagSnapshot {
        let tagged = match read_from_path(path) {
            Ok(tagged) => tagged,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "could not parse file");
                return TagSnapshot::no_header();
            }
        };

        match tagged.primary_tag().or_else(|| tagged.first_tag()) {
            Some(tag) => TagSnapshot {
                title: lookup(tag.title()),
                artist: lookup(tag.artist()),
            },
            None => TagSnapshot::no_header(),
        }
    }
}

fn lookup(value: Option<Cow<'_, str>>) -> FieldLookup {
    match value {
        Some(v) => FieldLookup::Present(v.into_owned()),
        None => FieldLookup::FieldMissing,
    }
}
