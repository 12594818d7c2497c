use std::path::Path;

use crate::config::Settings;
use crate::tags::{FieldLookup, TagReader, TagSnapshot};

use super::clean::clean_name;
use super::metadata::{TitleDecision, title_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Metadata,
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The computed name equals the current one.
    Unchanged,
    /// Cleaning left nothing usable.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Rename,
    Skip(SkipReason),
}

/// Outcome of naming one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDecision {
    pub original: String,
    pub new_name: String,
    pub source: NameSource,
    pub action: Action,
}

/// Computes the target file name for candidates of one extension.
pub struct Namer<'a> {
    reader: &'a dyn TagReader,
    extension: String,
    use_title_tag: bool,
}

impl<'a> Namer<'a> {
    pub fn new(reader: &'a dyn TagReader, settings: &Settings) -> Self {
        Self {
            reader,
            extension: settings.library.extension_suffix(),
            use_title_tag: settings.naming.use_title_tag,
        }
    }

    /// Read the file's tag and decide its new name.
    ///
    /// Returns `None` when the path has no UTF-8 file name.
    pub fn name_for(&self, path: &Path) -> Option<NameDecision> {
        let file_name = path.file_name().and_then(|s| s.to_str())?;
        let snapshot = self.reader.read(path);
        Some(self.decide(file_name, &snapshot))
    }

    /// Decide the new name of `file_name` given its tag snapshot.
    pub fn decide(&self, file_name: &str, snapshot: &TagSnapshot) -> NameDecision {
        let (stem, suffix) = split_suffix(file_name, &self.extension);

        let title = if self.use_title_tag {
            title_name(&snapshot.title, suffix)
        } else {
            TitleDecision::Fallback(super::FallbackReason::Disabled)
        };

        let (new_name, source) = match title {
            TitleDecision::Accept(name) => (name, NameSource::Metadata),
            TitleDecision::Fallback(reason) => {
                tracing::debug!(file = file_name, ?reason, "title tag not usable");
                let artist = artist_for(file_name, &snapshot.artist);
                let cleaned = clean_name(stem, artist);
                let name = if cleaned.is_empty() {
                    cleaned
                } else {
                    format!("{cleaned}{suffix}")
                };
                (name, NameSource::Heuristic)
            }
        };

        let action = if new_name.is_empty() {
            Action::Skip(SkipReason::Empty)
        } else if new_name == file_name {
            Action::Skip(SkipReason::Unchanged)
        } else {
            Action::Rename
        };

        NameDecision {
            original: file_name.to_string(),
            new_name,
            source,
            action,
        }
    }
}

fn artist_for<'s>(file_name: &str, artist: &'s FieldLookup) -> &'s str {
    match artist {
        FieldLookup::FieldMissing => tracing::info!("{file_name} has no artist info"),
        FieldLookup::NoHeader => tracing::info!("{file_name} has no ID3 header"),
        FieldLookup::Present(_) => {}
    }
    artist.text().map(str::trim).unwrap_or("")
}

/// Split `file_name` into stem and its own spelling of `extension`.
/// Without a (case-insensitive) match the suffix is empty.
fn split_suffix<'n>(file_name: &'n str, extension: &str) -> (&'n str, &'n str) {
    let Some(at) = file_name.len().checked_sub(extension.len()) else {
        return (file_name, "");
    };
    match (file_name.get(..at), file_name.get(at..)) {
        (Some(stem), Some(suffix)) if suffix.eq_ignore_ascii_case(extension) => (stem, suffix),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_suffix_keeps_original_case() {
        assert_eq!(split_suffix("Song.MP3", ".mp3"), ("Song", ".MP3"));
        assert_eq!(split_suffix("Song.mp3", ".mp3"), ("Song", ".mp3"));
        assert_eq!(split_suffix(".mp3", ".mp3"), ("", ".mp3"));
    }

    #[test]
    fn split_suffix_without_match_returns_whole_name() {
        assert_eq!(split_suffix("Song.flac", ".mp3"), ("Song.flac", ""));
        assert_eq!(split_suffix("mp3", ".mp3"), ("mp3", ""));
        assert_eq!(split_suffix("ab€", ".mp3"), ("ab€", ""));
    }
}
