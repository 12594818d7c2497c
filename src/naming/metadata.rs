use crate::tags::FieldLookup;

use super::is_reserved;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleDecision {
    /// The title makes a safe file name (extension included).
    Accept(String),
    /// The title cannot be used; clean the existing name instead.
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    FieldMissing,
    NoHeader,
    /// Nothing left after dropping non-printable and non-ASCII characters.
    Empty,
    /// The title contains a reserved character.
    Reserved,
    /// Title tags are turned off in settings.
    Disabled,
}

/// Decide whether the title tag can name the file.
///
/// The title is reduced to printable ASCII and trimmed, then `extension` is
/// appended. A title containing any of `/ \ " : * ? < > |` is rejected
/// rather than repaired.
///
/// `extension` is the file's own spelling of the configured suffix, so a
/// tagged `intro.MP3` becomes `Intro.MP3`, not `Intro.mp3`.
pub fn title_name(title: &FieldLookup, extension: &str) -> TitleDecision {
    let title = match title {
        FieldLookup::Present(t) => t,
        FieldLookup::FieldMissing => return TitleDecision::Fallback(FallbackReason::FieldMissing),
        FieldLookup::NoHeader => return TitleDecision::Fallback(FallbackReason::NoHeader),
    };

    let plain: String = title.chars().filter(|c| is_plain_text(*c)).collect();
    let plain = plain.trim();
    if plain.is_empty() {
        return TitleDecision::Fallback(FallbackReason::Empty);
    }

    let name = format!("{plain}{extension}");
    if name.contains(is_reserved) {
        return TitleDecision::Fallback(FallbackReason::Reserved);
    }
    TitleDecision::Accept(name)
}

fn is_plain_text(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}
