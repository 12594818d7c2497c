//! File name normalization.
//!
//! A file is named after its title tag when that tag yields a safe name;
//! otherwise its current name is cleaned heuristically (artist, track number
//! and leading junk removed, words capitalized).

mod clean;
mod decide;
mod metadata;

pub use clean::clean_name;
pub use decide::{Action, NameDecision, NameSource, Namer, SkipReason};
pub use metadata::{FallbackReason, TitleDecision, title_name};

/// Characters illegal in a path component on common platforms.
pub const RESERVED: [char; 9] = ['/', '\\', '"', ':', '*', '?', '<', '>', '|'];

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}
