use std::borrow::Cow;

use super::is_reserved;

/// Derive a readable name from `name` alone, optionally knowing the artist.
///
/// Steps, in order:
/// 1. Remove the artist (with a trailing `-` or ` - ` when present). The
///    removal works on a lower-cased copy, so the rest of the name comes out
///    lower-cased as well.
/// 2. Drop reserved characters and split on whitespace.
/// 3. Drop a leading two-digit track number ("00".."99").
/// 4. Drop one leading token that does not start with an ASCII letter.
///    Only one; "01 02 03 song" keeps "03".
/// 5. Uppercase the first character of every token.
/// 6. Join with single spaces.
///
/// The extension is not treated specially: callers pass either a stem or a
/// full file name. Returns an empty string when nothing is left.
pub fn clean_name(name: &str, artist: &str) -> String {
    let stripped = strip_artist(name, artist.trim());
    let sanitized: String = stripped.chars().filter(|c| !is_reserved(*c)).collect();

    let tokens: Vec<&str> = sanitized.split_whitespace().collect();
    let tokens = drop_leading_track_number(&tokens);
    let tokens = drop_leading_non_alpha(tokens);

    tokens
        .iter()
        .map(|t| capitalize(t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_artist<'a>(name: &'a str, artist: &str) -> Cow<'a, str> {
    if artist.is_empty() {
        return Cow::Borrowed(name);
    }

    let lower = name.to_lowercase();
    let artist = artist.to_lowercase();
    if !lower.contains(&artist) {
        return Cow::Borrowed(name);
    }

    let patterns = [format!("{artist}-"), format!("{artist} - "), artist];
    for pattern in &patterns {
        if lower.contains(pattern.as_str()) {
            return Cow::Owned(lower.replace(pattern.as_str(), ""));
        }
    }
    Cow::Owned(lower)
}

/// Two-digit zero-padded track number, "00" through "99".
fn is_track_number(token: &str) -> bool {
    token.len() == 2 && token.bytes().all(|b| b.is_ascii_digit())
}

fn drop_leading_track_number<'a, 'b>(tokens: &'b [&'a str]) -> &'b [&'a str] {
    match tokens.split_first() {
        Some((first, rest)) if is_track_number(first) => rest,
        _ => tokens,
    }
}

fn drop_leading_non_alpha<'a, 'b>(tokens: &'b [&'a str]) -> &'b [&'a str] {
    match tokens.split_first() {
        Some((first, rest)) if !first.starts_with(|c: char| c.is_ascii_alphabetic()) => rest,
        _ => tokens,
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
