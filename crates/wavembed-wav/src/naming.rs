//! Identifier derivation for the generated array and companion header.

use std::path::Path;

/// Suffix appended to the file stem to form the array name.
pub const DECLARATION_SUFFIX: &str = "Sound";

/// Derives the array name from an input path.
///
/// Takes the file's base name up to its first `.` and appends `Sound`, so
/// `music/melody.wav` becomes `melodySound` and `a.b.wav` becomes `aSound`.
pub fn declaration_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = match base.find('.') {
        Some(idx) => &base[..idx],
        None => &base[..],
    };
    format!("{}{}", stem, DECLARATION_SUFFIX)
}

/// Converts a camelCase declaration name to an UPPER_SNAKE_CASE macro prefix.
///
/// `pacmanBeginningSound` becomes `PACMAN_BEGINNING_SOUND`. Characters that
/// are not valid in a C identifier become `_`.
pub fn macro_prefix(name: &str) -> String {
    let mut prefix = String::with_capacity(name.len() + 8);
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() && prev_lower {
            prefix.push('_');
        }
        if ch.is_ascii_alphanumeric() {
            prefix.push(ch.to_ascii_uppercase());
        } else {
            prefix.push('_');
        }
        prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }

    prefix
}
