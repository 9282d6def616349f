//! # Note Identity
//!
//! Turns free-text titles into filesystem-safe identifiers and keeps those
//! identifiers unique within a collection.
//!
//! ## Sanitizing
//!
//! [`sanitize`] keeps only ASCII letters, digits, space, `_` and `-`, then
//! turns every space into `_`. It is pure and total: `"Plan!!"` becomes
//! `"Plan"`, `"Meeting Notes"` becomes `"Meeting_Notes"`.
//!
//! ## Base names
//!
//! A title made entirely of dropped characters sanitizes to `""`. Using that
//! as a file stem would produce `.md` (a hidden file) and then `_1.md`, so
//! [`base_name`] maps an empty sanitize result to [`PLACEHOLDER_BASE`]. Both
//! the write path and the lookup path go through `base_name`, which keeps
//! such notes reachable by the title that created them.
//!
//! ## Collisions
//!
//! [`unique_identifier`] tries `base`, then `base_1`, `base_2`, ... until it
//! finds one not in the taken set. Suffixing only happens at write time; a
//! lookup for `"foo"` always resolves to `foo`, never to `foo_1`.

use std::collections::HashSet;

/// Stem used when a title has no characters that survive sanitizing.
pub const PLACEHOLDER_BASE: &str = "untitled";

/// Extension for note files in the flat backend.
pub const NOTE_EXT: &str = ".md";

fn is_allowed(c: char) -> bool {
    c == ' ' || c == '_' || c == '-' || c.is_ascii_alphanumeric()
}

/// Strips disallowed characters and replaces spaces with underscores.
pub fn sanitize(title: &str) -> String {
    title
        .chars()
        .filter(|c| is_allowed(*c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// The identifier a title resolves to before any collision suffix.
pub fn base_name(title: &str) -> String {
    let sanitized = sanitize(title);
    if sanitized.is_empty() {
        PLACEHOLDER_BASE.to_string()
    } else {
        sanitized
    }
}

/// Returns the first of `base`, `base_1`, `base_2`, ... not present in `taken`.
pub fn unique_identifier(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }

    let mut counter = 1usize;
    loop {
        let candidate = format!("{}_{}", base, counter);
        if !taken.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Like [`unique_identifier`] but over file names: `base.md`, `base_1.md`, ...
///
/// `existing_names` holds full file names as they appear in the notes directory.
pub fn unique_filename(base: &str, existing_names: &HashSet<String>) -> String {
    let taken: HashSet<String> = existing_names
        .iter()
        .filter_map(|name| name.strip_suffix(NOTE_EXT))
        .map(str::to_string)
        .collect();
    format!("{}{}", unique_identifier(base, &taken), NOTE_EXT)
}

/// Assigns identifiers to titles in order, each one unique against all earlier ones.
///
/// This is how the aggregate backend derives identifiers for its records; for
/// an insertion-only collection the result is the same as resolving each title
/// at the moment it was created.
pub fn assign_identifiers<'a, I>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken = HashSet::new();
    let mut identifiers = Vec::new();
    for title in titles {
        let identifier = unique_identifier(&base_name(title), &taken);
        taken.insert(identifier.clone());
        identifiers.push(identifier);
    }
    identifiers
}
