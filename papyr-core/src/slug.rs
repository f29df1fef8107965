//! Slug generation, validation, and uniqueness.

use deunicode::deunicode;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap())
}

/// Convert a string to a URL-safe slug
///
/// Rules:
/// - Transliterate to ASCII
/// - Lowercase
/// - Replace whitespace and underscores with hyphens
/// - Remove everything that is not alphanumeric or a hyphen
/// - Collapse multiple hyphens
/// - Trim leading/trailing hyphens
///
/// Titles with no slug-safe characters produce an empty string.
///
/// # Examples
///
/// ```
/// use papyr_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Rust & Safety"), "rust-safety");
/// assert_eq!(slugify("Café au lait"), "cafe-au-lait");
/// ```
pub fn slugify(input: &str) -> String {
    let transliterated = deunicode(input).to_lowercase();

    let hyphenated: String = transliterated
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                Some(c)
            } else if c.is_whitespace() || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect();

    let mut collapsed = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }

    collapsed.trim_matches('-').to_string()
}

/// Check whether `s` is a well-formed slug: one or more lowercase
/// alphanumeric segments separated by single hyphens, with no leading,
/// trailing, or doubled hyphen.
pub fn validate_slug(s: &str) -> bool {
    slug_regex().is_match(s)
}

/// Derive a slug from `title` that does not collide with `existing`
///
/// The base slug is `slugify(title)`. An empty base is returned as-is and
/// callers must treat it as unusable. A colliding base gains an ascending
/// integer suffix (`base-1`, `base-2`, ...) until a free candidate is found.
pub fn generate_unique_slug(title: &str, existing: &HashSet<String>) -> String {
    unique_candidate(&slugify(title), existing)
}

/// Suffix an already-slugified base until it is free in `existing`
pub(crate) fn unique_candidate(base: &str, existing: &HashSet<String>) -> String {
    if base.is_empty() {
        return String::new();
    }
    if !existing.contains(base) {
        return base.to_string();
    }

    let mut counter = 1u32;
    loop {
        let candidate = format!("{base}-{counter}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
