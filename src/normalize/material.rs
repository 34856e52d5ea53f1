use crate::normalize::NameNormalizer;
use crate::types::{CanonicalIconName, RawEntry};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::trace;

static NON_NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static NUMERIC_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[a-zA-Z]*$").expect("valid regex"));
static CANONICAL_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("valid regex"));

/// Normalizes display names from the Google Fonts icon metadata
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialNormalizer;

impl NameNormalizer for MaterialNormalizer {
    fn normalize(&self, entry: &RawEntry) -> Option<CanonicalIconName> {
        let cleaned = clean_display_name(&entry.name);
        match validate_name(&cleaned) {
            Ok(()) => Some(CanonicalIconName::new(cleaned)),
            Err(reason) => {
                trace!(name = %entry.name, cleaned = %cleaned, %reason, "rejected icon name");
                None
            }
        }
    }
}

/// Why a cleaned name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Digits optionally followed by letters, e.g. `123`, `3d`
    NumericOnly,
    TooShort,
    /// Anything outside `[a-z][a-z0-9_-]*`, including spaces
    NotCanonical,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::NumericOnly => "numeric name",
            Rejection::TooShort => "shorter than 2 characters",
            Rejection::NotCanonical => "not a lowercase identifier",
        };
        f.write_str(reason)
    }
}

/// Drops every char that is not a word char, whitespace or hyphen, then
/// lowercases. Spaces are kept as-is.
pub fn clean_display_name(name: &str) -> String {
    NON_NAME_CHARS.replace_all(name, "").to_lowercase()
}

pub fn validate_name(name: &str) -> Result<(), Rejection> {
    if NUMERIC_NAME.is_match(name) {
        return Err(Rejection::NumericOnly);
    }
    if name.chars().count() < 2 {
        return Err(Rejection::TooShort);
    }
    if !CANONICAL_NAME.is_match(name) {
        return Err(Rejection::NotCanonical);
    }
    Ok(())
}

pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}
