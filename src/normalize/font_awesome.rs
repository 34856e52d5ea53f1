use crate::constants::{FONT_AWESOME_FILE_PREFIX, FONT_AWESOME_FILE_SUFFIX, FONT_AWESOME_INDEX_FILE};
use crate::normalize::NameNormalizer;
use crate::types::{CanonicalIconName, RawEntry};
use tracing::trace;

/// Normalizes file names from the Font Awesome package listings
/// (`faAddressBook.js` → `address-book`).
#[derive(Debug, Default, Clone, Copy)]
pub struct FontAwesomeNormalizer;

impl NameNormalizer for FontAwesomeNormalizer {
    fn normalize(&self, entry: &RawEntry) -> Option<CanonicalIconName> {
        if !is_icon_file(&entry.name) {
            trace!(file = %entry.name, "skipping non-icon file");
            return None;
        }
        Some(normalize_file_name(&entry.name))
    }
}

/// Trims the `fa` prefix and `.js` suffix, each only when anchored at the
/// matching end of the name.
pub fn file_stem(file_name: &str) -> &str {
    let stem = file_name
        .strip_prefix(FONT_AWESOME_FILE_PREFIX)
        .unwrap_or(file_name);
    stem.strip_suffix(FONT_AWESOME_FILE_SUFFIX).unwrap_or(stem)
}

/// Only `.js` modules other than `index.js` whose stem is not purely numeric
pub fn is_icon_file(file_name: &str) -> bool {
    if !file_name.ends_with(FONT_AWESOME_FILE_SUFFIX) || file_name == FONT_AWESOME_INDEX_FILE {
        return false;
    }
    let stem = file_stem(file_name);
    !stem.is_empty() && !stem.chars().all(|c| c.is_ascii_digit())
}

/// Stems that already contain a hyphen are only lowercased; everything else
/// is split before each non-initial uppercase letter.
pub fn normalize_file_name(file_name: &str) -> CanonicalIconName {
    let stem = file_stem(file_name);
    let name = if stem.contains('-') {
        stem.to_lowercase()
    } else {
        camel_to_kebab(stem)
    };
    CanonicalIconName::new(name)
}

fn camel_to_kebab(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for (i, ch) in value.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(ch);
    }
    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(file_name: &str) -> Option<String> {
        FontAwesomeNormalizer
            .normalize(&RawEntry { name: file_name.to_string() })
            .map(CanonicalIconName::into_string)
    }

    #[test]
    fn pascal_case_becomes_kebab_case() {
        assert_eq!(normalize("faAddressBook.js").as_deref(), Some("address-book"));
        assert_eq!(normalize("faCoffee.js").as_deref(), Some("coffee"));
        assert_eq!(normalize("faArrowUpRightFromSquare.js").as_deref(), Some("arrow-up-right-from-square"));
    }

    #[test]
    fn alphanumeric_stem_is_kept() {
        assert_eq!(normalize("fa500px.js").as_deref(), Some("500px"));
        assert_eq!(normalize("faH1.js").as_deref(), Some("h1"));
    }

    #[test]
    fn digit_runs_are_not_split() {
        assert_eq!(normalize("faBattery3Quarters.js").as_deref(), Some("battery3-quarters"));
    }

    #[test]
    fn trimming_is_anchored() {
        // substring replacement would turn this into "so"
        assert_eq!(normalize("faSofa.js").as_deref(), Some("sofa"));
        assert_eq!(file_stem("faFacebook.js"), "Facebook");
        assert_eq!(file_stem("fa.jsonData.js"), ".jsonData");
    }

    #[test]
    fn hyphenated_stems_are_not_rehyphenated() {
        assert_eq!(normalize("faFont-Awesome.js").as_deref(), Some("font-awesome"));
        assert_eq!(normalize("faarrow-upRight.js").as_deref(), Some("arrow-upright"));
    }

    #[test]
    fn index_and_non_js_files_are_excluded() {
        assert_eq!(normalize("index.js"), None);
        assert_eq!(normalize("index.d.ts"), None);
        assert_eq!(normalize("faAddressBook.d.ts"), None);
        assert_eq!(normalize("package.json"), None);
        assert_eq!(normalize("index.mjs"), None);
    }

    #[test]
    fn numeric_and_empty_stems_are_excluded() {
        assert_eq!(normalize("fa0.js"), None);
        assert_eq!(normalize("fa42.js"), None);
        assert_eq!(normalize("fa.js"), None);
    }

    #[test]
    fn normalize_all_counts_rejections() {
        let entries: Vec<RawEntry> = ["faCoffee.js", "index.js", "fa1.js", "faBell.js"]
            .iter()
            .map(|n| RawEntry { name: n.to_string() })
            .collect();
        let (accepted, rejected) = FontAwesomeNormalizer.normalize_all(&entries);
        assert_eq!(accepted.len(), 2);
        assert_eq!(rejected, 2);
    }
}
