// Source-specific name normalizers
pub mod font_awesome;
pub mod material;

pub use font_awesome::FontAwesomeNormalizer;
pub use material::MaterialNormalizer;

use crate::types::{CanonicalIconName, RawEntry};

/// Maps a raw catalog entry to its canonical name, or `None` when the entry
/// is filtered out.
pub trait NameNormalizer {
    fn normalize(&self, entry: &RawEntry) -> Option<CanonicalIconName>;

    /// Normalize every entry, returning the accepted names and how many were rejected
    fn normalize_all(&self, entries: &[RawEntry]) -> (Vec<CanonicalIconName>, usize) {
        let mut accepted = Vec::with_capacity(entries.len());
        let mut rejected = 0;
        for entry in entries {
            match self.normalize(entry) {
                Some(name) => accepted.push(name),
                None => rejected += 1,
            }
        }
        (accepted, rejected)
    }
}
