use crate::error::Result;
use crate::report::ReportStyle;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single record from a remote catalog. Only `name` is read; other fields
/// (sha, download_url, codepoint, tags, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub name: String,
}

/// Normalized icon identifier. Only the normalizers construct these.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalIconName(String);

impl CanonicalIconName {
    pub(crate) fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalIconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One category of a catalog and its sorted names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIcons {
    pub category: String,
    pub names: Vec<String>,
}

/// Category label → sorted icon names, kept in declaration order so the
/// JSON keys come out as `solid`, `regular`, `brands`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCatalog {
    categories: Vec<CategoryIcons>,
}

impl IconCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every given category present and empty
    pub fn empty_with_categories(categories: &[&str]) -> Self {
        let mut catalog = Self::new();
        for category in categories {
            catalog.insert_category(category, Vec::new(), false);
        }
        catalog
    }

    /// Sort `names` by code point and store them under `category`, replacing
    /// any previous list for that label. Duplicates survive unless `dedupe`.
    pub fn insert_category(
        &mut self,
        category: &str,
        names: Vec<CanonicalIconName>,
        dedupe: bool,
    ) {
        let mut names: Vec<String> =
            names.into_iter().map(CanonicalIconName::into_string).collect();
        names.sort();
        if dedupe {
            names.dedup();
        }
        self.put(category.to_string(), names);
    }

    fn put(&mut self, category: String, names: Vec<String>) {
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.names = names,
            None => self.categories.push(CategoryIcons { category, names }),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.names.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryIcons> {
        self.categories.iter()
    }

    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.category.as_str()).collect()
    }

    pub fn total_icons(&self) -> usize {
        self.categories.iter().map(|c| c.names.len()).sum()
    }
}

impl Serialize for IconCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for entry in &self.categories {
            map.serialize_entry(&entry.category, &entry.names)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IconCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = IconCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to lists of icon names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<IconCatalog, A::Error> {
                let mut catalog = IconCatalog::new();
                while let Some((category, names)) = access.next_entry::<String, Vec<String>>()? {
                    catalog.put(category, names);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// What happens when a source cannot be fetched or parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Propagate the error and write nothing
    Abort,
    /// Log the error and write a catalog with empty categories
    Empty,
}

/// Core trait that every icon catalog source implements
#[async_trait::async_trait]
pub trait IconSource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Name used in console output, e.g. `Material`
    fn display_name(&self) -> &'static str;

    /// Category labels this source produces, in output order
    fn categories(&self) -> Vec<&'static str>;

    /// Fetch, normalize, filter and sort the whole catalog
    async fn fetch_catalog(&self, dedupe: bool) -> Result<IconCatalog>;

    fn report_style(&self) -> ReportStyle {
        ReportStyle::PerCategory
    }
}
