use icon_catalog::constants::{BRANDS_CATEGORY, REGULAR_CATEGORY, SOLID_CATEGORY};
use icon_catalog::error::{IconError, Result};
use icon_catalog::normalize::{FontAwesomeNormalizer, MaterialNormalizer, NameNormalizer};
use icon_catalog::pipeline::{Pipeline, RunSettings};
use icon_catalog::report::ReportStyle;
use icon_catalog::storage::{CatalogStore, InMemoryStore};
use icon_catalog::types::{FailurePolicy, IconCatalog, IconSource, RawEntry};
use std::path::{Path, PathBuf};

fn entries(names: &[&str]) -> Vec<RawEntry> {
    names.iter().map(|n| RawEntry { name: n.to_string() }).collect()
}

/// Font Awesome-shaped source serving canned directory listings
struct CannedFontAwesome {
    listings: Vec<(&'static str, Vec<RawEntry>)>,
}

#[async_trait::async_trait]
impl IconSource for CannedFontAwesome {
    fn source_name(&self) -> &'static str {
        "font_awesome"
    }

    fn display_name(&self) -> &'static str {
        "Font Awesome"
    }

    fn categories(&self) -> Vec<&'static str> {
        vec![SOLID_CATEGORY, REGULAR_CATEGORY, BRANDS_CATEGORY]
    }

    async fn fetch_catalog(&self, dedupe: bool) -> Result<IconCatalog> {
        let mut catalog = IconCatalog::new();
        for (category, listing) in &self.listings {
            let (names, _) = FontAwesomeNormalizer.normalize_all(listing);
            catalog.insert_category(category, names, dedupe);
        }
        Ok(catalog)
    }
}

/// Material-shaped source that either serves names or fails
struct CannedMaterial {
    names: Option<Vec<RawEntry>>,
}

#[async_trait::async_trait]
impl IconSource for CannedMaterial {
    fn source_name(&self) -> &'static str {
        "material"
    }

    fn display_name(&self) -> &'static str {
        "Material"
    }

    fn categories(&self) -> Vec<&'static str> {
        vec!["material"]
    }

    fn report_style(&self) -> ReportStyle {
        ReportStyle::Total("Material")
    }

    async fn fetch_catalog(&self, dedupe: bool) -> Result<IconCatalog> {
        let listing = self.names.as_ref().ok_or_else(|| IconError::Status {
            status: 503,
            url: "https://fonts.google.com/metadata/icons".to_string(),
        })?;
        let (names, _) = MaterialNormalizer.normalize_all(listing);
        let mut catalog = IconCatalog::new();
        catalog.insert_category("material", names, dedupe);
        Ok(catalog)
    }
}

fn settings(output: &str, on_failure: FailurePolicy, sample_size: usize) -> RunSettings {
    RunSettings {
        output: PathBuf::from(output),
        sample_size,
        on_failure,
        dedupe: false,
    }
}

fn font_awesome_source() -> CannedFontAwesome {
    CannedFontAwesome {
        listings: vec![
            (SOLID_CATEGORY, entries(&["index.js", "faCoffee.js", "faAddressBook.js", "faCoffee.js", "fa0.js", "faCoffee.d.ts"])),
            (REGULAR_CATEGORY, entries(&["faBell.js", "index.js"])),
            (BRANDS_CATEGORY, entries(&["fa500px.js", "faGithub.js", "fa42Group.js"])),
        ],
    }
}

#[tokio::test]
async fn font_awesome_catalog_has_three_sorted_categories() -> Result<()> {
    let store = InMemoryStore::new();
    let run = settings("icons/fa_free_icons.json", FailurePolicy::Abort, 5);

    let result = Pipeline::run_source(&font_awesome_source(), &run, &store).await?;

    assert_eq!(result.catalog.category_labels(), vec!["solid", "regular", "brands"]);
    // duplicates from the listing are preserved
    assert_eq!(result.catalog.get("solid").unwrap(), ["address-book", "coffee", "coffee"]);
    assert_eq!(result.catalog.get("regular").unwrap(), ["bell"]);
    assert_eq!(result.catalog.get("brands").unwrap(), ["42-group", "500px", "github"]);

    let saved = store.load(Path::new("icons/fa_free_icons.json"))?;
    assert_eq!(saved, result.catalog);
    assert!(result.report.starts_with("solid: 3 icons\nExample icons: address-book, coffee, coffee\n\n"));
    Ok(())
}

#[tokio::test]
async fn dedupe_setting_collapses_duplicates() -> Result<()> {
    let store = InMemoryStore::new();
    let mut run = settings("fa.json", FailurePolicy::Abort, 5);
    run.dedupe = true;

    let result = Pipeline::run_source(&font_awesome_source(), &run, &store).await?;
    assert_eq!(result.catalog.get("solid").unwrap(), ["address-book", "coffee"]);
    Ok(())
}

#[tokio::test]
async fn abort_policy_returns_error_and_writes_nothing() {
    let store = InMemoryStore::new();
    let source = CannedMaterial { names: None };
    let run = settings("icons/material_icons.json", FailurePolicy::Abort, 10);

    let result = Pipeline::run_source(&source, &run, &store).await;

    assert!(matches!(result, Err(IconError::Status { status: 503, .. })));
    assert!(store.contents(Path::new("icons/material_icons.json")).is_none());
}

#[tokio::test]
async fn empty_policy_writes_empty_catalog() -> Result<()> {
    let store = InMemoryStore::new();
    let source = CannedMaterial { names: None };
    let run = settings("icons/material_icons.json", FailurePolicy::Empty, 10);

    let result = Pipeline::run_source(&source, &run, &store).await?;

    assert!(result.fetch_error.as_deref().unwrap_or_default().contains("503"));
    assert_eq!(
        result.fetch_error_line().as_deref(),
        Some("Error fetching Material icons: Unexpected HTTP status 503 from https://fonts.google.com/metadata/icons")
    );
    assert_eq!(
        store.contents(Path::new("icons/material_icons.json")).as_deref(),
        Some("{\n  \"material\": []\n}")
    );
    assert_eq!(result.report, "Total Material icons: 0\nExample icons: \n\n");
    Ok(())
}

#[tokio::test]
async fn material_catalog_drops_multi_word_and_numeric_names() -> Result<()> {
    let store = InMemoryStore::new();
    let source = CannedMaterial {
        names: Some(entries(&["Search", "3D Rotation", "123", "home", "10k", "Wi-Fi", "x"])),
    };
    let run = settings("material.json", FailurePolicy::Empty, 10);

    let result = Pipeline::run_source(&source, &run, &store).await?;

    assert!(result.fetch_error.is_none());
    assert!(result.fetch_error_line().is_none());
    assert_eq!(result.catalog.get("material").unwrap(), ["home", "search", "wi-fi"]);
    assert_eq!(result.report, "Total Material icons: 3\nExample icons: home, search, wi-fi\n\n");
    Ok(())
}
