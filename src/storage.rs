use crate::error::{IconError, Result};
use crate::types::IconCatalog;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Storage trait for persisting finished catalogs
pub trait CatalogStore: Send + Sync {
    fn save(&self, path: &Path, catalog: &IconCatalog) -> Result<()>;
    fn load(&self, path: &Path) -> Result<IconCatalog>;
}

/// 2-space indented JSON, non-ASCII left unescaped, no trailing newline
pub fn to_json(catalog: &IconCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

pub fn from_json(content: &str) -> Result<IconCatalog> {
    Ok(serde_json::from_str(content)?)
}

/// Writes catalogs as JSON files, creating parent directories as needed
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileStore;

impl CatalogStore for JsonFileStore {
    fn save(&self, path: &Path, catalog: &IconCatalog) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = to_json(catalog)?;
        fs::write(path, json.as_bytes())?;
        info!("Wrote {} icons to {}", catalog.total_icons(), path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<IconCatalog> {
        let content = fs::read_to_string(path)?;
        from_json(&content)
    }
}

/// In-memory storage implementation for testing
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized content saved under `path`
    pub fn contents(&self, path: &Path) -> Option<String> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.get(path).cloned()
    }
}

impl CatalogStore for InMemoryStore {
    fn save(&self, path: &Path, catalog: &IconCatalog) -> Result<()> {
        let json = to_json(catalog)?;
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.to_path_buf(), json);
        debug!("Stored catalog for {}", path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<IconCatalog> {
        let content = self.contents(path).ok_or_else(|| {
            IconError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no catalog stored at {}", path.display()),
            ))
        })?;
        from_json(&content)
    }
}

/// Re-serialize the catalog stored at `path` and compare with the stored bytes
pub fn verify_round_trip(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let catalog = from_json(&content)?;
    Ok(to_json(&catalog)? == content)
}
