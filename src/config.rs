use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_FONT_AWESOME_OUTPUT, DEFAULT_MATERIAL_OUTPUT,
    DEFAULT_USER_AGENT, FONT_AWESOME_PACKAGES_PATH, FONT_AWESOME_REPOSITORY, GITHUB_API_BASE,
    MATERIAL_METADATA_URL,
};
use crate::error::{IconError, Result};
use crate::types::FailurePolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Run configuration. Every field has a default, so an absent config file
/// reproduces the stock endpoints and output paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Remove exact duplicate names within a category
    pub dedupe: bool,
    pub font_awesome: FontAwesomeConfig,
    pub material: MaterialConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontAwesomeConfig {
    pub api_base: String,
    pub repository: String,
    pub packages_path: String,
    pub user_agent: String,
    pub output: PathBuf,
    pub sample_size: usize,
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialConfig {
    pub url: String,
    pub user_agent: String,
    pub output: PathBuf,
    pub sample_size: usize,
    pub on_failure: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dedupe: false,
            font_awesome: FontAwesomeConfig::default(),
            material: MaterialConfig::default(),
        }
    }
}

impl Default for FontAwesomeConfig {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            repository: FONT_AWESOME_REPOSITORY.to_string(),
            packages_path: FONT_AWESOME_PACKAGES_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: PathBuf::from(DEFAULT_FONT_AWESOME_OUTPUT),
            sample_size: 5,
            on_failure: FailurePolicy::Abort,
        }
    }
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            url: MATERIAL_METADATA_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: PathBuf::from(DEFAULT_MATERIAL_OUTPUT),
            sample_size: 10,
            on_failure: FailurePolicy::Empty,
        }
    }
}

impl FontAwesomeConfig {
    /// Contents API URL listing one package directory
    pub fn listing_url(&self, package: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.repository,
            self.packages_path.trim_matches('/'),
            package
        )
    }
}

impl Config {
    /// Load from `path`, or from `$ICON_CATALOG_CONFIG`, or from `icons.toml`.
    /// Only an explicitly named file is required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var(CONFIG_PATH_ENV) {
                Ok(p) if !p.trim().is_empty() => (PathBuf::from(p), true),
                _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
            },
        };

        if !config_path.exists() {
            if explicit {
                return Err(IconError::Config(format!(
                    "Config file '{}' does not exist",
                    config_path.display()
                )));
            }
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            IconError::Config(format!("Failed to read config file '{}': {}", config_path.display(), e))
        })?;
        let config = Self::from_toml(&config_content)?;
        info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Move both output files into `dir`, keeping their file names
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        self.font_awesome.output = relocate(&self.font_awesome.output, dir);
        self.material.output = relocate(&self.material.output, dir);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.font_awesome.api_base.trim().is_empty() {
            return Err(IconError::Config("font_awesome.api_base must not be empty".into()));
        }
        if self.material.url.trim().is_empty() {
            return Err(IconError::Config("material.url must not be empty".into()));
        }
        Ok(())
    }
}

fn relocate(path: &Path, dir: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}
