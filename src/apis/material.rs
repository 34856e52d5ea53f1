use crate::apis::fetch_body;
use crate::app::ports::HttpClientPort;
use crate::config::MaterialConfig;
use crate::constants::{MATERIAL_BODY_PREFIX, MATERIAL_CATEGORY, MATERIAL_SOURCE};
use crate::error::{IconError, Result};
use crate::infra::ReqwestHttp;
use crate::normalize::{MaterialNormalizer, NameNormalizer};
use crate::report::ReportStyle;
use crate::types::{IconCatalog, IconSource, RawEntry};
use metrics::counter;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

/// Material Symbols names from the Google Fonts icon metadata endpoint
pub struct MaterialCatalog {
    http: Arc<dyn HttpClientPort>,
    config: MaterialConfig,
}

impl MaterialCatalog {
    pub fn new(config: MaterialConfig) -> Result<Self> {
        let http = ReqwestHttp::new(&config.user_agent)?;
        Ok(Self::with_http(config, Arc::new(http)))
    }

    pub fn with_http(config: MaterialConfig, http: Arc<dyn HttpClientPort>) -> Self {
        Self { http, config }
    }
}

#[async_trait::async_trait]
impl IconSource for MaterialCatalog {
    fn source_name(&self) -> &'static str {
        MATERIAL_SOURCE
    }

    fn display_name(&self) -> &'static str {
        "Material"
    }

    fn categories(&self) -> Vec<&'static str> {
        vec![MATERIAL_CATEGORY]
    }

    fn report_style(&self) -> ReportStyle {
        ReportStyle::Total(self.display_name())
    }

    #[instrument(skip(self))]
    async fn fetch_catalog(&self, dedupe: bool) -> Result<IconCatalog> {
        let body = fetch_body(self.http.as_ref(), &self.config.url).await?;
        let entries = parse_metadata(&body)?;
        let (names, rejected) = MaterialNormalizer.normalize_all(&entries);

        counter!("icon_catalog_names_accepted_total", "source" => MATERIAL_SOURCE)
            .increment(names.len() as u64);
        counter!("icon_catalog_names_rejected_total", "source" => MATERIAL_SOURCE)
            .increment(rejected as u64);
        info!("Kept {} of {} Material icon names ({} rejected)", names.len(), entries.len(), rejected);

        let mut catalog = IconCatalog::new();
        catalog.insert_category(MATERIAL_CATEGORY, names, dedupe);
        Ok(catalog)
    }
}

/// Drop the `)]}'` guard from the start of the body, if present
pub fn strip_body_prefix(body: &str) -> &str {
    let trimmed = body.trim_start();
    trimmed.strip_prefix(MATERIAL_BODY_PREFIX).unwrap_or(trimmed)
}

/// Parse the metadata document into its `icons` entries
pub fn parse_metadata(body: &str) -> Result<Vec<RawEntry>> {
    let mut data: Value = serde_json::from_str(strip_body_prefix(body))?;
    let icons = data
        .get_mut("icons")
        .map(Value::take)
        .ok_or_else(|| IconError::MissingField("icons not found".into()))?;
    Ok(serde_json::from_value(icons)?)
}
