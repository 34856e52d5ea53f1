use crate::apis::fetch_body;
use crate::app::ports::HttpClientPort;
use crate::config::FontAwesomeConfig;
use crate::constants::{FONT_AWESOME_PACKAGES, FONT_AWESOME_SOURCE};
use crate::error::{IconError, Result};
use crate::infra::ReqwestHttp;
use crate::normalize::{FontAwesomeNormalizer, NameNormalizer};
use crate::types::{CanonicalIconName, IconCatalog, IconSource, RawEntry};
use metrics::counter;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Font Awesome free icons, read from the GitHub contents listing of each
/// `@fortawesome/free-*-svg-icons` package.
pub struct FontAwesomeCatalog {
    http: Arc<dyn HttpClientPort>,
    config: FontAwesomeConfig,
}

impl FontAwesomeCatalog {
    pub fn new(config: FontAwesomeConfig) -> Result<Self> {
        let http = ReqwestHttp::new(&config.user_agent)?;
        Ok(Self::with_http(config, Arc::new(http)))
    }

    pub fn with_http(config: FontAwesomeConfig, http: Arc<dyn HttpClientPort>) -> Self {
        Self { http, config }
    }

    #[instrument(skip(self))]
    async fn fetch_category(&self, category: &str, package: &str) -> Result<Vec<CanonicalIconName>> {
        let url = self.config.listing_url(package);
        let body = fetch_body(self.http.as_ref(), &url).await?;
        let entries = parse_listing(&body)?;
        let (names, rejected) = FontAwesomeNormalizer.normalize_all(&entries);

        counter!("icon_catalog_names_accepted_total", "source" => FONT_AWESOME_SOURCE)
            .increment(names.len() as u64);
        counter!("icon_catalog_names_rejected_total", "source" => FONT_AWESOME_SOURCE)
            .increment(rejected as u64);
        debug!("{} of {} files in {} are icons", names.len(), entries.len(), package);
        Ok(names)
    }
}

#[async_trait::async_trait]
impl IconSource for FontAwesomeCatalog {
    fn source_name(&self) -> &'static str {
        FONT_AWESOME_SOURCE
    }

    fn display_name(&self) -> &'static str {
        "Font Awesome"
    }

    fn categories(&self) -> Vec<&'static str> {
        FONT_AWESOME_PACKAGES.iter().map(|(category, _)| *category).collect()
    }

    #[instrument(skip(self))]
    async fn fetch_catalog(&self, dedupe: bool) -> Result<IconCatalog> {
        let mut catalog = IconCatalog::new();
        for (category, package) in FONT_AWESOME_PACKAGES {
            let names = self.fetch_category(category, package).await?;
            catalog.insert_category(category, names, dedupe);
        }
        info!("Fetched {} Font Awesome icons", catalog.total_icons());
        Ok(catalog)
    }
}

/// Parse a GitHub contents listing into its entries. GitHub answers errors
/// (rate limits, bad paths) with an object carrying `message`.
pub fn parse_listing(body: &str) -> Result<Vec<RawEntry>> {
    let data: Value = serde_json::from_str(body)?;
    if !data.is_array() {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("expected a directory listing");
        return Err(IconError::Api { message: message.to_string() });
    }
    Ok(serde_json::from_value(data)?)
}
