use crate::config::Config;
use crate::error::Result;
use crate::report::render_report;
use crate::storage::CatalogStore;
use crate::types::{FailurePolicy, IconCatalog, IconSource};
use metrics::{counter, histogram};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Per-source run settings, taken from the matching config section
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub output: PathBuf,
    pub sample_size: usize,
    pub on_failure: FailurePolicy,
    pub dedupe: bool,
}

impl RunSettings {
    pub fn font_awesome(config: &Config) -> Self {
        Self {
            output: config.font_awesome.output.clone(),
            sample_size: config.font_awesome.sample_size,
            on_failure: config.font_awesome.on_failure,
            dedupe: config.dedupe,
        }
    }

    pub fn material(config: &Config) -> Self {
        Self {
            output: config.material.output.clone(),
            sample_size: config.material.sample_size,
            on_failure: config.material.on_failure,
            dedupe: config.dedupe,
        }
    }
}

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub source_name: String,
    pub display_name: String,
    pub catalog: IconCatalog,
    pub output_file: PathBuf,
    /// Set when the fetch failed and the `empty` policy replaced the catalog
    pub fetch_error: Option<String>,
    pub report: String,
}

impl PipelineResult {
    /// Console line announcing a fetch error that the `empty` policy absorbed
    pub fn fetch_error_line(&self) -> Option<String> {
        self.fetch_error
            .as_ref()
            .map(|err| format!("Error fetching {} icons: {}", self.display_name, err))
    }
}

pub struct Pipeline;

impl Pipeline {
    /// Fetch one source, apply its failure policy, persist the catalog and
    /// render the summary. With `abort`, a fetch error is returned and
    /// nothing is written.
    #[instrument(skip(source, settings, store), fields(source = %source.source_name()))]
    pub async fn run_source(
        source: &dyn IconSource,
        settings: &RunSettings,
        store: &dyn CatalogStore,
    ) -> Result<PipelineResult> {
        let source_name = source.source_name();
        let started = Instant::now();
        info!("Starting pipeline");

        let (catalog, fetch_error) = match source.fetch_catalog(settings.dedupe).await {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                counter!("icon_catalog_fetch_failures_total", "source" => source_name).increment(1);
                match settings.on_failure {
                    FailurePolicy::Abort => {
                        error!("Fetching {} failed, aborting: {}", source_name, e);
                        return Err(e);
                    }
                    FailurePolicy::Empty => {
                        error!("Fetching {} failed, writing an empty catalog: {}", source_name, e);
                        let catalog = IconCatalog::empty_with_categories(&source.categories());
                        (catalog, Some(e.to_string()))
                    }
                }
            }
        };

        store.save(&settings.output, &catalog)?;

        histogram!("icon_catalog_run_duration_seconds", "source" => source_name)
            .record(started.elapsed().as_secs_f64());
        info!(
            icons = catalog.total_icons(),
            output = %settings.output.display(),
            "Pipeline finished"
        );

        let report = render_report(&catalog, source.report_style(), settings.sample_size);
        Ok(PipelineResult {
            source_name: source_name.to_string(),
            display_name: source.display_name().to_string(),
            catalog,
            output_file: settings.output.clone(),
            fetch_error,
            report,
        })
    }
}
