use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use icon_catalog::apis::{FontAwesomeCatalog, MaterialCatalog};
use icon_catalog::config::Config;
use icon_catalog::logging;
use icon_catalog::pipeline::{Pipeline, RunSettings};
use icon_catalog::storage::{verify_round_trip, CatalogStore, JsonFileStore};
use icon_catalog::types::IconSource;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "icon_catalog")]
#[command(about = "Fetches Font Awesome and Material Symbols icon names into JSON catalogs")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $ICON_CATALOG_CONFIG, then icons.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write both catalogs into this directory instead of the configured paths
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the Font Awesome free solid, regular and brands icons
    FontAwesome,
    /// Fetch the Material Symbols icon names
    Material,
    /// Run both sources, Font Awesome first
    All,
    /// Check that a catalog file re-serializes to identical bytes
    Verify {
        path: PathBuf,
    },
}

async fn run_source(source: &dyn IconSource, settings: &RunSettings, store: &dyn CatalogStore) -> anyhow::Result<()> {
    let result = Pipeline::run_source(source, settings, store)
        .await
        .with_context(|| format!("{} pipeline failed", source.source_name()))?;

    if let Some(line) = result.fetch_error_line() {
        println!("{}", line);
    }
    print!("{}", result.report);
    info!("Catalog written to {}", result.output_file.display());
    Ok(())
}

async fn run_font_awesome(config: &Config, store: &dyn CatalogStore) -> anyhow::Result<()> {
    let source = FontAwesomeCatalog::new(config.font_awesome.clone())?;
    run_source(&source, &RunSettings::font_awesome(config), store).await
}

async fn run_material(config: &Config, store: &dyn CatalogStore) -> anyhow::Result<()> {
    let source = MaterialCatalog::new(config.material.clone())?;
    run_source(&source, &RunSettings::material(config), store).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }
    let store = JsonFileStore;

    match cli.command.unwrap_or(Commands::All) {
        Commands::FontAwesome => run_font_awesome(&config, &store).await?,
        Commands::Material => run_material(&config, &store).await?,
        Commands::All => {
            // The sources are independent; a failure in one does not skip the other
            let mut failures = 0;
            for outcome in [
                run_font_awesome(&config, &store).await,
                run_material(&config, &store).await,
            ] {
                if let Err(e) = outcome {
                    error!("{:#}", e);
                    failures += 1;
                }
            }
            if failures > 0 {
                bail!("{} of 2 sources failed", failures);
            }
        }
        Commands::Verify { path } => {
            let identical = verify_round_trip(&path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            if !identical {
                bail!("{} does not re-serialize to identical bytes", path.display());
            }
            println!("{}: OK", path.display());
        }
    }
    Ok(())
}
