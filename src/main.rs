//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; scoring lives in the use cases.

use anyhow::Context;
use dotenv::dotenv;
use gift_profile::adapters::catalog::{BuiltinCatalog, JsonCatalog};
use gift_profile::adapters::names::PortugueseGiftNames;
use gift_profile::adapters::scores::source_for_path;
use gift_profile::adapters::ui::render::render_report;
use gift_profile::adapters::ui::tui::TuiInputPort;
use gift_profile::ports::{GiftNamePort, InputPort, MinistryCatalogPort};
use gift_profile::shared::config::AppConfig;
use gift_profile::usecases::ProfileService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().context("failed to load configuration")?;
    let top_gifts_count = cfg.top_gifts_count_or_default();
    let format = cfg.output_format_or_default();

    // --- Static data: catalog is read once here and shared read-only ---
    let catalog: Arc<dyn MinistryCatalogPort> = match cfg.catalog_path.as_deref() {
        Some(path) => Arc::new(
            JsonCatalog::load(path)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        ),
        None => Arc::new(BuiltinCatalog::new()),
    };
    info!(
        ministries = catalog.ministries().len(),
        top_gifts_count,
        ?format,
        "catalog ready"
    );

    let names: Arc<dyn GiftNamePort> = Arc::new(PortugueseGiftNames);
    let profile = Arc::new(ProfileService::new(Arc::clone(&names), catalog));

    // --- Non-interactive: scores path from argv or config, print once ---
    let scores_path = std::env::args().nth(1).or_else(|| cfg.scores_path.clone());
    if let Some(path) = scores_path {
        let scores = source_for_path(&path)
            .load_scores()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        let report = profile.build_report(&scores, top_gifts_count);
        println!(
            "{}",
            render_report(&report, format).map_err(|e| anyhow::anyhow!("{}", e))?
        );
        return Ok(());
    }

    // --- Interactive ---
    gift_profile::adapters::ui::init_ui();
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        profile,
        names,
        top_gifts_count,
        format,
    ));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
