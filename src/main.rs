use anyhow::Context;
use chrono::Utc;
use latest_ratings::modules::catalog::{CatalogSelector, CatalogWriter, HttpCatalogTransport};
use latest_ratings::modules::provider::build_clients;
use latest_ratings::modules::runner::UpdateRunner;
use latest_ratings::modules::scheduler::{JsonFileScheduleStore, UpdateScheduler};
use latest_ratings::shared::config::RefreshConfig;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Runs one gate-checked refresh cycle and exits. Periodic invocation is
/// the host supervisor's job (cron, systemd timer, ...).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Latest rating service started");

    let config = RefreshConfig::from_env();

    let store = Arc::new(JsonFileScheduleStore::new(config.state_path.clone()));
    let scheduler = UpdateScheduler::new(store, config.update_interval_days);

    let mut state = scheduler.load_state();
    let now = Utc::now();

    if !scheduler.is_due(&state, now) {
        debug!("Skipping update - next update not due yet");
        info!("Latest rating service stopped");
        return Ok(());
    }

    if state.is_first_run() {
        info!("First time running - performing initial update");
    }

    let transport = Arc::new(
        HttpCatalogTransport::new(config.catalog_url.clone())
            .context("Failed to set up catalog transport")?,
    );
    let clients =
        build_clients(&config.enabled_providers()).context("Failed to set up provider clients")?;

    let selector = CatalogSelector::new(
        transport.clone(),
        config.movie_years_back,
        config.tvshow_months_back,
    );
    let writer = CatalogWriter::new(transport);
    let runner = UpdateRunner::new(
        selector,
        writer,
        clients,
        config.update_movies,
        config.update_tvshows,
    );

    info!("Starting scheduled update");
    let summary = runner.refresh_library(now).await;
    info!(
        "Update completed: {} items ({} updated, {} unchanged, {} without data, {} failed)",
        summary.total(),
        summary.updated,
        summary.unchanged,
        summary.no_data,
        summary.failed
    );

    scheduler
        .record_completion(&mut state, Utc::now())
        .context("Failed to record completion time")?;

    info!("Latest rating service stopped");
    Ok(())
}
