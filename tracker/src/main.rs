//! FitTrack dashboard report
//!
//! Reads a profile/history snapshot and prints the day's targets, progress
//! and intake as JSON.

use anyhow::{Context, Result};
use chrono::Utc;
use fittrack::{config, snapshot::Snapshot, TrackerService};
use fittrack_shared::validation::validate_profile;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::AppConfig::load()?;
    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting FitTrack report"
    );

    let snapshot = Snapshot::load(&config.snapshot.path)
        .with_context(|| format!("Failed to read snapshot {}", config.snapshot.path))?;

    // The calculators cope with any values; flag suspicious input but still report
    if let Err(errors) = validate_profile(&snapshot.profile) {
        for err in &errors {
            warn!("Profile check: {}", err.user_message());
        }
    }

    let today = snapshot.today.unwrap_or_else(|| Utc::now().date_naive());
    let (profiles, history, meals) = snapshot.into_stores();
    let service = TrackerService::new(profiles, history, config.progress.clone())?;

    let dashboard = service.dashboard(today, &meals)?;
    info!(
        date = %today,
        calories = dashboard.targets.targets.calories,
        entries = dashboard.progress.entries_count,
        "Dashboard ready"
    );

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(config: &config::AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fittrack=info".into()
        } else {
            "fittrack=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so stdout carries only the report
    if config.logging.json || config::AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
