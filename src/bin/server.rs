//! BTC signal bot server
//!
//! Serves the liveness, health and metrics endpoints and evaluates the
//! signal on a fixed interval until interrupted.

use btcsignal::config::{get_environment, Config};
use btcsignal::core::http::{start_server, AppState};
use btcsignal::core::runtime::SignalRuntime;
use btcsignal::core::scheduler::Scheduler;
use btcsignal::logging::init_logging;
use btcsignal::metrics::Metrics;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    info!(
        environment = %get_environment(),
        port = config.port,
        interval_seconds = config.interval_seconds,
        currency = %config.market.currency_code(),
        "Starting BTC signal bot"
    );

    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::new(metrics.clone());
    let runtime = Arc::new(SignalRuntime::from_config(
        &config,
        metrics,
        state.health.clone(),
    )?);
    let scheduler = Scheduler::new(config.interval_seconds)?;

    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    let scheduler_handle = tokio::spawn(async move {
        scheduler.run(runtime).await;
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
        _ = scheduler_handle => {
            error!("Scheduler stopped");
        }
    }

    Ok(())
}
