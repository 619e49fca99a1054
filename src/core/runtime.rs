//! Wires configuration into a runnable signal job.

use crate::config::Config;
use crate::core::http::HealthStatus;
use crate::core::scheduler::ScheduledJob;
use crate::db::FileSignalStore;
use crate::error::BotError;
use crate::jobs::context::JobContext;
use crate::jobs::workflow::run_pipeline;
use crate::metrics::Metrics;
use crate::services::market_data::HttpMarketData;
use crate::services::notifications::{EmailNotifier, Notifier, WhatsAppNotifier};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct SignalRuntime {
    ctx: Arc<JobContext>,
    health: Arc<RwLock<HealthStatus>>,
}

impl SignalRuntime {
    pub fn new(ctx: JobContext, health: Arc<RwLock<HealthStatus>>) -> Self {
        Self {
            ctx: Arc::new(ctx),
            health,
        }
    }

    /// Build the production job: HTTP market data, a file-backed marker and
    /// whichever notification channels have credentials.
    pub fn from_config(
        config: &Config,
        metrics: Arc<Metrics>,
        health: Arc<RwLock<HealthStatus>>,
    ) -> Result<Self, BotError> {
        let ctx = JobContext::new(
            Arc::new(HttpMarketData::new(&config.market)),
            Arc::new(FileSignalStore::new(&config.state_path)),
            build_notifiers(config)?,
        )
        .with_metrics(metrics)
        .with_lookback_days(config.market.lookback_days)
        .with_currency(config.market.currency_code());

        Ok(Self::new(ctx, health))
    }

    pub fn context(&self) -> &JobContext {
        &self.ctx
    }
}

pub fn build_notifiers(config: &Config) -> Result<Vec<Arc<dyn Notifier>>, BotError> {
    let mut notifiers: Vec<Arc<dyn Notifier>> = Vec::new();

    match &config.email {
        Some(email) => notifiers.push(Arc::new(EmailNotifier::new(email)?)),
        None => warn!("Email credentials missing, email channel disabled"),
    }
    match &config.whatsapp {
        Some(whatsapp) => notifiers.push(Arc::new(WhatsAppNotifier::new(whatsapp))),
        None => warn!("Twilio credentials missing, WhatsApp channel disabled"),
    }

    info!(
        channels = ?notifiers.iter().map(|n| n.channel()).collect::<Vec<_>>(),
        "Notification channels configured"
    );
    Ok(notifiers)
}

#[async_trait]
impl ScheduledJob for SignalRuntime {
    fn name(&self) -> &'static str {
        "signal-pipeline"
    }

    async fn run_once(&self) -> Result<(), BotError> {
        if let Some(metrics) = &self.ctx.metrics {
            metrics.pipeline_runs_total.inc();
        }

        match run_pipeline(&self.ctx).await {
            Ok(outcome) => {
                let now = Utc::now();
                self.health
                    .write()
                    .await
                    .record_success(outcome.signal.signal, now);
                if let Some(metrics) = &self.ctx.metrics {
                    metrics.record_signal(outcome.signal.signal);
                    metrics.last_run_timestamp_seconds.set(now.timestamp() as f64);
                }
                Ok(())
            }
            Err(e) => {
                self.health.write().await.record_failure();
                if let Some(metrics) = &self.ctx.metrics {
                    metrics.pipeline_failures_total.inc();
                }
                Err(e)
            }
        }
    }
}
