//! Fixed-interval scheduler that keeps running whatever a single run does.

use crate::error::BotError;
use async_trait::async_trait;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[async_trait]
pub trait ScheduledJob: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    async fn run_once(&self) -> Result<(), BotError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Completed,
    Failed(String),
    Panicked(String),
}

pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    /// `interval_seconds` must be positive.
    pub fn new(interval_seconds: u64) -> Result<Self, BotError> {
        if interval_seconds == 0 {
            return Err(BotError::Config(
                "scheduler interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self::with_interval(Duration::from_secs(interval_seconds)))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run the job once on its own task. Errors and panics are logged and
    /// returned as a `TickOutcome`; they never reach the caller as a failure.
    pub async fn tick<J: ScheduledJob>(&self, job: Arc<J>) -> TickOutcome {
        let name = job.name();
        let handle = tokio::spawn(async move { job.run_once().await });

        match handle.await {
            Ok(Ok(())) => {
                info!(job = name, "Scheduler: {} run completed", name);
                TickOutcome::Completed
            }
            Ok(Err(e)) => {
                error!(job = name, error = %e, "Scheduler: {} run failed", name);
                TickOutcome::Failed(e.to_string())
            }
            Err(join_error) if join_error.is_panic() => {
                let message = panic_message(join_error.into_panic());
                error!(job = name, panic = %message, "Scheduler: {} run panicked", name);
                TickOutcome::Panicked(message)
            }
            Err(join_error) => {
                error!(job = name, error = %join_error, "Scheduler: {} run cancelled", name);
                TickOutcome::Failed(join_error.to_string())
            }
        }
    }

    /// Run immediately, then once per interval, forever.
    pub async fn run<J: ScheduledJob>(&self, job: Arc<J>) {
        info!(
            interval_seconds = self.interval.as_secs(),
            "Scheduler: started with interval {}s",
            self.interval.as_secs()
        );
        loop {
            self.tick(job.clone()).await;
            info!(
                "Scheduler: waiting {}s until next run",
                self.interval.as_secs()
            );
            tokio::time::sleep(self.interval).await;
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
