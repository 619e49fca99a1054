//! Dependencies handed to every pipeline step.

use crate::db::SignalStore;
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifications::Notifier;
use std::sync::Arc;

pub struct JobContext {
    pub data_provider: Arc<dyn MarketDataProvider>,
    pub store: Arc<dyn SignalStore>,
    pub notifiers: Vec<Arc<dyn Notifier>>,
    pub metrics: Option<Arc<Metrics>>,
    pub lookback_days: u32,
    /// Uppercase quote currency shown in reports.
    pub currency: String,
}

impl JobContext {
    pub fn new(
        data_provider: Arc<dyn MarketDataProvider>,
        store: Arc<dyn SignalStore>,
        notifiers: Vec<Arc<dyn Notifier>>,
    ) -> Self {
        Self {
            data_provider,
            store,
            notifiers,
            metrics: None,
            lookback_days: crate::config::DEFAULT_LOOKBACK_DAYS,
            currency: "CLP".to_string(),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_uppercase();
        self
    }
}
