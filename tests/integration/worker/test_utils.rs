//! Test doubles for pipeline and scheduler tests

#![allow(dead_code)]

use async_trait::async_trait;
use btcsignal::db::{MemorySignalStore, SignalStore};
use btcsignal::jobs::context::JobContext;
use btcsignal::metrics::Metrics;
use btcsignal::models::price::{PricePoint, PriceSeries};
use btcsignal::services::market_data::MarketDataProvider;
use btcsignal::services::notifications::Notifier;
use btcsignal::BotError;
use chrono::{Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// Market data served from memory.
pub struct StaticMarketData {
    pub history: Option<PriceSeries>,
    pub spot_price: Option<f64>,
    pub usd_rate: Option<f64>,
}

impl StaticMarketData {
    pub fn new(prices: &[f64]) -> Self {
        Self {
            history: Some(hourly_series(prices)),
            spot_price: prices.last().copied(),
            usd_rate: Some(900.0),
        }
    }

    pub fn failing() -> Self {
        Self {
            history: None,
            spot_price: None,
            usd_rate: None,
        }
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketData {
    async fn get_history(&self, _days: u32) -> Result<PriceSeries, BotError> {
        self.history
            .clone()
            .ok_or_else(|| BotError::data_unavailable("coingecko", "connection refused"))
    }

    async fn get_spot_price(&self) -> Result<f64, BotError> {
        self.spot_price
            .ok_or_else(|| BotError::data_unavailable("buda", "connection refused"))
    }

    async fn get_reference_rate(&self) -> Result<f64, BotError> {
        self.usd_rate
            .ok_or_else(|| BotError::data_unavailable("exchangerate", "connection refused"))
    }
}

/// Records every message it is asked to send; optionally fails each attempt.
pub struct RecordingNotifier {
    channel: &'static str,
    fail: bool,
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new(channel: &'static str) -> Arc<Self> {
        Arc::new(Self {
            channel,
            fail: false,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(channel: &'static str) -> Arc<Self> {
        Arc::new(Self {
            channel,
            fail: true,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> &'static str {
        self.channel
    }

    async fn send(&self, subject: &str, body: &str) -> Result<(), BotError> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        if self.fail {
            Err(BotError::delivery(self.channel, "smtp connection reset"))
        } else {
            Ok(())
        }
    }
}

pub fn hourly_series(prices: &[f64]) -> PriceSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    PriceSeries::new(
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(start + Duration::hours(i as i64), p))
            .collect(),
    )
}

/// Choppy BTC/CLP-like prices, long enough for every indicator.
pub fn market_prices(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            45_000_000.0 + (i % 7) as f64 * 150_000.0 - (i % 3) as f64 * 200_000.0
                + i as f64 * 10_000.0
        })
        .collect()
}

pub struct Harness {
    pub ctx: JobContext,
    pub store: Arc<MemorySignalStore>,
    pub email: Arc<RecordingNotifier>,
    pub whatsapp: Arc<RecordingNotifier>,
    pub metrics: Arc<Metrics>,
}

impl Harness {
    pub fn new(provider: StaticMarketData, email: Arc<RecordingNotifier>) -> Self {
        Self::with_store(provider, email, MemorySignalStore::new())
    }

    pub fn with_store(
        provider: StaticMarketData,
        email: Arc<RecordingNotifier>,
        store: MemorySignalStore,
    ) -> Self {
        let store = Arc::new(store);
        let whatsapp = RecordingNotifier::new("whatsapp");
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let notifiers: Vec<Arc<dyn Notifier>> = vec![email.clone(), whatsapp.clone()];
        let store_handle: Arc<dyn SignalStore> = store.clone();

        let ctx = JobContext::new(Arc::new(provider), store_handle, notifiers)
            .with_metrics(metrics.clone())
            .with_currency("clp");

        Self {
            ctx,
            store,
            email,
            whatsapp,
            metrics,
        }
    }
}
