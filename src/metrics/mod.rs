//! Prometheus metrics for the HTTP server and the signal pipeline.

use crate::models::signal::Signal;
use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub pipeline_runs_total: IntCounter,
    pub pipeline_failures_total: IntCounter,
    pub notifications_sent_total: IntCounterVec,
    pub notification_failures_total: IntCounterVec,
    /// 1 for BUY, 0 for WAIT, -1 for SELL.
    pub last_signal: IntGauge,
    pub last_run_timestamp_seconds: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let pipeline_runs_total =
            IntCounter::new("pipeline_runs_total", "Scheduled pipeline runs started")?;
        let pipeline_failures_total =
            IntCounter::new("pipeline_failures_total", "Pipeline runs that ended in an error")?;
        let notifications_sent_total = IntCounterVec::new(
            Opts::new("notifications_sent_total", "Notifications delivered per channel"),
            &["channel"],
        )?;
        let notification_failures_total = IntCounterVec::new(
            Opts::new(
                "notification_failures_total",
                "Notification attempts that failed per channel",
            ),
            &["channel"],
        )?;
        let last_signal = IntGauge::new("last_signal", "Most recent computed signal")?;
        let last_run_timestamp_seconds = Gauge::new(
            "last_run_timestamp_seconds",
            "Unix time of the last completed pipeline run",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(pipeline_runs_total.clone()))?;
        registry.register(Box::new(pipeline_failures_total.clone()))?;
        registry.register(Box::new(notifications_sent_total.clone()))?;
        registry.register(Box::new(notification_failures_total.clone()))?;
        registry.register(Box::new(last_signal.clone()))?;
        registry.register(Box::new(last_run_timestamp_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            pipeline_runs_total,
            pipeline_failures_total,
            notifications_sent_total,
            notification_failures_total,
            last_signal,
            last_run_timestamp_seconds,
        })
    }

    pub fn record_signal(&self, signal: Signal) {
        let value = match signal {
            Signal::Buy => 1,
            Signal::Wait => 0,
            Signal::Sell => -1,
        };
        self.last_signal.set(value);
    }

    pub fn record_delivery(&self, channel: &str, delivered: bool) {
        if delivered {
            self.notifications_sent_total.with_label_values(&[channel]).inc();
        } else {
            self.notification_failures_total
                .with_label_values(&[channel])
                .inc();
        }
    }

    /// Render all registered metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
