use crate::models::indicators::EnrichedSeries;
use crate::models::price::PriceSeries;
use crate::models::signal::{Signal, SignalOutput};
use crate::services::notifications::DeliveryReport;

/// Everything fetched from the outside world for one run.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub history: PriceSeries,
    /// Best-effort; `None` when the spot source failed.
    pub spot_price: Option<f64>,
    /// Best-effort; `None` when the FX source failed.
    pub usd_rate: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub series: EnrichedSeries,
    pub signal: SignalOutput,
    pub change_24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationOutcome {
    pub previous: Option<Signal>,
    pub notified: bool,
    pub deliveries: Vec<DeliveryReport>,
    /// Marker value to persist after this run.
    pub marker: Option<Signal>,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub signal: SignalOutput,
    pub subject: String,
    pub report: String,
    pub notification: NotificationOutcome,
}
