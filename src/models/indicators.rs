use crate::models::price::PricePoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Synthesize a degenerate candle where every price field equals the point's price.
    pub fn from_price_point(point: &PricePoint) -> Self {
        Self::new(
            point.price,
            point.price,
            point.price,
            point.price,
            0.0,
            point.timestamp,
        )
    }
}

/// One point of the history annotated with every indicator column.
///
/// `None` means the indicator's lookback window is not yet satisfied at this
/// point (or the value is mathematically undefined, e.g. a zero range).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,

    pub rsi: Option<f64>,
    pub ema9: Option<f64>,
    pub ema21: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub adx: Option<f64>,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
}

impl IndicatorRow {
    pub fn from_candle(candle: &Candle) -> Self {
        Self {
            timestamp: candle.timestamp,
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: candle.volume,
            rsi: None,
            ema9: None,
            ema21: None,
            macd: None,
            macd_signal: None,
            bb_upper: None,
            bb_middle: None,
            bb_lower: None,
            adx: None,
            stoch_k: None,
            stoch_d: None,
        }
    }

    /// Every windowed column except the stochastic lines is defined.
    ///
    /// %K is also undefined over a flat window, so it does not say whether the
    /// lookback has been satisfied.
    pub fn windows_satisfied(&self) -> bool {
        [
            self.rsi,
            self.ema9,
            self.ema21,
            self.macd,
            self.macd_signal,
            self.bb_upper,
            self.bb_middle,
            self.bb_lower,
            self.adx,
        ]
        .iter()
        .all(|v| v.map_or(false, f64::is_finite))
    }
}

/// The price history with indicator columns attached, oldest row first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichedSeries {
    rows: Vec<IndicatorRow>,
}

impl EnrichedSeries {
    pub fn new(rows: Vec<IndicatorRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.close).collect()
    }
}
