//! Raw price history as returned by the market-data providers.

use crate::models::indicators::Candle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// Price points ordered by timestamp, oldest first, one point per timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from points in any order. When two points share a
    /// timestamp the one appearing later in the input wins.
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        points.dedup_by(|later, kept| {
            if later.timestamp == kept.timestamp {
                *kept = *later;
                true
            } else {
                false
            }
        });
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// The source only carries a single price per point, so open, high, low
    /// and close all equal that price and volume is zero.
    pub fn to_candles(&self) -> Vec<Candle> {
        self.points.iter().map(Candle::from_price_point).collect()
    }
}
