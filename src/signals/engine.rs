//! Signal evaluation over an enriched price history.

use crate::common::math;
use crate::models::indicators::EnrichedSeries;
use crate::models::signal::SignalOutput;
use crate::signals::decision::decide;
use crate::signals::scoring::{score, IndicatorSnapshot};

/// Points between the latest close and the close it is compared against for the 24h return.
pub const RETURN_LOOKBACK_POINTS: usize = 24;

pub struct SignalEngine;

impl SignalEngine {
    /// Score the latest row, the same one the report shows. Until its lookback
    /// windows are satisfied the result is WAIT with an "insufficient data" rationale.
    pub fn evaluate(series: &EnrichedSeries) -> SignalOutput {
        match series.latest().and_then(IndicatorSnapshot::from_row) {
            Some(snapshot) => Self::evaluate_snapshot(&snapshot),
            None => SignalOutput::insufficient_data(),
        }
    }

    pub fn evaluate_snapshot(snapshot: &IndicatorSnapshot) -> SignalOutput {
        decide(score(snapshot))
    }
}

/// Percentage change between the latest close and the close 24 points earlier.
pub fn change_24h(closes: &[f64]) -> Option<f64> {
    if closes.len() <= RETURN_LOOKBACK_POINTS {
        return None;
    }
    let latest = closes[closes.len() - 1];
    let earlier = closes[closes.len() - 1 - RETURN_LOOKBACK_POINTS];
    math::percent_change(earlier, latest)
}
