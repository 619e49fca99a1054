//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// RSI for every candle.
///
/// Gains and losses are smoothed with Wilder's average (`alpha = 1 / period`).
/// The first candle has no previous close and contributes a zero move, so the
/// first value appears at index `period - 1`. A window without losses reads 100.
pub fn rsi_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let period = period as usize;
    if candles.is_empty() || period == 0 {
        return vec![None; candles.len()];
    }

    let mut gains = Vec::with_capacity(candles.len());
    let mut losses = Vec::with_capacity(candles.len());
    gains.push(Some(0.0));
    losses.push(Some(0.0));

    for pair in candles.windows(2) {
        let change = pair[1].close - pair[0].close;
        gains.push(Some(change.max(0.0)));
        losses.push(Some((-change).max(0.0)));
    }

    let avg_gain = math::wilder_series(&gains, period);
    let avg_loss = math::wilder_series(&losses, period);

    avg_gain
        .into_iter()
        .zip(avg_loss)
        .map(|(gain, loss)| match (gain, loss) {
            (Some(_), Some(loss)) if loss == 0.0 => Some(100.0),
            (Some(gain), Some(loss)) => Some(100.0 - 100.0 / (1.0 + gain / loss)),
            _ => None,
        })
        .collect()
}
