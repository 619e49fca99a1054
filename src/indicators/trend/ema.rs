//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// EMA of closes, seeded with the first close, defined from index `period - 1`.
pub fn ema_series(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&math::defined(&closes), period as usize)
}
