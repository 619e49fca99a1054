//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// MACD columns aligned with the input candles.
#[derive(Debug, Clone, Default)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of MACD, seeded at the first defined MACD value
/// Histogram = MACD - Signal
pub fn macd_series(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let closes = math::defined(&closes);

    let fast = math::ema_series(&closes, fast_period as usize);
    let slow = math::ema_series(&closes, slow_period as usize);

    let macd: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let signal = math::ema_series(&macd, signal_period as usize);
    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
