//! Stochastic Oscillator (%K / %D)

use crate::common::math;
use crate::models::indicators::Candle;

#[derive(Debug, Clone, Default)]
pub struct StochasticSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
}

/// %K = (Close - Lowest Low) / (Highest High - Lowest Low) * 100 over `period`
/// %D = SMA(%K, smoothing)
///
/// A window whose high equals its low has no defined %K.
pub fn stochastic_series(candles: &[Candle], period: u32, smoothing: u32) -> StochasticSeries {
    let highs: Vec<Option<f64>> = candles.iter().map(|c| Some(c.high)).collect();
    let lows: Vec<Option<f64>> = candles.iter().map(|c| Some(c.low)).collect();

    let highest = math::rolling_max(&highs, period as usize);
    let lowest = math::rolling_min(&lows, period as usize);

    let k: Vec<Option<f64>> = candles
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(candle, (high, low))| {
            let (high, low) = ((*high)?, (*low)?);
            let range = high - low;
            if range > 0.0 {
                Some((candle.close - low) / range * 100.0)
            } else {
                None
            }
        })
        .collect();
    let d = math::rolling_mean(&k, smoothing as usize);

    StochasticSeries { k, d }
}
