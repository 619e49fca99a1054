//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::Candle;

#[derive(Debug, Clone, Default)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
pub fn bollinger_series(candles: &[Candle], period: u32, std_dev: f64) -> BollingerSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let closes = math::defined(&closes);

    let middle = math::rolling_mean(&closes, period as usize);
    let deviation = math::rolling_std(&closes, period as usize);

    let band = |sign: f64| -> Vec<Option<f64>> {
        middle
            .iter()
            .zip(&deviation)
            .map(|(m, s)| Some((*m)? + sign * std_dev * (*s)?))
            .collect()
    };
    let upper = band(1.0);
    let lower = band(-1.0);

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}
