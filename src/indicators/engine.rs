//! Annotates a price history with every indicator column used for scoring.

use crate::error::BotError;
use crate::indicators::momentum::{macd_series, rsi_series, stochastic_series};
use crate::indicators::trend::{adx_series, ema_series};
use crate::indicators::volatility::bollinger_series;
use crate::models::indicators::{Candle, EnrichedSeries, IndicatorRow};
use crate::models::price::PriceSeries;

pub const RSI_PERIOD: u32 = 14;
pub const EMA_FAST_PERIOD: u32 = 9;
pub const EMA_SLOW_PERIOD: u32 = 21;
pub const MACD_FAST_PERIOD: u32 = 12;
pub const MACD_SLOW_PERIOD: u32 = 26;
pub const MACD_SIGNAL_PERIOD: u32 = 9;
pub const BOLLINGER_PERIOD: u32 = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;
pub const ADX_PERIOD: u32 = 14;
pub const STOCHASTIC_PERIOD: u32 = 14;
pub const STOCHASTIC_SMOOTHING: u32 = 3;

/// Points needed before the last row can be fully defined (MACD signal line is the longest chain).
pub const MIN_POINTS_FULLY_DEFINED: usize = (MACD_SLOW_PERIOD + MACD_SIGNAL_PERIOD - 1) as usize;

pub struct IndicatorEngine;

impl IndicatorEngine {
    pub fn compute(series: &PriceSeries) -> Result<EnrichedSeries, BotError> {
        if series.is_empty() {
            return Err(BotError::InsufficientData(
                "price series is empty".to_string(),
            ));
        }
        Self::compute_candles(&series.to_candles())
    }

    pub fn compute_candles(candles: &[Candle]) -> Result<EnrichedSeries, BotError> {
        if candles.is_empty() {
            return Err(BotError::InsufficientData("no candles".to_string()));
        }

        let rsi = rsi_series(candles, RSI_PERIOD);
        let ema9 = ema_series(candles, EMA_FAST_PERIOD);
        let ema21 = ema_series(candles, EMA_SLOW_PERIOD);
        let macd = macd_series(
            candles,
            MACD_FAST_PERIOD,
            MACD_SLOW_PERIOD,
            MACD_SIGNAL_PERIOD,
        );
        let bollinger = bollinger_series(candles, BOLLINGER_PERIOD, BOLLINGER_STD_DEV);
        let adx = adx_series(candles, ADX_PERIOD);
        let stochastic = stochastic_series(candles, STOCHASTIC_PERIOD, STOCHASTIC_SMOOTHING);

        let rows = candles
            .iter()
            .enumerate()
            .map(|(i, candle)| IndicatorRow {
                rsi: rsi[i],
                ema9: ema9[i],
                ema21: ema21[i],
                macd: macd.macd[i],
                macd_signal: macd.signal[i],
                bb_upper: bollinger.upper[i],
                bb_middle: bollinger.middle[i],
                bb_lower: bollinger.lower[i],
                adx: adx.adx[i],
                stoch_k: stochastic.k[i],
                stoch_d: stochastic.d[i],
                ..IndicatorRow::from_candle(candle)
            })
            .collect();

        Ok(EnrichedSeries::new(rows))
    }
}
