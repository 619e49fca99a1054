//! Rule-based confirmation counting over a single indicator reading.

use crate::models::indicators::IndicatorRow;
use crate::models::signal::SignalReason;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const ADX_TREND_THRESHOLD: f64 = 25.0;
pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;

/// Indicator values of one scored row.
///
/// The stochastic lines stay optional: a flat window has no %K even after the
/// lookback is satisfied, and its rule then contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub rsi: f64,
    pub ema9: f64,
    pub ema21: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub bb_upper: f64,
    pub bb_middle: f64,
    pub bb_lower: f64,
    pub adx: f64,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
}

impl IndicatorSnapshot {
    /// `None` until every lookback window of the row is satisfied.
    pub fn from_row(row: &IndicatorRow) -> Option<Self> {
        if !row.windows_satisfied() {
            return None;
        }
        Some(Self {
            close: row.close,
            rsi: row.rsi?,
            ema9: row.ema9?,
            ema21: row.ema21?,
            macd: row.macd?,
            macd_signal: row.macd_signal?,
            bb_upper: row.bb_upper?,
            bb_middle: row.bb_middle?,
            bb_lower: row.bb_lower?,
            adx: row.adx?,
            stoch_k: row.stoch_k.filter(|v| v.is_finite()),
            stoch_d: row.stoch_d.filter(|v| v.is_finite()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    pub buy_score: u32,
    pub sell_score: u32,
    pub reasons: Vec<SignalReason>,
}

impl ScoreCard {
    fn buy(&mut self, description: String) {
        self.buy_score += 1;
        self.reasons.push(SignalReason { description });
    }

    fn sell(&mut self, description: String) {
        self.sell_score += 1;
        self.reasons.push(SignalReason { description });
    }
}

/// Count buy and sell confirmations.
///
/// Each rule feeds at most one side, except ADX: a strong trend adds one to
/// both counters without picking a direction.
pub fn score(s: &IndicatorSnapshot) -> ScoreCard {
    let mut card = ScoreCard::default();

    if s.rsi < RSI_OVERSOLD {
        card.buy(format!("RSI oversold: {:.2}", s.rsi));
    } else if s.rsi > RSI_OVERBOUGHT {
        card.sell(format!("RSI overbought: {:.2}", s.rsi));
    }

    if s.macd > s.macd_signal {
        card.buy(format!(
            "MACD above signal: {:.2} > {:.2}",
            s.macd, s.macd_signal
        ));
    } else if s.macd < s.macd_signal {
        card.sell(format!(
            "MACD below signal: {:.2} < {:.2}",
            s.macd, s.macd_signal
        ));
    }

    if s.ema9 > s.ema21 {
        card.buy(format!("EMA9 above EMA21: {:.2} > {:.2}", s.ema9, s.ema21));
    } else if s.ema9 < s.ema21 {
        card.sell(format!("EMA9 below EMA21: {:.2} < {:.2}", s.ema9, s.ema21));
    }

    if s.close < s.bb_lower {
        card.buy(format!(
            "Close below lower Bollinger band: {:.2} < {:.2}",
            s.close, s.bb_lower
        ));
    } else if s.close > s.bb_upper {
        card.sell(format!(
            "Close above upper Bollinger band: {:.2} > {:.2}",
            s.close, s.bb_upper
        ));
    }

    if s.adx > ADX_TREND_THRESHOLD {
        let description = format!("ADX trend strength: {:.2}", s.adx);
        card.buy(description.clone());
        card.sell(description);
    }

    if let (Some(k), Some(d)) = (s.stoch_k, s.stoch_d) {
        if k < STOCH_OVERSOLD && d < STOCH_OVERSOLD {
            card.buy(format!("Stochastic oversold: K={:.2} D={:.2}", k, d));
        } else if k > STOCH_OVERBOUGHT && d > STOCH_OVERBOUGHT {
            card.sell(format!("Stochastic overbought: K={:.2} D={:.2}", k, d));
        }
    }

    card
}
