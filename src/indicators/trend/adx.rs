//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::indicators::Candle;

#[derive(Debug, Clone, Default)]
pub struct AdxSeries {
    pub adx: Vec<Option<f64>>,
    pub plus_di: Vec<Option<f64>>,
    pub minus_di: Vec<Option<f64>>,
}

/// Wilder's ADX.
///
/// True range and directional movement are summed over the first `period`
/// moves and then Wilder-smoothed. +DI/-DI are defined from index `period`,
/// ADX (the smoothed DX) from index `2 * period - 1`. A window without any
/// movement has zero DI and zero DX.
pub fn adx_series(candles: &[Candle], period: u32) -> AdxSeries {
    let n = candles.len();
    let p = period as usize;
    let mut out = AdxSeries {
        adx: vec![None; n],
        plus_di: vec![None; n],
        minus_di: vec![None; n],
    };
    if p == 0 || n <= p {
        return out;
    }

    let mut tr = vec![0.0; n];
    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];
    for i in 1..n {
        let (cur, prev) = (&candles[i], &candles[i - 1]);
        tr[i] = math::true_range(cur.high, cur.low, prev.close);

        let up_move = cur.high - prev.high;
        let down_move = prev.low - cur.low;
        if up_move > down_move && up_move > 0.0 {
            plus_dm[i] = up_move;
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm[i] = down_move;
        }
    }

    let mut smoothed_tr: f64 = tr[1..=p].iter().sum();
    let mut smoothed_plus: f64 = plus_dm[1..=p].iter().sum();
    let mut smoothed_minus: f64 = minus_dm[1..=p].iter().sum();
    let mut dx = vec![0.0; n];

    for i in p..n {
        if i > p {
            smoothed_tr = smoothed_tr - smoothed_tr / p as f64 + tr[i];
            smoothed_plus = smoothed_plus - smoothed_plus / p as f64 + plus_dm[i];
            smoothed_minus = smoothed_minus - smoothed_minus / p as f64 + minus_dm[i];
        }

        let (plus_di, minus_di) = if smoothed_tr > 0.0 {
            (
                100.0 * smoothed_plus / smoothed_tr,
                100.0 * smoothed_minus / smoothed_tr,
            )
        } else {
            (0.0, 0.0)
        };
        let di_sum = plus_di + minus_di;
        dx[i] = if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        };

        out.plus_di[i] = Some(plus_di);
        out.minus_di[i] = Some(minus_di);
    }

    let first_adx = 2 * p - 1;
    if first_adx >= n {
        return out;
    }
    let mut adx = math::mean(&dx[p..=first_adx]);
    out.adx[first_adx] = Some(adx);
    for i in first_adx + 1..n {
        adx = (adx * (p as f64 - 1.0) + dx[i]) / p as f64;
        out.adx[i] = Some(adx);
    }

    out
}
