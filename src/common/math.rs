//! Window helpers shared by the indicators.
//!
//! The `*_series` helpers return one entry per input value. An entry is `None`
//! until its lookback window is satisfied, so callers never see a number
//! computed from a partial window.

pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

pub fn mean(window: &[f64]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    window.iter().sum::<f64>() / window.len() as f64
}

/// Standard deviation with `ddof = 0`.
pub fn population_std(window: &[f64]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let avg = mean(window);
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / window.len() as f64;
    variance.sqrt()
}

/// Lift a dense column into the optional representation used by the series helpers.
pub fn defined(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Recursive exponentially weighted mean.
///
/// The first defined value seeds the average; each later value moves it by
/// `alpha`. Leading `None`s are skipped and an output appears once
/// `min_periods` defined values have been consumed.
pub fn ewm_series(values: &[Option<f64>], alpha: f64, min_periods: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    let mut state: Option<f64> = None;
    let mut seen = 0usize;

    for value in values {
        match value {
            Some(v) => {
                let next = match state {
                    Some(prev) => prev + alpha * (v - prev),
                    None => *v,
                };
                state = Some(next);
                seen += 1;
                out.push(if seen >= min_periods { state } else { None });
            }
            None => out.push(None),
        }
    }

    out
}

/// EMA with span smoothing, `alpha = 2 / (period + 1)`.
pub fn ema_series(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    ewm_series(values, 2.0 / (period as f64 + 1.0), period)
}

/// Wilder smoothing, `alpha = 1 / period`.
pub fn wilder_series(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    ewm_series(values, 1.0 / period as f64, period)
}

/// Apply `f` to every full window of `window` defined values.
pub fn rolling_series<F>(values: &[Option<f64>], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    (0..values.len())
        .map(|i| {
            if window == 0 || i + 1 < window {
                return None;
            }
            let slice: Option<Vec<f64>> = values[i + 1 - window..=i].iter().copied().collect();
            slice.map(|w| f(&w))
        })
        .collect()
}

pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_series(values, window, mean)
}

pub fn rolling_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_series(values, window, population_std)
}

pub fn rolling_max(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_series(values, window, |w| w.iter().copied().fold(f64::MIN, f64::max))
}

pub fn rolling_min(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_series(values, window, |w| w.iter().copied().fold(f64::MAX, f64::min))
}

/// Percentage move from `from` to `to`; `None` when `from` is zero or either side is not finite.
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 || !from.is_finite() || !to.is_finite() {
        return None;
    }
    Some((to - from) / from * 100.0)
}
