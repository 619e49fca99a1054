//! Unit tests for Bollinger Bands

use crate::test_utils::{assert_close, candles, constant, rising};
use btcsignal::indicators::volatility::bollinger_series;

#[test]
fn test_bollinger_undefined_before_window() {
    let series = bollinger_series(&candles(&rising(20, 1.0, 1.0)), 20, 2.0);
    assert!(series.middle[18].is_none());
    assert!(series.upper[18].is_none());
    assert!(series.middle[19].is_some());
}

#[test]
fn test_bollinger_known_values() {
    let series = bollinger_series(&candles(&rising(20, 1.0, 1.0)), 20, 2.0);
    let std = 33.25_f64.sqrt();
    assert_close(series.middle[19].unwrap(), 10.5);
    assert_close(series.upper[19].unwrap(), 10.5 + 2.0 * std);
    assert_close(series.lower[19].unwrap(), 10.5 - 2.0 * std);
}

#[test]
fn test_bollinger_flat_prices_collapse() {
    let series = bollinger_series(&candles(&constant(25, 7.0)), 20, 2.0);
    assert_close(series.upper[24].unwrap(), 7.0);
    assert_close(series.middle[24].unwrap(), 7.0);
    assert_close(series.lower[24].unwrap(), 7.0);
}
