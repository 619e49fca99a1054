//! Unit tests for RSI indicator

use crate::test_utils::{assert_close, candles, rising, sawtooth, zigzag};
use btcsignal::indicators::momentum::rsi_series;

#[test]
fn test_rsi_undefined_before_window() {
    let series = rsi_series(&candles(&rising(14, 100.0, 1.0)), 14);
    assert!(series[..13].iter().all(Option::is_none));
    assert!(series[13].is_some());

    let short = rsi_series(&candles(&rising(13, 100.0, 1.0)), 14);
    assert!(short.iter().all(Option::is_none));
}

#[test]
fn test_rsi_without_losses_is_100() {
    let series = rsi_series(&candles(&rising(30, 100.0, 1.0)), 14);
    assert_close(series[29].unwrap(), 100.0);
}

#[test]
fn test_rsi_without_gains_is_0() {
    let series = rsi_series(&candles(&rising(30, 200.0, -1.0)), 14);
    assert_close(series[29].unwrap(), 0.0);
}

#[test]
fn test_rsi_reference_values() {
    // Wilder averages, alpha = 1/14, seeded with a zero move at the first point.
    let series = rsi_series(&candles(&sawtooth(40)), 14);
    assert_close(series[13].unwrap(), 70.24550414578533);
    assert_close(series[20].unwrap(), 65.0);
    assert_close(series[39].unwrap(), 68.48140745032615);
}

#[test]
fn test_rsi_stays_in_range_for_choppy_prices() {
    let series = rsi_series(&candles(&zigzag(60)), 14);
    for value in series.into_iter().flatten() {
        assert!(value > 0.0 && value < 100.0, "rsi out of range: {}", value);
    }
}

#[test]
fn test_rsi_empty_input() {
    assert!(rsi_series(&[], 14).is_empty());
}
