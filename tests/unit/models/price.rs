//! Unit tests for the price history model

use crate::test_utils::base_time;
use btcsignal::models::price::{PricePoint, PriceSeries};
use chrono::Duration;

#[test]
fn test_series_is_sorted_oldest_first() {
    let t0 = base_time();
    let series = PriceSeries::new(vec![
        PricePoint::new(t0 + Duration::hours(2), 3.0),
        PricePoint::new(t0, 1.0),
        PricePoint::new(t0 + Duration::hours(1), 2.0),
    ]);
    assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    assert_eq!(series.last().unwrap().price, 3.0);
}

#[test]
fn test_duplicate_timestamps_keep_the_later_point() {
    let t0 = base_time();
    let series = PriceSeries::new(vec![
        PricePoint::new(t0, 1.0),
        PricePoint::new(t0 + Duration::hours(1), 2.0),
        PricePoint::new(t0, 5.0),
    ]);
    assert_eq!(series.len(), 2);
    assert_eq!(series.closes(), vec![5.0, 2.0]);
}

#[test]
fn test_candles_are_synthesized_from_price() {
    let series = PriceSeries::new(vec![PricePoint::new(base_time(), 42.5)]);
    let candles = series.to_candles();
    assert_eq!(candles.len(), 1);
    let candle = candles[0];
    assert_eq!(candle.open, 42.5);
    assert_eq!(candle.high, 42.5);
    assert_eq!(candle.low, 42.5);
    assert_eq!(candle.close, 42.5);
    assert_eq!(candle.volume, 0.0);
    assert_eq!(candle.timestamp, base_time());
}

#[test]
fn test_empty_series() {
    let series = PriceSeries::default();
    assert!(series.is_empty());
    assert!(series.last().is_none());
    assert!(series.to_candles().is_empty());
}
