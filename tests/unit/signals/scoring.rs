//! Unit tests for confirmation scoring

use btcsignal::models::signal::Signal;
use btcsignal::signals::engine::SignalEngine;
use btcsignal::signals::scoring::{score, IndicatorSnapshot};

pub fn neutral() -> IndicatorSnapshot {
    IndicatorSnapshot {
        close: 100.0,
        rsi: 50.0,
        ema9: 100.0,
        ema21: 100.0,
        macd: 0.5,
        macd_signal: 0.5,
        bb_upper: 110.0,
        bb_middle: 100.0,
        bb_lower: 90.0,
        adx: 10.0,
        stoch_k: Some(50.0),
        stoch_d: Some(50.0),
    }
}

#[test]
fn test_all_neutral_scores_nothing() {
    let card = score(&neutral());
    assert_eq!(card.buy_score, 0);
    assert_eq!(card.sell_score, 0);
    assert!(card.reasons.is_empty());

    let output = SignalEngine::evaluate_snapshot(&neutral());
    assert_eq!(output.signal, Signal::Wait);
}

#[test]
fn test_full_buy_setup() {
    let snapshot = IndicatorSnapshot {
        close: 85.0,
        rsi: 25.0,
        ema9: 105.0,
        ema21: 100.0,
        macd: 1.0,
        macd_signal: 0.5,
        adx: 30.0,
        stoch_k: Some(15.0),
        stoch_d: Some(10.0),
        ..neutral()
    };

    let card = score(&snapshot);
    assert_eq!(card.buy_score, 6);
    assert_eq!(card.sell_score, 1);
    assert_eq!(card.reasons.len(), 7);

    let output = SignalEngine::evaluate_snapshot(&snapshot);
    assert_eq!(output.signal, Signal::Buy);
    assert_eq!(output.rationale, "6 indicators point to buy");
}

#[test]
fn test_full_sell_setup() {
    let snapshot = IndicatorSnapshot {
        close: 115.0,
        rsi: 75.0,
        ema9: 95.0,
        ema21: 100.0,
        macd: -1.0,
        macd_signal: 0.0,
        stoch_k: Some(85.0),
        stoch_d: Some(90.0),
        ..neutral()
    };

    let card = score(&snapshot);
    assert_eq!(card.buy_score, 0);
    assert_eq!(card.sell_score, 5);

    let output = SignalEngine::evaluate_snapshot(&snapshot);
    assert_eq!(output.signal, Signal::Sell);
    assert_eq!(output.rationale, "5 indicators point to sell");
}

#[test]
fn test_adx_counts_for_both_sides() {
    let card = score(&IndicatorSnapshot {
        adx: 40.0,
        ..neutral()
    });
    assert_eq!(card.buy_score, 1);
    assert_eq!(card.sell_score, 1);
}

#[test]
fn test_thresholds_are_strict() {
    let card = score(&IndicatorSnapshot {
        rsi: 30.0,
        adx: 25.0,
        stoch_k: Some(20.0),
        stoch_d: Some(20.0),
        close: 90.0,
        ..neutral()
    });
    assert_eq!(card.buy_score, 0);
    assert_eq!(card.sell_score, 0);

    let card = score(&IndicatorSnapshot {
        rsi: 70.0,
        stoch_k: Some(80.0),
        stoch_d: Some(80.0),
        close: 110.0,
        ..neutral()
    });
    assert_eq!(card.sell_score, 0);
}

#[test]
fn test_stochastic_needs_both_lines() {
    let card = score(&IndicatorSnapshot {
        stoch_k: Some(10.0),
        stoch_d: Some(25.0),
        ..neutral()
    });
    assert_eq!(card.buy_score, 0);

    let card = score(&IndicatorSnapshot {
        stoch_k: Some(85.0),
        stoch_d: Some(75.0),
        ..neutral()
    });
    assert_eq!(card.sell_score, 0);
}

#[test]
fn test_undefined_stochastic_contributes_nothing() {
    let card = score(&IndicatorSnapshot {
        stoch_k: None,
        stoch_d: Some(10.0),
        ..neutral()
    });
    assert_eq!(card.buy_score, 0);
    assert_eq!(card.sell_score, 0);

    let card = score(&IndicatorSnapshot {
        rsi: 75.0,
        adx: 40.0,
        stoch_k: None,
        stoch_d: None,
        ..neutral()
    });
    assert_eq!(card.buy_score, 1);
    assert_eq!(card.sell_score, 2);
}
