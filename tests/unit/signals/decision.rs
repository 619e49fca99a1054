//! Unit tests for the decision rule

use btcsignal::models::signal::Signal;
use btcsignal::signals::decision::{decide, MIN_CONFIRMATIONS};
use btcsignal::signals::scoring::ScoreCard;

fn card(buy_score: u32, sell_score: u32) -> ScoreCard {
    ScoreCard {
        buy_score,
        sell_score,
        reasons: Vec::new(),
    }
}

#[test]
fn test_tie_at_threshold_resolves_to_buy() {
    let output = decide(card(4, 4));
    assert_eq!(output.signal, Signal::Buy);
    assert_eq!(output.rationale, "4 indicators point to buy");
    assert_eq!(output.sell_score, 4);
}

#[test]
fn test_sell_needs_threshold() {
    assert_eq!(decide(card(1, MIN_CONFIRMATIONS)).signal, Signal::Sell);
    assert_eq!(decide(card(1, MIN_CONFIRMATIONS - 1)).signal, Signal::Wait);
}

#[test]
fn test_below_threshold_waits() {
    let output = decide(card(3, 3));
    assert_eq!(output.signal, Signal::Wait);
    assert_eq!(output.rationale, "insufficient confirmation to act");
    assert_eq!(output.buy_score, 3);
}
