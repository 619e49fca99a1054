//! Turns confirmation counts into a discrete signal.

use crate::models::signal::{Signal, SignalOutput};
use crate::signals::scoring::ScoreCard;

pub const MIN_CONFIRMATIONS: u32 = 4;

/// Buy is checked first, so a card with both sides at the threshold is a BUY.
pub fn decide(card: ScoreCard) -> SignalOutput {
    let (signal, rationale) = if card.buy_score >= MIN_CONFIRMATIONS {
        (
            Signal::Buy,
            format!("{} indicators point to buy", card.buy_score),
        )
    } else if card.sell_score >= MIN_CONFIRMATIONS {
        (
            Signal::Sell,
            format!("{} indicators point to sell", card.sell_score),
        )
    } else {
        (Signal::Wait, "insufficient confirmation to act".to_string())
    };

    SignalOutput {
        signal,
        rationale,
        buy_score: card.buy_score,
        sell_score: card.sell_score,
        reasons: card.reasons,
    }
}
