use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Wait,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Wait => "WAIT",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSignal(pub String);

impl fmt::Display for UnknownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown signal '{}'", self.0)
    }
}

impl std::error::Error for UnknownSignal {}

impl FromStr for Signal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Signal::Buy),
            "SELL" => Ok(Signal::Sell),
            "WAIT" => Ok(Signal::Wait),
            other => Err(UnknownSignal(other.to_string())),
        }
    }
}

/// A single rule that fired while scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub signal: Signal,
    /// Human-readable rationale sent with the notification.
    pub rationale: String,
    pub buy_score: u32,
    pub sell_score: u32,
    pub reasons: Vec<SignalReason>,
}

impl SignalOutput {
    pub fn new(signal: Signal, rationale: impl Into<String>) -> Self {
        Self {
            signal,
            rationale: rationale.into(),
            buy_score: 0,
            sell_score: 0,
            reasons: Vec::new(),
        }
    }

    /// Fallback used when there is no fully-defined row to score.
    pub fn insufficient_data() -> Self {
        Self::new(Signal::Wait, "insufficient data")
    }
}
