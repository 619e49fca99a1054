//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod price;
pub mod signal;

pub use indicators::{Candle, EnrichedSeries, IndicatorRow};
pub use price::{PricePoint, PriceSeries};
pub use signal::{Signal, SignalOutput, SignalReason};
