//! External collaborators: market data sources and notification channels.

pub mod buda;
pub mod coingecko;
pub mod exchange_rate;
pub mod http;
pub mod market_data;
pub mod notifications;

pub use market_data::{HttpMarketData, MarketDataProvider};
