//! Market data provider interface and its HTTP-backed implementation.

use crate::config::MarketConfig;
use crate::error::BotError;
use crate::models::price::PriceSeries;
use crate::services::buda::BudaClient;
use crate::services::coingecko::CoinGeckoClient;
use crate::services::exchange_rate::ExchangeRateClient;
use crate::services::http;
use async_trait::async_trait;
use reqwest::Client;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Price history over the last `days`, oldest point first.
    async fn get_history(&self, days: u32) -> Result<PriceSeries, BotError>;

    /// Current spot price from the secondary source.
    async fn get_spot_price(&self) -> Result<f64, BotError>;

    /// Units of the quote currency per one USD.
    async fn get_reference_rate(&self) -> Result<f64, BotError>;
}

/// Composes the history, spot and FX clients behind one provider.
pub struct HttpMarketData {
    coingecko: CoinGeckoClient,
    buda: BudaClient,
    exchange_rate: ExchangeRateClient,
    vs_currency: String,
    spot_market: String,
}

impl HttpMarketData {
    pub fn new(config: &MarketConfig) -> Self {
        Self::with_client(config, http::default_client())
    }

    pub fn with_client(config: &MarketConfig, client: Client) -> Self {
        Self {
            coingecko: CoinGeckoClient::with_client(&config.coingecko_base_url, client.clone())
                .with_retries(config.http_retries),
            buda: BudaClient::with_client(&config.buda_base_url, client.clone())
                .with_retries(config.http_retries),
            exchange_rate: ExchangeRateClient::with_client(&config.exchange_rate_base_url, client)
                .with_retries(config.http_retries),
            vs_currency: config.vs_currency.clone(),
            spot_market: config.spot_market.clone(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for HttpMarketData {
    async fn get_history(&self, days: u32) -> Result<PriceSeries, BotError> {
        self.coingecko.market_chart(&self.vs_currency, days).await
    }

    async fn get_spot_price(&self) -> Result<f64, BotError> {
        self.buda.last_price(&self.spot_market).await
    }

    async fn get_reference_rate(&self) -> Result<f64, BotError> {
        self.exchange_rate.usd_rate(&self.vs_currency).await
    }
}
