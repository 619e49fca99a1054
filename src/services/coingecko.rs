//! CoinGecko market-chart client for the price history.

use crate::error::BotError;
use crate::models::price::{PricePoint, PriceSeries};
use crate::services::http;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const PROVIDER: &str = "coingecko";

#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Option<Vec<[f64; 2]>>,
}

pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
    retries: usize,
}

impl CoinGeckoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, http::default_client())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retries: 0,
        }
    }

    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    /// Bitcoin price history over the last `days`, quoted in `vs_currency`.
    pub async fn market_chart(&self, vs_currency: &str, days: u32) -> Result<PriceSeries, BotError> {
        let url = format!("{}/api/v3/coins/bitcoin/market_chart", self.base_url);
        let response: MarketChartResponse = http::get_json(
            &self.client,
            PROVIDER,
            &url,
            &[
                ("vs_currency", vs_currency.to_string()),
                ("days", days.to_string()),
            ],
            self.retries,
        )
        .await?;

        let raw = response
            .prices
            .ok_or_else(|| BotError::data_unavailable(PROVIDER, "response has no 'prices' field"))?;

        let points = raw
            .into_iter()
            .map(|[millis, price]| {
                let timestamp = DateTime::from_timestamp_millis(millis as i64).ok_or_else(|| {
                    BotError::data_unavailable(PROVIDER, format!("invalid timestamp {}", millis))
                })?;
                if !price.is_finite() || price <= 0.0 {
                    return Err(BotError::data_unavailable(
                        PROVIDER,
                        format!("invalid price {} at {}", price, timestamp),
                    ));
                }
                Ok(PricePoint::new(timestamp, price))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let series = PriceSeries::new(points);
        debug!(points = series.len(), days = days, "CoinGecko history fetched");
        Ok(series)
    }
}
