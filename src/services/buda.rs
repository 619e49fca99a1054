//! Buda exchange ticker client for the spot price.

use crate::error::BotError;
use crate::services::http;
use reqwest::Client;
use serde::Deserialize;

const PROVIDER: &str = "buda";

#[derive(Debug, Deserialize)]
struct TickerResponse {
    ticker: Option<Ticker>,
}

#[derive(Debug, Deserialize)]
struct Ticker {
    /// `[amount, currency]`, amount as a decimal string.
    #[serde(default)]
    last_price: Vec<String>,
}

pub struct BudaClient {
    client: Client,
    base_url: String,
    retries: usize,
}

impl BudaClient {
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

    /// Last traded price on `market` (e.g. `btc-clp`).
    pub async fn last_price(&self, market: &str) -> Result<f64, BotError> {
        let url = format!("{}/api/v2/markets/{}/ticker", self.base_url, market);
        let response: TickerResponse =
            http::get_json(&self.client, PROVIDER, &url, &[], self.retries).await?;

        let amount = response
            .ticker
            .and_then(|t| t.last_price.into_iter().next())
            .ok_or_else(|| BotError::data_unavailable(PROVIDER, "ticker has no last_price"))?;

        amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| BotError::data_unavailable(PROVIDER, format!("invalid last_price '{}'", amount)))
    }
}
