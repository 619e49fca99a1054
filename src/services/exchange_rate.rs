//! USD reference rate client.

use crate::error::BotError;
use crate::services::http;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

const PROVIDER: &str = "exchangerate";

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

pub struct ExchangeRateClient {
    client: Client,
    base_url: String,
    retries: usize,
}

impl ExchangeRateClient {
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

    /// Units of `currency` per one USD.
    pub async fn usd_rate(&self, currency: &str) -> Result<f64, BotError> {
        let code = currency.to_uppercase();
        let url = format!("{}/latest", self.base_url);
        let response: LatestRatesResponse = http::get_json(
            &self.client,
            PROVIDER,
            &url,
            &[("base", "USD".to_string()), ("symbols", code.clone())],
            self.retries,
        )
        .await?;

        response
            .rates
            .get(&code)
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or_else(|| BotError::data_unavailable(PROVIDER, format!("no USD/{} rate in response", code)))
    }
}
