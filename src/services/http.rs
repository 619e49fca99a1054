//! Shared GET-with-retry helper for the market-data clients.

use crate::error::BotError;
use backon::{ExponentialBuilder, Retryable};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("btcsignal/", env!("CARGO_PKG_VERSION"));

pub fn default_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// GET `url` and decode the JSON body, retrying transport errors, non-2xx
/// statuses and undecodable bodies up to `retries` extra times.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &'static str,
    url: &str,
    query: &[(&str, String)],
    retries: usize,
) -> Result<T, BotError> {
    let attempt = move || async move {
        debug!(provider = provider, url = url, "GET {}", url);
        let resp = client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| BotError::data_unavailable(provider, format!("request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BotError::data_unavailable(
                provider,
                format!("HTTP {}: {}", status, body),
            ));
        }

        resp.json::<T>()
            .await
            .map_err(|e| BotError::data_unavailable(provider, format!("malformed response: {}", e)))
    };

    attempt
        .retry(
            ExponentialBuilder::default()
                .with_min_delay(Duration::from_millis(250))
                .with_max_times(retries),
        )
        .notify(|e: &BotError, after: Duration| {
            warn!(provider = provider, error = %e, "request failed, retrying in {:?}", after);
        })
        .await
}
