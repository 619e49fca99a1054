//! WhatsApp channel through the Twilio Messages API.

use crate::config::WhatsAppConfig;
use crate::error::BotError;
use crate::services::http;
use crate::services::notifications::Notifier;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

const CHANNEL: &str = "whatsapp";

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: Option<String>,
    status: Option<String>,
}

pub struct WhatsAppNotifier {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from: String,
    to: String,
}

impl WhatsAppNotifier {
    pub fn new(config: &WhatsAppConfig) -> Self {
        Self::with_client(config, http::default_client())
    }

    pub fn with_client(config: &WhatsAppConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

#[async_trait]
impl Notifier for WhatsAppNotifier {
    fn channel(&self) -> &'static str {
        CHANNEL
    }

    /// The subject is not part of a chat message; only the body is sent.
    async fn send(&self, _subject: &str, body: &str) -> Result<(), BotError> {
        let resp = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("From", self.from.as_str()),
                ("To", self.to.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .map_err(|e| BotError::delivery(CHANNEL, format!("request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(BotError::delivery(
                CHANNEL,
                format!("Twilio API error {}: {}", status, text),
            ));
        }

        let message: MessageResponse = resp
            .json()
            .await
            .map_err(|e| BotError::delivery(CHANNEL, format!("malformed Twilio response: {}", e)))?;
        info!(
            sid = message.sid.as_deref().unwrap_or("unknown"),
            status = message.status.as_deref().unwrap_or("unknown"),
            "WhatsApp message queued"
        );
        Ok(())
    }
}
