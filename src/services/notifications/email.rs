//! SMTP (STARTTLS) email channel.

use crate::config::EmailConfig;
use crate::error::BotError;
use crate::services::notifications::Notifier;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

const CHANNEL: &str = "email";

pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    pub fn new(config: &EmailConfig) -> Result<Self, BotError> {
        let from: Mailbox = config
            .sender
            .parse()
            .map_err(|e| BotError::Config(format!("invalid EMAIL_SENDER '{}': {}", config.sender, e)))?;
        let to: Mailbox = config.recipient.parse().map_err(|e| {
            BotError::Config(format!("invalid EMAIL_RECIPIENT '{}': {}", config.recipient, e))
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| BotError::Config(format!("invalid SMTP relay '{}': {}", config.smtp_host, e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.sender.clone(),
                config.app_password.clone(),
            ))
            .build();

        Ok(Self { transport, from, to })
    }

    pub fn build_message(&self, subject: &str, body: &str) -> Result<Message, BotError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| BotError::delivery(CHANNEL, format!("could not build message: {}", e)))
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        CHANNEL
    }

    async fn send(&self, subject: &str, body: &str) -> Result<(), BotError> {
        let message = self.build_message(subject, body)?;
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| BotError::delivery(CHANNEL, e))?;
        debug!(code = %response.code(), to = %self.to, "SMTP accepted message");
        Ok(())
    }
}
