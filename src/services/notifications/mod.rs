//! Outbound notification channels and the fan-out used when a signal changes.

pub mod email;
pub mod report;
pub mod whatsapp;

pub use email::EmailNotifier;
pub use whatsapp::WhatsAppNotifier;

use crate::error::BotError;
use async_trait::async_trait;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{error, info};

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short channel name used in logs and metrics (`email`, `whatsapp`).
    fn channel(&self) -> &'static str;

    async fn send(&self, subject: &str, body: &str) -> Result<(), BotError>;
}

/// Outcome of one delivery attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReport {
    pub channel: &'static str,
    pub error: Option<String>,
}

impl DeliveryReport {
    pub fn delivered(&self) -> bool {
        self.error.is_none()
    }
}

/// Attempt every channel exactly once. A failing channel is logged and
/// reported; it never prevents the others from being tried.
pub async fn dispatch_all(
    notifiers: &[Arc<dyn Notifier>],
    subject: &str,
    body: &str,
) -> Vec<DeliveryReport> {
    let attempts = notifiers.iter().map(|notifier| async move {
        let channel = notifier.channel();
        match notifier.send(subject, body).await {
            Ok(()) => {
                info!(channel = channel, "Notification sent via {}", channel);
                DeliveryReport {
                    channel,
                    error: None,
                }
            }
            Err(e) => {
                error!(channel = channel, error = %e, "Notification failed via {}", channel);
                DeliveryReport {
                    channel,
                    error: Some(e.to_string()),
                }
            }
        }
    });

    join_all(attempts).await
}
