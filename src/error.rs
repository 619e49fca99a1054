use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Network, status or parse failure while fetching prices. Aborts the current run only.
    #[error("market data unavailable from {provider}: {reason}")]
    DataUnavailable {
        provider: &'static str,
        reason: String,
    },

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("notification delivery failed on {channel}: {reason}")]
    NotificationDelivery {
        channel: &'static str,
        reason: String,
    },

    #[error("signal state error: {0}")]
    State(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl BotError {
    pub fn data_unavailable(provider: &'static str, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            provider,
            reason: reason.to_string(),
        }
    }

    pub fn delivery(channel: &'static str, reason: impl ToString) -> Self {
        Self::NotificationDelivery {
            channel,
            reason: reason.to_string(),
        }
    }
}
