//! Environment-driven configuration.
//!
//! Every knob is read once at startup. Values that fail to parse fall back to
//! their defaults; notification channels with missing credentials are left
//! unconfigured rather than failing the process.

use crate::error::BotError;
use std::env;
use url::Url;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_INTERVAL_SECONDS: u64 = 3600;
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;
pub const DEFAULT_STATE_PATH: &str = "last_signal.txt";

pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";
pub const BUDA_BASE_URL: &str = "https://www.buda.com";
pub const EXCHANGE_RATE_BASE_URL: &str = "https://api.exchangerate.host";
pub const TWILIO_BASE_URL: &str = "https://api.twilio.com";

/// WhatsApp sandbox sender used for every outgoing message.
pub const WHATSAPP_FROM: &str = "whatsapp:+14155238886";
pub const WHATSAPP_TO: &str = "whatsapp:+56974964168";

/// Get the current deployment environment (`production`, `sandbox`, ...).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    var(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub coingecko_base_url: String,
    pub buda_base_url: String,
    pub exchange_rate_base_url: String,
    /// Quote currency of the history series, lowercase (`clp`).
    pub vs_currency: String,
    /// Spot ticker market on the exchange (`btc-clp`).
    pub spot_market: String,
    pub lookback_days: u32,
    pub http_retries: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            coingecko_base_url: COINGECKO_BASE_URL.to_string(),
            buda_base_url: BUDA_BASE_URL.to_string(),
            exchange_rate_base_url: EXCHANGE_RATE_BASE_URL.to_string(),
            vs_currency: "clp".to_string(),
            spot_market: "btc-clp".to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            http_retries: 2,
        }
    }
}

impl MarketConfig {
    /// Currency code as shown to humans (`CLP`).
    pub fn currency_code(&self) -> String {
        self.vs_currency.to_uppercase()
    }
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender: String,
    pub app_password: String,
    pub recipient: String,
}

#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    pub base_url: String,
    pub account_sid: String,
    pub auth_token: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub interval_seconds: u64,
    pub state_path: String,
    pub market: MarketConfig,
    pub email: Option<EmailConfig>,
    pub whatsapp: Option<WhatsAppConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            state_path: DEFAULT_STATE_PATH.to_string(),
            market: MarketConfig::default(),
            email: None,
            whatsapp: None,
        }
    }
}

impl Config {
    /// Reads the process environment. Callers load `.env` first.
    pub fn from_env() -> Result<Self, BotError> {
        let market = MarketConfig {
            coingecko_base_url: var("COINGECKO_BASE_URL")
                .unwrap_or_else(|| COINGECKO_BASE_URL.to_string()),
            buda_base_url: var("BUDA_BASE_URL").unwrap_or_else(|| BUDA_BASE_URL.to_string()),
            exchange_rate_base_url: var("EXCHANGE_RATE_BASE_URL")
                .unwrap_or_else(|| EXCHANGE_RATE_BASE_URL.to_string()),
            vs_currency: var("VS_CURRENCY")
                .map(|c| c.to_lowercase())
                .unwrap_or_else(|| "clp".to_string()),
            spot_market: var("SPOT_MARKET")
                .map(|m| m.to_lowercase())
                .unwrap_or_else(|| "btc-clp".to_string()),
            lookback_days: parsed("LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS),
            http_retries: parsed("HTTP_RETRIES", 2),
        };

        let email = match (
            var("EMAIL_SENDER"),
            var("EMAIL_APP_PASSWORD"),
            var("EMAIL_RECIPIENT"),
        ) {
            (Some(sender), Some(app_password), Some(recipient)) => Some(EmailConfig {
                smtp_host: var("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                smtp_port: parsed("SMTP_PORT", 587),
                sender,
                app_password,
                recipient,
            }),
            _ => None,
        };

        let whatsapp = match (var("TWILIO_SID"), var("TWILIO_TOKEN")) {
            (Some(account_sid), Some(auth_token)) => Some(WhatsAppConfig {
                base_url: var("TWILIO_BASE_URL").unwrap_or_else(|| TWILIO_BASE_URL.to_string()),
                account_sid,
                auth_token,
                from: WHATSAPP_FROM.to_string(),
                to: WHATSAPP_TO.to_string(),
            }),
            _ => None,
        };

        let config = Self {
            port: parsed("PORT", DEFAULT_PORT),
            interval_seconds: parsed("EVAL_INTERVAL_SECONDS", DEFAULT_INTERVAL_SECONDS),
            state_path: var("SIGNAL_STATE_PATH").unwrap_or_else(|| DEFAULT_STATE_PATH.to_string()),
            market,
            email,
            whatsapp,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BotError> {
        if self.interval_seconds == 0 {
            return Err(BotError::Config(
                "EVAL_INTERVAL_SECONDS must be > 0".to_string(),
            ));
        }
        if self.market.lookback_days == 0 {
            return Err(BotError::Config("LOOKBACK_DAYS must be > 0".to_string()));
        }

        let mut urls = vec![
            ("COINGECKO_BASE_URL", &self.market.coingecko_base_url),
            ("BUDA_BASE_URL", &self.market.buda_base_url),
            ("EXCHANGE_RATE_BASE_URL", &self.market.exchange_rate_base_url),
        ];
        if let Some(whatsapp) = &self.whatsapp {
            urls.push(("TWILIO_BASE_URL", &whatsapp.base_url));
        }
        for (key, value) in urls {
            Url::parse(value)
                .map_err(|e| BotError::Config(format!("{} is not a valid URL ({}): {}", key, value, e)))?;
        }

        Ok(())
    }
}
