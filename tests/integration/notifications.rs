//! Integration tests for the notification channels

use btcsignal::config::{EmailConfig, WhatsAppConfig, WHATSAPP_FROM, WHATSAPP_TO};
use btcsignal::services::notifications::{EmailNotifier, Notifier, WhatsAppNotifier};
use btcsignal::BotError;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC123/Messages.json";

fn whatsapp_config(base_url: String) -> WhatsAppConfig {
    WhatsAppConfig {
        base_url,
        account_sid: "AC123".to_string(),
        auth_token: "secret".to_string(),
        from: WHATSAPP_FROM.to_string(),
        to: WHATSAPP_TO.to_string(),
    }
}

fn email_config() -> EmailConfig {
    EmailConfig {
        smtp_host: "smtp.example.com".to_string(),
        smtp_port: 587,
        sender: "bot@example.com".to_string(),
        app_password: "app-password".to_string(),
        recipient: "trader@example.com".to_string(),
    }
}

#[tokio::test]
async fn whatsapp_posts_report_to_twilio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .and(basic_auth("AC123", "secret"))
        .and(body_string_contains("From=whatsapp%3A%2B14155238886"))
        .and(body_string_contains("To=whatsapp%3A%2B56974964168"))
        .and(body_string_contains("Body=Signal%3A+BUY"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": "SM123",
            "status": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let notifier =
        WhatsAppNotifier::with_client(&whatsapp_config(server.uri()), reqwest::Client::new());
    assert_eq!(notifier.channel(), "whatsapp");
    notifier
        .send("BTC/CLP alert - BUY", "Signal: BUY")
        .await
        .expect("message accepted");
}

#[tokio::test]
async fn whatsapp_rejection_is_a_delivery_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 20003,
            "message": "Authenticate"
        })))
        .mount(&server)
        .await;

    let notifier =
        WhatsAppNotifier::with_client(&whatsapp_config(server.uri()), reqwest::Client::new());
    let err = notifier.send("subject", "body").await.unwrap_err();
    assert!(matches!(
        err,
        BotError::NotificationDelivery {
            channel: "whatsapp",
            ..
        }
    ));
}

#[tokio::test]
async fn email_message_carries_subject_and_body() {
    let notifier = EmailNotifier::new(&email_config()).expect("email notifier");
    assert_eq!(notifier.channel(), "email");

    let message = notifier
        .build_message("BTC/CLP alert - SELL", "Signal: SELL")
        .expect("message");
    let raw = String::from_utf8(message.formatted()).expect("utf-8 message");
    assert!(raw.contains("Subject: BTC/CLP alert - SELL"));
    assert!(raw.contains("From: bot@example.com"));
    assert!(raw.contains("To: trader@example.com"));
    assert!(raw.contains("Signal: SELL"));
}

#[tokio::test]
async fn email_with_invalid_sender_is_a_config_error() {
    let config = EmailConfig {
        sender: "not an address".to_string(),
        ..email_config()
    };
    assert!(matches!(
        EmailNotifier::new(&config),
        Err(BotError::Config(_))
    ));
}
