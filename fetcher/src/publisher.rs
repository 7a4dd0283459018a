use crate::{config::TelegramConfig, logging};
use anyhow::{Result, anyhow};
use reqwest::Client as HTTPClient;
use serde::Serialize;
use serde_json::{Value, json};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishReceipt {
    pub publisher: &'static str,
    pub message_id: Option<i64>,
}

pub trait Publisher {
    fn name(&self) -> &'static str;
    async fn publish(&self, text: &str) -> Result<PublishReceipt>;
}

pub struct TelegramPublisher {
    http_client: HTTPClient,
    config: TelegramConfig,
}

impl TelegramPublisher {
    pub fn new(http_client: HTTPClient, config: TelegramConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

impl Publisher for TelegramPublisher {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn publish(&self, text: &str) -> Result<PublishReceipt> {
        let url = format!("{TELEGRAM_API_BASE}/bot{}/sendMessage", self.config.token);
        let payload = message_payload(&self.config, text);

        let response = self.http_client.post(url).json(&payload).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "telegram api error: status={} body={}",
                status,
                body
            ));
        }

        let body: Value = response.json().await.unwrap_or_default();
        Ok(PublishReceipt {
            publisher: self.name(),
            message_id: body
                .get("result")
                .and_then(|result| result.get("message_id"))
                .and_then(Value::as_i64),
        })
    }
}

/// Logs the message instead of sending it, used when no Telegram chat is configured.
pub struct DryRunPublisher;

impl Publisher for DryRunPublisher {
    fn name(&self) -> &'static str {
        "dry_run"
    }

    async fn publish(&self, text: &str) -> Result<PublishReceipt> {
        logging::Logger::new()
            .length(text.chars().count())
            .info("advisory.dry_run", text);
        Ok(PublishReceipt {
            publisher: self.name(),
            message_id: None,
        })
    }
}

pub enum AnyPublisher {
    Telegram(TelegramPublisher),
    DryRun(DryRunPublisher),
}

impl AnyPublisher {
    pub fn from_config(http_client: &HTTPClient, telegram: Option<&TelegramConfig>) -> Self {
        match telegram {
            Some(config) => AnyPublisher::Telegram(TelegramPublisher::new(
                http_client.clone(),
                config.clone(),
            )),
            None => AnyPublisher::DryRun(DryRunPublisher),
        }
    }
}

impl Publisher for AnyPublisher {
    fn name(&self) -> &'static str {
        match self {
            AnyPublisher::Telegram(publisher) => publisher.name(),
            AnyPublisher::DryRun(publisher) => publisher.name(),
        }
    }

    async fn publish(&self, text: &str) -> Result<PublishReceipt> {
        match self {
            AnyPublisher::Telegram(publisher) => publisher.publish(text).await,
            AnyPublisher::DryRun(publisher) => publisher.publish(text).await,
        }
    }
}

fn message_payload(config: &TelegramConfig, text: &str) -> Value {
    let mut payload = json!({
        "chat_id": config.chat_id,
        "text": text,
        "link_preview_options": {"is_disabled": true},
    });
    if let Some(thread_id) = config.thread_id {
        payload["message_thread_id"] = json!(thread_id);
    }
    payload
}
