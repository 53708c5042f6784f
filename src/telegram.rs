use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::get_http_client;
use crate::config::Config;
use crate::constant::TELEGRAM_API_BASE;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<()>;
}

pub struct TelegramNotifier {
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    // The text is sent as-is; Telegram rejects messages over its own limit
    // and that error aborts the run.
    fn message_payload(&self, text: &str) -> Value {
        json!({
            "chat_id": self.chat_id,
            "text": text,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.token);
        get_http_client()
            .post(&url)
            .json(&self.message_payload(message))
            .send()
            .await?
            .error_for_status()?;

        tracing::info!("Message delivered to chat {}", self.chat_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_exact_chat_id_and_text() {
        let notifier = TelegramNotifier {
            token: "test-token".to_string(),
            chat_id: "test-chat-id".to_string(),
        };

        let payload = notifier.message_payload("Hello World");
        assert_eq!(payload["chat_id"], "test-chat-id");
        assert_eq!(payload["text"], "Hello World");
    }
}
