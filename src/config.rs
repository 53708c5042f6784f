use anyhow::{Context, Result};

use crate::constant::*;

#[derive(Debug, Clone)]
pub struct Config {
    // Gemini configuration
    pub gemini_api_key: String,
    pub gemini_model: String,

    // Telegram configuration
    pub telegram_token: String,
    pub telegram_chat_id: String,

    // Article source configuration
    pub article_feed_url: Option<String>,
    pub max_body_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let gemini_api_key =
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into());

        let telegram_token =
            std::env::var("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN is not set")?;
        let telegram_chat_id =
            std::env::var("TELEGRAM_CHAT_ID").context("TELEGRAM_CHAT_ID is not set")?;

        // An empty value counts as unset, so a blank line in .env does not
        // switch the locator strategy.
        let article_feed_url = std::env::var("ARTICLE_FEED_URL")
            .ok()
            .filter(|url| !url.is_empty());

        let max_body_chars = match std::env::var("MAX_BODY_CHARS") {
            Ok(value) => value
                .parse()
                .context("MAX_BODY_CHARS must be a valid usize")?,
            Err(_) => DEFAULT_MAX_BODY_CHARS,
        };

        Ok(Config {
            gemini_api_key,
            gemini_model,
            telegram_token,
            telegram_chat_id,
            article_feed_url,
            max_body_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so every case lives in one test.
    #[test]
    fn from_env_reads_required_and_defaulted_values() {
        std::env::remove_var("GEMINI_API_KEY");
        assert!(Config::from_env().is_err());

        std::env::set_var("GEMINI_API_KEY", "test-key");
        std::env::set_var("TELEGRAM_TOKEN", "test-token");
        std::env::set_var("TELEGRAM_CHAT_ID", "test-chat-id");
        std::env::remove_var("GEMINI_MODEL");
        std::env::remove_var("ARTICLE_FEED_URL");
        std::env::remove_var("MAX_BODY_CHARS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.max_body_chars, DEFAULT_MAX_BODY_CHARS);
        assert!(config.article_feed_url.is_none());

        std::env::set_var("ARTICLE_FEED_URL", "");
        let config = Config::from_env().unwrap();
        assert!(config.article_feed_url.is_none());

        std::env::set_var("ARTICLE_FEED_URL", "https://example.com/feed");
        let config = Config::from_env().unwrap();
        assert_eq!(
            config.article_feed_url.as_deref(),
            Some("https://example.com/feed")
        );
    }
}
