mod client;
mod config;
mod constant;
mod extract;
mod llm;
mod pipeline;
mod source;
mod telegram;

use anyhow::Result;

use crate::config::Config;
use crate::extract::PageExtractor;
use crate::llm::gemini::GeminiClient;
use crate::pipeline::Pipeline;
use crate::source::source_from_config;
use crate::telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    setup_env_and_tracing();

    let config = Config::from_env()?;

    let pipeline = Pipeline::new(
        source_from_config(&config),
        Box::new(PageExtractor::new(config.max_body_chars)),
        Box::new(GeminiClient::new(&config)),
        Box::new(TelegramNotifier::new(&config)),
    );
    pipeline.run().await?;

    tracing::info!("전송 완료");

    Ok(())
}

pub fn setup_env_and_tracing() {
    dotenv::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
