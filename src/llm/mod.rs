pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;

use crate::source::ArticleRef;

#[async_trait]
pub trait GuideGenerator: Send + Sync {
    async fn generate_guide(&self, article: &ArticleRef, body: &str) -> Result<String>;
}
