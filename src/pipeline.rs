use anyhow::Result;

use crate::extract::BodyExtractor;
use crate::llm::GuideGenerator;
use crate::source::{ArticleRef, ArticleSource};
use crate::telegram::Notifier;

pub struct Pipeline {
    source: Box<dyn ArticleSource>,
    extractor: Box<dyn BodyExtractor>,
    generator: Box<dyn GuideGenerator>,
    notifier: Box<dyn Notifier>,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn ArticleSource>,
        extractor: Box<dyn BodyExtractor>,
        generator: Box<dyn GuideGenerator>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            extractor,
            generator,
            notifier,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let article = self.source.latest_article().await?;
        tracing::info!("Latest article: {} ({})", article.title, article.link);

        let body = self.extractor.fetch_body(&article.link).await?;
        tracing::info!("Extracted {} characters of body text", body.chars().count());

        let guide = self.generator.generate_guide(&article, &body).await?;
        tracing::info!("Guide generated ({} characters)", guide.chars().count());

        let message = compose_message(&article, &guide);
        self.notifier.send(&message).await?;

        Ok(())
    }
}

fn compose_message(article: &ArticleRef, guide: &str) -> String {
    format!(
        "📖 오늘의 디자인 아티클 독해\n\n{}\n{}\n\n{}",
        article.title, article.link, guide
    )
}
