pub mod feed;
pub mod scrape;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;

use feed::FeedSource;
use scrape::ScrapeSource;

/// The single article selected for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRef {
    pub title: String,
    pub link: String,
    /// Byline text. Empty when the source does not carry one.
    pub author: String,
}

#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn latest_article(&self) -> Result<ArticleRef>;
}

/// A configured feed URL selects the feed strategy, otherwise the front
/// page is scraped. Exactly one strategy is active per run.
pub fn source_from_config(config: &Config) -> Box<dyn ArticleSource> {
    match &config.article_feed_url {
        Some(url) => Box::new(FeedSource::new(url.clone())),
        None => Box::new(ScrapeSource::new()),
    }
}
