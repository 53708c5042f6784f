use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::client::get_http_client;

use super::{ArticleRef, ArticleSource};

pub struct FeedSource {
    url: String,
}

impl FeedSource {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl ArticleSource for FeedSource {
    async fn latest_article(&self) -> Result<ArticleRef> {
        let rss = get_http_client()
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let channel = rss::Channel::read_from(&rss[..])?;

        first_entry(&channel)
    }
}

// Feeds list newest first, so the first item is the latest article.
fn first_entry(channel: &rss::Channel) -> Result<ArticleRef> {
    let item = channel
        .items()
        .first()
        .ok_or_else(|| anyhow!("No entries in feed"))?;

    let title = item
        .title()
        .ok_or_else(|| anyhow!("Feed entry has no title"))?
        .to_string();
    let link = item
        .link()
        .ok_or_else(|| anyhow!("Feed entry has no link"))?
        .to_string();
    let author = item.author().unwrap_or_default().to_string();

    Ok(ArticleRef {
        title,
        link,
        author,
    })
}
