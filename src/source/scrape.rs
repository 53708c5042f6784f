use anyhow::{anyhow, Result};
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use crate::client::get_http_client;
use crate::constant::FRONT_PAGE_URL;

use super::{ArticleRef, ArticleSource};

pub struct ScrapeSource {
    url: String,
}

impl ScrapeSource {
    pub fn new() -> Self {
        Self {
            url: FRONT_PAGE_URL.to_string(),
        }
    }
}

#[async_trait]
impl ArticleSource for ScrapeSource {
    async fn latest_article(&self) -> Result<ArticleRef> {
        let html = get_http_client()
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        pick_latest(&html)
    }
}

/// Returns the first listing entry that is not marked as promoted content.
/// Entries are `article li` items; an `em` containing "promoted" flags an
/// ad, the anchor carries title and link, and `cite` carries the byline.
fn pick_latest(html: &str) -> Result<ArticleRef> {
    let document = Html::parse_document(html);
    let entry_selector = Selector::parse("article li").unwrap();
    let marker_selector = Selector::parse("em").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();
    let byline_selector = Selector::parse("cite").unwrap();

    for entry in document.select(&entry_selector) {
        let promoted = entry
            .select(&marker_selector)
            .next()
            .is_some_and(|em| element_text(em).contains("promoted"));
        if promoted {
            continue;
        }

        let Some(anchor) = entry.select(&anchor_selector).next() else {
            continue;
        };
        let Some(link) = anchor.value().attr("href") else {
            continue;
        };

        let author = entry
            .select(&byline_selector)
            .next()
            .map(element_text)
            .unwrap_or_default();

        return Ok(ArticleRef {
            title: element_text(anchor),
            link: link.to_string(),
            author,
        });
    }

    Err(anyhow!("No article found on the front page"))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
