use anyhow::Result;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use crate::client::get_http_client;

#[async_trait]
pub trait BodyExtractor: Send + Sync {
    async fn fetch_body(&self, link: &str) -> Result<String>;
}

pub struct PageExtractor {
    max_chars: usize,
}

impl PageExtractor {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

#[async_trait]
impl BodyExtractor for PageExtractor {
    async fn fetch_body(&self, link: &str) -> Result<String> {
        let html = get_http_client()
            .get(link)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(extract_body_text(&html, self.max_chars))
    }
}

// Subtrees that never contain article text.
const STRIPPED_TAGS: [&str; 5] = ["script", "style", "nav", "header", "footer"];

/// Renders the page's main content region as plain text, one line per text
/// node, capped at `max_chars` characters. The region is the first
/// `article` element, falling back to `main`, then the document body.
pub fn extract_body_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);

    let region = ["article", "main", "body"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).unwrap();
        document.select(&selector).next()
    });
    let Some(region) = region else {
        return String::new();
    };

    let mut lines: Vec<String> = Vec::new();
    collect_text(region, &mut lines);

    lines.join("\n").chars().take(max_chars).collect()
}

fn collect_text(el: ElementRef<'_>, lines: &mut Vec<String>) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if STRIPPED_TAGS.contains(&child_el.value().name()) {
                continue;
            }
            collect_text(child_el, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_PAGE_HTML: &str = r#"<html>
<head><style>body { color: red; }</style></head>
<body>
<nav>Menu</nav>
<header>Site Header</header>
<article>
  <p>First paragraph of the article.</p>
  <p>Second paragraph with important content.</p>
  <script>alert('xss')</script>
</article>
<footer>Site Footer</footer>
</body>
</html>"#;

    #[test]
    fn extracts_article_text_and_strips_chrome() {
        let body = extract_body_text(ARTICLE_PAGE_HTML, 10_000);

        assert!(body.contains("First paragraph of the article."));
        assert!(body.contains("Second paragraph with important content."));
        assert!(!body.contains("alert"));
        assert!(!body.contains("Menu"));
        assert!(!body.contains("Site Header"));
        assert!(!body.contains("Site Footer"));
    }

    #[test]
    fn truncates_without_altering_leading_characters() {
        let full = extract_body_text(ARTICLE_PAGE_HTML, 10_000);
        let truncated = extract_body_text(ARTICLE_PAGE_HTML, 50);

        assert!(truncated.chars().count() <= 50);
        assert!(full.starts_with(&truncated));
    }

    #[test]
    fn falls_back_to_main_then_body() {
        let main_page = "<html><body><nav>Menu</nav><main><p>Main text</p></main></body></html>";
        assert_eq!(extract_body_text(main_page, 100), "Main text");

        let bare_page = "<html><body><p>Bare body text</p></body></html>";
        assert_eq!(extract_body_text(bare_page, 100), "Bare body text");
    }

    #[test]
    fn block_elements_are_separated_by_line_breaks() {
        let page = "<html><body><article><p>One</p><p>Two</p></article></body></html>";
        assert_eq!(extract_body_text(page, 100), "One\nTwo");
    }

    #[test]
    fn empty_page_yields_empty_string() {
        assert_eq!(extract_body_text("", 100), "");
    }
}
