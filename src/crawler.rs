use anyhow::Result;
use async_trait::async_trait;
use headless_chrome::Browser;

/// The crawl capability behind the fetch command. Kept as a trait so command
/// tests can substitute a stub.
#[async_trait]
pub trait Crawler: Send + Sync {
    async fn fetch_markdown(&self, url: &str) -> Result<Option<String>>;
}

pub struct PageCrawler;

#[async_trait]
impl Crawler for PageCrawler {
    #[tracing::instrument(skip(self))]
    async fn fetch_markdown(&self, url: &str) -> Result<Option<String>> {
        let url = url.to_string();

        // Browser orchestration is blocking, keep it off the async runtime.
        let html = tokio::task::spawn_blocking(move || get_page_content(&url)).await??;
        tracing::debug!(bytes = html.len(), "retrieved page content");

        let markdown = html2md::parse_html(&html);
        if markdown.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(markdown))
    }
}

fn get_page_content(url: &str) -> Result<String> {
    let browser = Browser::default()?;
    let tab = browser.new_tab()?;

    tab.navigate_to(url)
        .and_then(|tab| tab.wait_until_navigated())
        .and_then(|tab| tab.get_content())
}

#[cfg(test)]
mod tests {
    use super::{Crawler, PageCrawler};
    use anyhow::Result;

    #[tokio::test]
    #[cfg_attr(not(feature = "network"), ignore)]
    async fn fetches_markdown_with_real_browser() -> Result<()> {
        let crawler = PageCrawler;

        let markdown = crawler.fetch_markdown("https://example.com").await?;
        assert!(markdown.is_some());

        Ok(())
    }
}
