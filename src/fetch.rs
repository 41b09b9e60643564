use std::time::Duration;

use anyhow::{Context, Result};

/// Where listing documents come from. The crawl loop only sees this
/// seam, so tests can feed it canned pages.
pub trait PageSource {
    /// URL the given page number lives at, for progress lines.
    fn listing_url(&self, page: u32) -> String;

    /// Raw HTML for the given page number.
    fn fetch_listing(&self, page: u32) -> Result<String>;
}

const USER_AGENT: &str = "magpie_scraper/0.1 (catalog exporter)";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Live catalog over HTTP, one GET per page.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl PageSource for HttpSource {
    fn listing_url(&self, page: u32) -> String {
        format!("{}?page={}", self.base_url, page)
    }

    fn fetch_listing(&self, page: u32) -> Result<String> {
        let url = self.listing_url(page);
        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .with_context(|| format!("fetching {}", url))?
            .text()
            .with_context(|| format!("reading body of {}", url))?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_appends_page_number() {
        let source =
            HttpSource::new("https://www.magpiehq.com/developer-challenge/smartphones").unwrap();
        assert_eq!(
            source.listing_url(1),
            "https://www.magpiehq.com/developer-challenge/smartphones?page=1"
        );
        assert_eq!(
            source.listing_url(12),
            "https://www.magpiehq.com/developer-challenge/smartphones?page=12"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let source = HttpSource::new("https://example.com/catalog/").unwrap();
        assert_eq!(source.listing_url(2), "https://example.com/catalog?page=2");
    }
}
