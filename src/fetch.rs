//! The fetch module retrieves a page's current meta tags by pulling its raw
//! HTML through a public CORS-bypass proxy and parsing the result.

use log::info;
use scraper::{Html, Selector as ScraperSelector};
use thiserror::Error;
use url::Url;

/// Title and description extracted from a fetched page.
///
/// Absent tags are represented as empty strings so the values can be applied
/// to the form unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// True when the page carried neither a title nor a description.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

/// Hard failure while retrieving the page. Finding no tags on a page that
/// was fetched successfully is not a `FetchError`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch URL content. Status: {0}")]
    Status(String),
    #[error("Failed to fetch URL content: {0}")]
    Network(#[from] reqwest::Error),
}

/// Fetches pages through a CORS-bypass proxy.
pub struct MetaFetcher {
    client: reqwest::Client,
    proxy: Url,
}

impl MetaFetcher {
    /// Creates a fetcher that routes requests through `proxy`, which is
    /// expected to return the raw body of the URL passed in its `url`
    /// query parameter.
    pub fn new(proxy: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            proxy,
        }
    }

    /// Retrieves `raw_url` (scheme-normalized) through the proxy and
    /// extracts its meta tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the proxy answers with a
    /// non-success status.
    pub async fn fetch_meta(&self, raw_url: &str) -> Result<PageMeta, FetchError> {
        let target = normalize_target_url(raw_url);
        info!("Fetching current meta tags of {target}");

        let response = self
            .client
            .get(self.proxy.clone())
            .query(&[("url", target.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.to_string()));
        }

        let html = response.text().await?;
        Ok(extract_page_meta(&html))
    }
}

/// Prefixes `https://` when the URL carries no scheme, leaving explicit
/// `http://` and `https://` URLs untouched.
pub fn normalize_target_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Extracts the first `<title>` text and the `content` attribute of
/// `<meta name="description">` from `html`. Both default to empty strings.
pub fn extract_page_meta(html: &str) -> PageMeta {
    let document = Html::parse_document(html);

    let mut meta = PageMeta::default();

    if let Ok(title_selector) = ScraperSelector::parse("title")
        && let Some(title_element) = document.select(&title_selector).next()
    {
        meta.title = title_element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();
    }

    if let Ok(description_selector) = ScraperSelector::parse(r#"meta[name="description"]"#)
        && let Some(description_element) = document.select(&description_selector).next()
        && let Some(content) = description_element.value().attr("content")
    {
        meta.description = content.to_string();
    }

    meta
}
