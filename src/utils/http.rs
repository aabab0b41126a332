// src/utils/http.rs

//! HTTP client utilities.
//!
//! Pages are fetched one at a time with a blocking client. Scraping code
//! depends on the [`PageFetcher`] trait so it can run against canned pages.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::Result;
use crate::models::HttpConfig;

/// Source of parsed HTML documents.
pub trait PageFetcher {
    /// Fetch `url` and parse the body as an HTML document.
    fn fetch(&self, url: &str) -> Result<Html>;
}

/// [`PageFetcher`] backed by a blocking reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        fetch_page(&self.client, url)
    }
}

/// Create a configured HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?)
}

/// Fetch a page and return the HTML document.
///
/// Non-success statuses are errors.
pub fn fetch_page(client: &Client, url: &str) -> Result<Html> {
    log::debug!("GET {}", url);
    let response = client.get(url).send()?.error_for_status()?;
    let text = response.text()?;
    Ok(Html::parse_document(&text))
}
