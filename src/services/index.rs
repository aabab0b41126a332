// src/services/index.rs

//! Index page scraper.
//!
//! Turns every list entry of the index-by-category page into one
//! [`BookInfoRecord`].

use scraper::{ElementRef, Html};
use url::Url;

use crate::error::Result;
use crate::models::{BookInfoRecord, IndexSelectors, Table};
use crate::utils::http::PageFetcher;

use super::extract::{extract_link, extract_text};

/// Service for scraping the book index page.
pub struct IndexScraper<'a> {
    selectors: &'a IndexSelectors,
    base_url: &'a Url,
}

impl<'a> IndexScraper<'a> {
    pub fn new(selectors: &'a IndexSelectors, base_url: &'a Url) -> Self {
        Self {
            selectors,
            base_url,
        }
    }

    /// Fetch the index page and collect one record per entry.
    pub fn scrape(&self, fetcher: &dyn PageFetcher, index_url: &str) -> Result<Table<BookInfoRecord>> {
        log::info!("Fetching book index from {}", index_url);
        let document = fetcher.fetch(index_url)?;
        Ok(self.collect(&document))
    }

    /// Collect one record per entry of an already parsed index page.
    pub fn collect(&self, document: &Html) -> Table<BookInfoRecord> {
        let table: Table<BookInfoRecord> = document
            .select(&self.selectors.item)
            .map(|item| self.parse_item(item))
            .collect();
        log::info!("Found {} index entries", table.len());
        table
    }

    /// Extract all four fields of one entry.
    pub fn parse_item(&self, item: ElementRef<'_>) -> BookInfoRecord {
        let item = Some(item);
        BookInfoRecord {
            title: extract_text(item, &self.selectors.title),
            link_to_content: extract_link(item, &self.selectors.link, self.base_url),
            author: extract_text(item, &self.selectors.author),
            summary: extract_text(item, &self.selectors.summary),
        }
    }
}
