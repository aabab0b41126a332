// src/services/content.rs

//! Book page scraper.
//!
//! Follows the `link_to_content` of every index record, one page at a time,
//! and extracts author, comment and text from each book page.

use scraper::Html;

use crate::error::Result;
use crate::models::{BookContentRecord, BookInfoRecord, ContentSelectors, PageContent, Table};
use crate::utils::console;
use crate::utils::http::PageFetcher;

use super::extract::{extract_author, extract_comment, extract_text, find};

/// Extract author, comment and text from a parsed book page.
///
/// Author and comment are looked up inside the text block, so a page
/// without a text block yields `None` for all three.
pub fn build_content_record(document: &Html, selectors: &ContentSelectors) -> PageContent {
    let region = find(Some(document.root_element()), &selectors.region);
    let text_block = find(region, &selectors.text);

    PageContent {
        author: extract_author(text_block, &selectors.author),
        comment: extract_comment(text_block, &selectors.comment),
        text: extract_text(region, &selectors.text),
    }
}

/// Service for scraping book pages.
pub struct ContentScraper<'a> {
    selectors: &'a ContentSelectors,
    show_progress: bool,
}

impl<'a> ContentScraper<'a> {
    pub fn new(selectors: &'a ContentSelectors) -> Self {
        Self {
            selectors,
            show_progress: true,
        }
    }

    /// Enable or disable the per-page progress line.
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Fetch every linked book page in row order.
    ///
    /// Rows without a link are skipped, so the result may be shorter than
    /// `books`. Any fetch failure aborts the whole pass.
    pub fn scrape(
        &self,
        fetcher: &dyn PageFetcher,
        books: &Table<BookInfoRecord>,
    ) -> Result<Table<BookContentRecord>> {
        let total = books.len();
        let mut table = Table::new();

        for (i, book) in books.iter().enumerate() {
            match book.link_to_content.as_deref() {
                Some(link) => {
                    let document = fetcher.fetch(link)?;
                    let page = build_content_record(&document, self.selectors);
                    table.push(page.with_link(link));
                }
                None => log::warn!(
                    "Skipping book without a link: {}",
                    book.title.as_deref().unwrap_or("<untitled>")
                ),
            }

            if self.show_progress {
                console::progress("Book pages", i + 1, total);
            }
        }

        Ok(table)
    }
}
