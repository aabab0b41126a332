// src/pipeline/index.rs

//! Book index pipeline.

use url::Url;

use crate::error::Result;
use crate::models::{BookInfoRecord, Config, IndexSelectors, Table};
use crate::services::IndexScraper;
use crate::storage::BookStorage;
use crate::utils::console;
use crate::utils::http::PageFetcher;

/// Scrape the index page and drop entries with no usable data.
pub fn collect_books(
    config: &Config,
    selectors: &IndexSelectors,
    base_url: &Url,
    fetcher: &dyn PageFetcher,
) -> Result<Table<BookInfoRecord>> {
    let raw = IndexScraper::new(selectors, base_url).scrape(fetcher, &config.site.index_url)?;
    let found = raw.len();
    let books = raw.drop_blank_rows();

    console::summary(
        "Book index",
        &[
            ("Entries found", found.to_string()),
            ("Entries kept", books.len().to_string()),
        ],
    );
    Ok(books)
}

/// Run the index step and replace the `book_info` table.
pub fn run_index(
    config: &Config,
    fetcher: &dyn PageFetcher,
    storage: &dyn BookStorage,
) -> Result<Table<BookInfoRecord>> {
    console::header("Scraping book index");

    let selectors = config.selectors.compile()?;
    let base_url = config.site.base()?;
    let books = collect_books(config, &selectors.index, &base_url, fetcher)?;

    storage.write_book_info(&books)?;
    Ok(books)
}
