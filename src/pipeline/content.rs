// src/pipeline/content.rs

//! Book page pipeline.

use crate::error::Result;
use crate::models::{BookContentRecord, BookInfoRecord, Config, ContentSelectors, Table};
use crate::services::ContentScraper;
use crate::storage::BookStorage;
use crate::utils::console;
use crate::utils::http::PageFetcher;

/// Scrape the book pages linked from `books` and drop empty pages.
///
/// Only the first `content.limit` books are followed when a limit is set.
pub fn collect_contents(
    config: &Config,
    selectors: &ContentSelectors,
    fetcher: &dyn PageFetcher,
    books: &Table<BookInfoRecord>,
) -> Result<Table<BookContentRecord>> {
    let mut books = books.clone();
    if let Some(limit) = config.content.limit {
        if books.len() > limit {
            log::info!("Limiting book pages to the first {} of {}", limit, books.len());
            books.truncate(limit);
        }
    }

    let raw = ContentScraper::new(selectors)
        .show_progress(config.content.show_progress)
        .scrape(fetcher, &books)?;
    let fetched = raw.len();
    let contents = raw.drop_blank_rows();

    console::summary(
        "Book pages",
        &[
            ("Pages fetched", fetched.to_string()),
            ("Pages kept", contents.len().to_string()),
        ],
    );
    Ok(contents)
}

/// Scrape the book pages listed in the stored `book_info` table and
/// replace the `book_content` table.
pub fn run_content(
    config: &Config,
    fetcher: &dyn PageFetcher,
    storage: &dyn BookStorage,
) -> Result<Table<BookContentRecord>> {
    console::header("Scraping book pages");

    let selectors = config.selectors.compile()?;
    let books = storage.load_book_info()?;
    log::info!("Loaded {} books from book_info", books.len());

    let contents = collect_contents(config, &selectors.content, fetcher, &books)?;
    storage.write_book_content(&contents)?;
    Ok(contents)
}
