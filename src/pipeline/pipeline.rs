// src/pipeline/pipeline.rs

use crate::error::Result;
use crate::models::Config;
use crate::storage::{BookStorage, TableCounts};
use crate::utils::console;
use crate::utils::http::PageFetcher;

use super::content::collect_contents;
use super::index::collect_books;

/// Run the full pipeline.
///
/// Nothing is written until both steps succeed, so a failure part way
/// through leaves the stored tables as they were.
pub fn run_pipeline(
    config: &Config,
    fetcher: &dyn PageFetcher,
    storage: &dyn BookStorage,
) -> Result<TableCounts> {
    console::header("Scraping the library");

    let selectors = config.selectors.compile()?;
    let base_url = config.site.base()?;

    console::step(1, 2, "Index - Collecting book entries");
    let books = collect_books(config, &selectors.index, &base_url, fetcher)?;

    console::step(2, 2, "Content - Fetching book pages");
    let contents = collect_contents(config, &selectors.content, fetcher, &books)?;

    storage.write_all(&books, &contents)?;

    Ok(TableCounts {
        book_info: Some(books.len()),
        book_content: Some(contents.len()),
    })
}
