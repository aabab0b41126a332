//! Pipeline entry points for scraper operations.
//!
//! - `run_index`: Scrape the book index into `book_info`
//! - `run_content`: Scrape book pages listed in `book_info` into `book_content`
//! - `run_pipeline`: Both steps, writing the two tables together

pub mod content;
pub mod index;
pub mod pipeline;

pub use content::{collect_contents, run_content};
pub use index::{collect_books, run_index};
pub use pipeline::run_pipeline;
