//! Service layer for the scraper.
//!
//! This module contains the scraping logic:
//! - Field extraction helpers (`extract`)
//! - Index page scraping (`IndexScraper`)
//! - Book page scraping (`ContentScraper`)

pub mod extract;
mod content;
mod index;

pub use content::{ContentScraper, build_content_record};
pub use index::IndexScraper;
