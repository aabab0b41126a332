// src/models/mod.rs

//! Domain models for the scraper.
//!
//! Configuration, selectors, the two record kinds and the table they are
//! accumulated into.

mod book;
mod config;
mod selectors;
mod table;

// Re-export all public types
pub use book::{BookContentRecord, BookInfoRecord, PageContent};
pub use config::{Config, ContentConfig, HttpConfig, SiteConfig, StorageConfig};
pub use selectors::{
    CompiledSelectors, ContentSelectors, IndexSelectors, SelectorConfig, parse_selector,
};
pub use table::{Table, TableRecord};
