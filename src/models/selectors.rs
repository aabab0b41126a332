// src/models/selectors.rs

//! CSS selectors for the index page and the book pages.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// CSS selectors as written in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Each book entry on the index page
    #[serde(default = "defaults::item")]
    pub item: String,

    /// Title element within an entry
    #[serde(default = "defaults::title")]
    pub title: String,

    /// Author element within an entry
    #[serde(default = "defaults::index_author")]
    pub index_author: String,

    /// Summary element within an entry
    #[serde(default = "defaults::summary")]
    pub summary: String,

    /// Anchors within an entry; the last one with an `href` is the book link
    #[serde(default = "defaults::link")]
    pub link: String,

    /// Top-level content region of a book page
    #[serde(default = "defaults::content_region")]
    pub content_region: String,

    /// Main text block within the content region
    #[serde(default = "defaults::text")]
    pub text: String,

    /// Author block within the main text block
    #[serde(default = "defaults::content_author")]
    pub content_author: String,

    /// Comment block within the main text block
    #[serde(default = "defaults::comment")]
    pub comment: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            item: defaults::item(),
            title: defaults::title(),
            index_author: defaults::index_author(),
            summary: defaults::summary(),
            link: defaults::link(),
            content_region: defaults::content_region(),
            text: defaults::text(),
            content_author: defaults::content_author(),
            comment: defaults::comment(),
        }
    }
}

impl SelectorConfig {
    /// Parse every selector, failing on the first invalid one.
    pub fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            index: IndexSelectors {
                item: parse_selector(&self.item)?,
                title: parse_selector(&self.title)?,
                author: parse_selector(&self.index_author)?,
                summary: parse_selector(&self.summary)?,
                link: parse_selector(&self.link)?,
            },
            content: ContentSelectors {
                region: parse_selector(&self.content_region)?,
                text: parse_selector(&self.text)?,
                author: parse_selector(&self.content_author)?,
                comment: parse_selector(&self.comment)?,
            },
        })
    }
}

/// Parsed selectors, ready to run against a document.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub index: IndexSelectors,
    pub content: ContentSelectors,
}

/// Selectors used on the index page.
#[derive(Debug, Clone)]
pub struct IndexSelectors {
    pub item: Selector,
    pub title: Selector,
    pub author: Selector,
    pub summary: Selector,
    pub link: Selector,
}

/// Selectors used on a book page.
#[derive(Debug, Clone)]
pub struct ContentSelectors {
    pub region: Selector,
    pub text: Selector,
    pub author: Selector,
    pub comment: Selector,
}

/// Parse a single CSS selector.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

mod defaults {
    pub fn item() -> String {
        "li".into()
    }
    pub fn title() -> String {
        ".views-field.views-field-title".into()
    }
    pub fn index_author() -> String {
        ".views-field.views-field-field-author-value".into()
    }
    pub fn summary() -> String {
        ".views-field.views-field-field-summary-value".into()
    }
    pub fn link() -> String {
        "a".into()
    }
    pub fn content_region() -> String {
        "#main.clear-block".into()
    }
    pub fn text() -> String {
        ".node-content.clear-block.prose".into()
    }
    pub fn content_author() -> String {
        ".field.field-type-text.field-field-author".into()
    }
    pub fn comment() -> String {
        ".field.field-type-text.field-field-comment".into()
    }
}
