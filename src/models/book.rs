//! Book records produced by the scraper.

use crate::models::TableRecord;

/// One entry of the index page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookInfoRecord {
    /// Book title
    pub title: Option<String>,

    /// Absolute URL of the book page
    pub link_to_content: Option<String>,

    /// Author as listed on the index page
    pub author: Option<String>,

    /// Short summary
    pub summary: Option<String>,
}

impl TableRecord for BookInfoRecord {
    const TABLE: &'static str = "book_info";
    const COLUMNS: &'static [&'static str] = &["title", "link_to_content", "author", "summary"];
    const REQUIRED: &'static [&'static str] = &["title", "author", "summary"];

    fn value(&self, column: &str) -> Option<&str> {
        match column {
            "title" => self.title.as_deref(),
            "link_to_content" => self.link_to_content.as_deref(),
            "author" => self.author.as_deref(),
            "summary" => self.summary.as_deref(),
            _ => None,
        }
    }
}

/// Content of one book page, keyed by the link it was fetched from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookContentRecord {
    /// URL the page was fetched from
    pub link_to_content: String,

    /// Author line, label removed
    pub author: Option<String>,

    /// Editor's comment, one paragraph per line
    pub comment: Option<String>,

    /// Full book text
    pub text: Option<String>,
}

impl TableRecord for BookContentRecord {
    const TABLE: &'static str = "book_content";
    const COLUMNS: &'static [&'static str] = &["link_to_content", "author", "comment", "text"];
    const REQUIRED: &'static [&'static str] = &["author", "comment", "text"];

    fn value(&self, column: &str) -> Option<&str> {
        match column {
            "link_to_content" => Some(self.link_to_content.as_str()),
            "author" => self.author.as_deref(),
            "comment" => self.comment.as_deref(),
            "text" => self.text.as_deref(),
            _ => None,
        }
    }
}

/// Fields extracted from a single book page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub author: Option<String>,
    pub comment: Option<String>,
    pub text: Option<String>,
}

impl PageContent {
    /// Attach the source link, producing a table row.
    pub fn with_link(self, link: impl Into<String>) -> BookContentRecord {
        BookContentRecord {
            link_to_content: link.into(),
            author: self.author,
            comment: self.comment,
            text: self.text,
        }
    }
}
