//! Storage abstractions for scraped book tables.
//!
//! Two tables are written, each fully replaced on every write:
//!
//! ```text
//! book_info    (title, link_to_content, author, summary)
//! book_content (link_to_content, author, comment, text)
//! ```

pub mod sqlite;

use crate::error::Result;
use crate::models::{BookContentRecord, BookInfoRecord, Table};

// Re-export for convenience
pub use sqlite::SqliteStorage;

/// Row counts of the stored tables; `None` when a table was never written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub book_info: Option<usize>,
    pub book_content: Option<usize>,
}

/// Trait for book storage backends.
pub trait BookStorage {
    /// Replace the `book_info` table. Returns the number of rows written.
    fn write_book_info(&self, books: &Table<BookInfoRecord>) -> Result<usize>;

    /// Replace the `book_content` table. Returns the number of rows written.
    fn write_book_content(&self, contents: &Table<BookContentRecord>) -> Result<usize>;

    /// Replace both tables at once; either both are written or neither.
    fn write_all(
        &self,
        books: &Table<BookInfoRecord>,
        contents: &Table<BookContentRecord>,
    ) -> Result<()>;

    /// Load the stored `book_info` table in insertion order.
    fn load_book_info(&self) -> Result<Table<BookInfoRecord>>;

    /// Row counts of both tables.
    fn counts(&self) -> Result<TableCounts>;
}
