//! SQLite storage implementation.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, params_from_iter};

use crate::error::{AppError, Result};
use crate::models::{BookContentRecord, BookInfoRecord, Table, TableRecord};
use crate::storage::{BookStorage, TableCounts};

const BOOK_INFO_SCHEMA: &str = "
    CREATE TABLE book_info (
        title           TEXT,
        link_to_content TEXT,
        author          TEXT,
        summary         TEXT
    );";

const BOOK_CONTENT_SCHEMA: &str = "
    CREATE TABLE book_content (
        link_to_content TEXT NOT NULL,
        author          TEXT,
        comment         TEXT,
        text            TEXT
    );";

/// SQLite storage backend.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) a database file, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        log::debug!("Opened database {}", path.display());
        Ok(Self { conn })
    }

    /// Open an existing database file without creating or modifying anything.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        log::debug!("Opened database {} read-only", path.display());
        Ok(Self { conn })
    }

    /// In-memory database, discarded on drop.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    fn table_exists(&self, name: &str) -> Result<bool> {
        let count: usize = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |r| r.get(0),
        )?;
        Ok(count > 0)
    }

    fn count_rows(&self, name: &str) -> Result<Option<usize>> {
        if !self.table_exists(name)? {
            return Ok(None);
        }
        let sql = format!("SELECT COUNT(*) FROM {name}");
        Ok(Some(self.conn.query_row(&sql, [], |r| r.get(0))?))
    }
}

/// Drop and recreate a table, then insert every row.
fn replace_table<R: TableRecord>(conn: &Connection, schema: &str, table: &Table<R>) -> Result<usize> {
    conn.execute_batch(&format!("DROP TABLE IF EXISTS {};", R::TABLE))?;
    conn.execute_batch(schema)?;

    let placeholders = (1..=R::COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders
    );

    let mut stmt = conn.prepare(&sql)?;
    for row in table {
        stmt.execute(params_from_iter(R::COLUMNS.iter().map(|c| row.value(c))))?;
    }

    log::info!("Wrote {} rows to {}", table.len(), R::TABLE);
    Ok(table.len())
}

impl BookStorage for SqliteStorage {
    fn write_book_info(&self, books: &Table<BookInfoRecord>) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let written = replace_table(&tx, BOOK_INFO_SCHEMA, books)?;
        tx.commit()?;
        Ok(written)
    }

    fn write_book_content(&self, contents: &Table<BookContentRecord>) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let written = replace_table(&tx, BOOK_CONTENT_SCHEMA, contents)?;
        tx.commit()?;
        Ok(written)
    }

    fn write_all(
        &self,
        books: &Table<BookInfoRecord>,
        contents: &Table<BookContentRecord>,
    ) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        replace_table(&tx, BOOK_INFO_SCHEMA, books)?;
        replace_table(&tx, BOOK_CONTENT_SCHEMA, contents)?;
        tx.commit()?;
        Ok(())
    }

    fn load_book_info(&self) -> Result<Table<BookInfoRecord>> {
        if !self.table_exists(BookInfoRecord::TABLE)? {
            return Err(AppError::MissingTable(BookInfoRecord::TABLE.to_string()));
        }

        let mut stmt = self.conn.prepare(
            "SELECT title, link_to_content, author, summary FROM book_info ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(BookInfoRecord {
                    title: row.get(0)?,
                    link_to_content: row.get(1)?,
                    author: row.get(2)?,
                    summary: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Table<_>, _>>()?;
        Ok(rows)
    }

    fn counts(&self) -> Result<TableCounts> {
        Ok(TableCounts {
            book_info: self.count_rows(BookInfoRecord::TABLE)?,
            book_content: self.count_rows(BookContentRecord::TABLE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn books() -> Table<BookInfoRecord> {
        vec![
            BookInfoRecord {
                title: Some("2920, Morning Star".into()),
                link_to_content: Some("https://example.com/books/morning-star".into()),
                author: Some("Carlovac Townway".into()),
                summary: None,
            },
            BookInfoRecord {
                title: Some("The Real Barenziah".into()),
                link_to_content: Some("https://example.com/books/barenziah".into()),
                author: None,
                summary: Some("Five volumes".into()),
            },
        ]
        .into_iter()
        .collect()
    }

    fn contents() -> Table<BookContentRecord> {
        vec![BookContentRecord {
            link_to_content: "https://example.com/books/morning-star".into(),
            author: Some("Carlovac Townway".into()),
            comment: Some("Line one\nLine two".into()),
            text: Some("Morning Star".into()),
        }]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_write_and_load_book_info() {
        let storage = SqliteStorage::in_memory().unwrap();
        assert_eq!(storage.write_book_info(&books()).unwrap(), 2);
        assert_eq!(storage.load_book_info().unwrap(), books());
    }

    #[test]
    fn test_write_replaces_previous_rows() {
        let storage = SqliteStorage::in_memory().unwrap();
        storage.write_book_info(&books()).unwrap();
        storage.write_book_info(&books()).unwrap();
        assert_eq!(storage.counts().unwrap().book_info, Some(2));

        let fewer: Table<BookInfoRecord> = books().into_rows().into_iter().take(1).collect();
        storage.write_book_info(&fewer).unwrap();
        assert_eq!(storage.load_book_info().unwrap(), fewer);
    }

    #[test]
    fn test_load_without_table_fails() {
        let storage = SqliteStorage::in_memory().unwrap();
        assert!(matches!(
            storage.load_book_info(),
            Err(AppError::MissingTable(_))
        ));
    }

    #[test]
    fn test_counts() {
        let storage = SqliteStorage::in_memory().unwrap();
        assert_eq!(storage.counts().unwrap(), TableCounts::default());

        storage.write_all(&books(), &contents()).unwrap();
        assert_eq!(
            storage.counts().unwrap(),
            TableCounts {
                book_info: Some(2),
                book_content: Some(1),
            }
        );
    }

    #[test]
    fn test_content_preserves_newlines() {
        let storage = SqliteStorage::in_memory().unwrap();
        storage.write_book_content(&contents()).unwrap();

        let comment: String = storage
            .conn
            .query_row("SELECT comment FROM book_content", [], |r| r.get(0))
            .unwrap();
        assert_eq!(comment, "Line one\nLine two");
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/library.sqlite");
        {
            let storage = SqliteStorage::open(&path).unwrap();
            storage.write_book_info(&books()).unwrap();
        }
        assert!(path.exists());

        let reopened = SqliteStorage::open(&path).unwrap();
        assert_eq!(reopened.load_book_info().unwrap().len(), 2);
    }

    #[test]
    fn test_open_read_only_missing_file_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing/library.sqlite");

        assert!(SqliteStorage::open_read_only(&path).is_err());
        assert!(!path.exists());
        assert!(!tmp.path().join("missing").exists());
    }

    #[test]
    fn test_open_read_only_reads_counts() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("library.sqlite");
        SqliteStorage::open(&path)
            .unwrap()
            .write_book_info(&books())
            .unwrap();

        let storage = SqliteStorage::open_read_only(&path).unwrap();
        assert_eq!(
            storage.counts().unwrap(),
            TableCounts {
                book_info: Some(2),
                book_content: None,
            }
        );
        assert!(storage.write_book_info(&books()).is_err());
    }
}
