//! Tabular accumulation of scraped records.
//!
//! A [`Table`] holds fixed-shape records, so appending one record appends
//! exactly one value (possibly `None`) to every column. Columns can be read
//! back individually and always have the same length as the table.

/// A record type that can be stored as a row of a named table.
pub trait TableRecord {
    /// Table name in the database
    const TABLE: &'static str;

    /// Column names, in storage order
    const COLUMNS: &'static [&'static str];

    /// Columns that decide whether a row carries any data.
    /// A row with every one of these `None` is dropped by the filter.
    const REQUIRED: &'static [&'static str];

    /// Value of a column, `None` when missing or unknown.
    fn value(&self, column: &str) -> Option<&str>;

    /// Whether all required columns are missing.
    fn is_blank(&self) -> bool {
        Self::REQUIRED.iter().all(|c| self.value(c).is_none())
    }
}

/// Ordered collection of records forming one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: TableRecord> Table<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row.
    pub fn push(&mut self, record: R) {
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    /// Values of one column, in row order.
    pub fn column(&self, name: &str) -> Vec<Option<&str>> {
        self.rows.iter().map(|r| r.value(name)).collect()
    }

    /// Keep only the first `limit` rows.
    pub fn truncate(&mut self, limit: usize) {
        self.rows.truncate(limit);
    }

    /// Remove rows whose required columns are all missing.
    ///
    /// Remaining rows keep their original order and contents.
    pub fn drop_blank_rows(mut self) -> Self {
        let before = self.rows.len();
        self.rows.retain(|r| !r.is_blank());
        let dropped = before - self.rows.len();
        if dropped > 0 {
            log::debug!("Dropped {} blank row(s) from {}", dropped, R::TABLE);
        }
        self
    }
}

impl<R: TableRecord> FromIterator<R> for Table<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
