//! Row model for content-index query results.

/// Column holding the resolved filesystem path of a row.
pub const COLUMN_PATH: &str = "_data";
/// Column holding the provider-declared display name.
pub const COLUMN_DISPLAY_NAME: &str = "_display_name";
/// Column holding the byte size.
pub const COLUMN_SIZE: &str = "_size";

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexValue {
    Text(String),
    Integer(i64),
    Null,
}

/// One result row: an ordered column→value mapping. Column order follows the
/// projection the query asked for.
#[derive(Debug, Clone, Default)]
pub struct Row {
    columns: Vec<(String, IndexValue)>,
}

impl Row {
    pub fn new() -> Self {
        Row::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: IndexValue) -> Self {
        self.columns.push((column.into(), value));
        self
    }

    pub fn get(&self, column: &str) -> Option<&IndexValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// The value of a text column, or `None` if the column is missing, null,
    /// or not text.
    pub fn text(&self, column: &str) -> Option<&str> {
        match self.get(column) {
            Some(IndexValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// The value of an integer column, or `None` if missing or non-integer.
    pub fn integer(&self, column: &str) -> Option<i64> {
        match self.get(column) {
            Some(IndexValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }
}
