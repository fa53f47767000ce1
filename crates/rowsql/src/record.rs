//! Field extraction: turning a record into ordered `(column, value)` pairs.
//!
//! A [`Record`] describes which of its fields map to columns. The usual way to
//! get one is `#[derive(Record)]`:
//!
//! ```ignore
//! use rowsql::Record;
//!
//! #[derive(Record)]
//! #[row(table = "users")]
//! struct User {
//!     #[row(column = "id", unique)]
//!     id: i64,
//!     #[row(column = "name")]
//!     name: String,
//!     // No annotation: not a column.
//!     cached_score: f64,
//! }
//! ```

use crate::value::Value;

/// A type whose fields map onto table columns.
pub trait Record {
    /// Table name used by [`StatementRequest::for_record`](crate::StatementRequest::for_record).
    const TABLE: &'static str;

    /// Column names, in field declaration order.
    fn columns() -> &'static [&'static str];

    /// Column values, aligned with [`Record::columns`].
    fn values(&self) -> Vec<Value>;

    /// Column and value identifying this record's row, if one is marked.
    fn unique_key(&self) -> Option<(&'static str, Value)> {
        None
    }
}

/// Ordered columns and their aligned values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Fields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from caller-supplied `(column, value)` pairs.
    pub fn from_pairs<C, V>(pairs: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
    {
        let (columns, values) = pairs
            .into_iter()
            .map(|(c, v)| (c.into(), v.into()))
            .unzip();
        Self { columns, values }
    }

    /// Append one pair.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push(column.into());
        self.values.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate `(column, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Value>) {
        (self.columns, self.values)
    }
}

/// Extract a record's columns and values in declaration order.
pub fn extract<R: Record>(record: &R) -> Fields {
    Fields {
        columns: R::columns().iter().map(|c| c.to_string()).collect(),
        values: record.values(),
    }
}
