use crate::error::{SqlError, SqlResult};
use crate::record::{Fields, Record, extract};
use crate::stmt::options::{RenderMode, RenderOptions};
use crate::value::Value;

/// Working state for one UPDATE or INSERT statement.
///
/// Populate it with the builder methods, then call
/// [`render_update`](Self::render_update) or
/// [`render_insert`](Self::render_insert). Table and column names are written
/// into the SQL as given; they are not validated or quoted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementRequest {
    table: String,
    columns: Vec<String>,
    values: Vec<Value>,
    flags: Vec<bool>,
    unique_column: String,
    unique_value: Value,
    options: RenderOptions,
}

impl StatementRequest {
    /// Create an empty request for the given table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Create a request for `R::TABLE`, populated from `record`.
    pub fn for_record<R: Record>(record: &R) -> Self {
        Self::new(R::TABLE).record(record)
    }

    /// Take columns and values from a record, plus its unique key when it marks one.
    ///
    /// Include flags are left untouched.
    pub fn record<R: Record>(mut self, record: &R) -> Self {
        if let Some((column, value)) = record.unique_key() {
            self.unique_column = column.to_string();
            self.unique_value = value;
        }
        self.fields(extract(record))
    }

    /// Set columns and values from an extracted field set.
    pub fn fields(mut self, fields: Fields) -> Self {
        let (columns, values) = fields.into_parts();
        self.columns = columns;
        self.values = values;
        self
    }

    /// Set column names.
    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set column values.
    pub fn values<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set include flags, one per column.
    pub fn flags(mut self, flags: impl IntoIterator<Item = bool>) -> Self {
        self.flags = flags.into_iter().collect();
        self
    }

    /// Include every column currently set.
    pub fn include_all(mut self) -> Self {
        self.flags = vec![true; self.columns.len()];
        self
    }

    /// Set columns, values, and flags together.
    pub fn all<S, V>(
        self,
        columns: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = V>,
        flags: impl IntoIterator<Item = bool>,
    ) -> Self
    where
        S: Into<String>,
        V: Into<Value>,
    {
        self.columns(columns).values(values).flags(flags)
    }

    /// Set the column and value identifying the target row.
    pub fn unique(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.unique_column(column).unique_value(value)
    }

    pub fn unique_column(mut self, column: impl Into<String>) -> Self {
        self.unique_column = column.into();
        self
    }

    pub fn unique_value(mut self, value: impl Into<Value>) -> Self {
        self.unique_value = value.into();
        self
    }

    /// Replace the rendering options.
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.options
    }

    /// Check that columns, values, and flags all have the same length.
    pub fn validate(&self) -> SqlResult<()> {
        let (c, v, f) = (self.columns.len(), self.values.len(), self.flags.len());
        if c != v || c != f {
            return Err(SqlError::length_mismatch(c, v, f));
        }
        Ok(())
    }

    /// Included `(column, value)` pairs, in column order.
    pub fn included(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .zip(&self.values)
            .zip(&self.flags)
            .filter(|(_, include)| **include)
            .map(|((column, value), _)| (column.as_str(), value))
    }

    /// The unique key column and value (empty column and NULL when unset).
    pub fn unique_key(&self) -> (&str, &Value) {
        (&self.unique_column, &self.unique_value)
    }

    /// Append ` WHERE <unique> = ?` (or the inline literal).
    pub(super) fn push_where_unique(&self, sql: &mut String, args: &mut Vec<Value>, mode: RenderMode) {
        sql.push_str(" WHERE ");
        sql.push_str(&self.unique_column);
        sql.push_str(" = ");
        sql.push_str(&super::bind_value(mode, &self.unique_value, args));
    }

    /// Validate before rendering, logging the rejection.
    pub(super) fn check(&self, kind: &'static str) -> SqlResult<()> {
        self.validate().inspect_err(|err| crate::trace::rejected(kind, err))
    }
}
