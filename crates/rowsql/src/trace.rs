//! SQL log events.
//!
//! With the `tracing` feature enabled, every render emits an event at target
//! `rowsql.sql`: DEBUG for parameterized statements, WARN for statements with
//! inlined literals. Without the feature these functions compile to nothing.

use crate::error::SqlError;
use crate::stmt::{RenderMode, Statement};

#[cfg(feature = "tracing")]
pub(crate) fn rendered(
    kind: &'static str,
    mode: RenderMode,
    stmt: &Statement,
    max_sql_length: Option<usize>,
) {
    let sql = truncate_sql(&stmt.sql, max_sql_length);
    let arg_count = stmt.args.len();
    match mode {
        RenderMode::Parameterized => tracing::debug!(
            target: "rowsql.sql",
            kind,
            mode = ?mode,
            arg_count,
            sql = %sql,
            "rendered statement"
        ),
        RenderMode::InsecureLiteral => tracing::warn!(
            target: "rowsql.sql",
            kind,
            mode = ?mode,
            arg_count,
            sql = %sql,
            "rendered statement with inlined literal values"
        ),
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rendered(
    _kind: &'static str,
    _mode: RenderMode,
    _stmt: &Statement,
    _max_sql_length: Option<usize>,
) {
}

#[cfg(feature = "tracing")]
pub(crate) fn rejected(kind: &'static str, err: &SqlError) {
    tracing::debug!(target: "rowsql.sql", kind, error = %err, "statement rejected");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rejected(_kind: &'static str, _err: &SqlError) {}

#[cfg(feature = "tracing")]
fn truncate_sql(sql: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

#[cfg(feature = "tracing")]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
