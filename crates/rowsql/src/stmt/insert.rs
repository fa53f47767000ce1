//! INSERT rendering.

use crate::error::SqlResult;
use crate::stmt::options::{InsertShape, RenderMode};
use crate::stmt::request::StatementRequest;
use crate::stmt::{Statement, bind_value};
use crate::value::Value;

impl StatementRequest {
    /// Render an INSERT for the included columns.
    ///
    /// The output shape follows [`RenderOptions::insert_shape`](crate::RenderOptions):
    ///
    /// - [`InsertShape::Values`]: `INSERT INTO t (c1, c2, key) VALUES (?, ?, ?)`.
    ///   The unique column is appended unless it is unset or already included.
    ///   With no columns at all this is `INSERT INTO t DEFAULT VALUES`.
    /// - [`InsertShape::Legacy`]: `INSERT INTO t (c1,c2) WHERE key = ?`, which
    ///   has no VALUES clause and will not execute.
    ///
    /// Accepts a [`RenderMode`] or a bool (`true` = parameterized).
    pub fn render_insert(&self, mode: impl Into<RenderMode>) -> SqlResult<Statement> {
        self.check("insert")?;
        let mode = mode.into();

        let stmt = match self.render_options().insert_shape {
            InsertShape::Values => self.build_insert_values(mode),
            InsertShape::Legacy => self.build_insert_legacy(mode),
        };
        crate::trace::rendered("insert", mode, &stmt, self.render_options().max_logged_sql);
        Ok(stmt)
    }

    fn build_insert_values(&self, mode: RenderMode) -> Statement {
        let mut args = Vec::new();
        let mut columns = Vec::new();
        let mut value_parts = Vec::new();

        for (column, value) in self.included() {
            columns.push(column);
            value_parts.push(bind_value(mode, value, &mut args));
        }

        let (unique_column, unique_value) = self.unique_key();
        if !unique_column.is_empty() && !columns.contains(&unique_column) {
            columns.push(unique_column);
            value_parts.push(bind_value(mode, unique_value, &mut args));
        }

        let sql = if columns.is_empty() {
            format!("INSERT INTO {} DEFAULT VALUES", self.table())
        } else {
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                self.table(),
                columns.join(", "),
                value_parts.join(", ")
            )
        };

        Statement { sql, args }
    }

    fn build_insert_legacy(&self, mode: RenderMode) -> Statement {
        let mut args: Vec<Value> = Vec::new();
        let mut sql = format!("INSERT INTO {} (", self.table());

        for (column, value) in self.included() {
            match mode {
                RenderMode::Parameterized => {
                    sql.push_str(column);
                    sql.push(',');
                    args.push(value.clone());
                }
                RenderMode::InsecureLiteral => {
                    sql.push_str(&format!("{column} = {value}, "));
                }
            }
        }

        // Cut at the last comma anywhere in the string, not just a trailing one.
        if let Some(idx) = sql.rfind(',') {
            sql.truncate(idx);
        }
        sql.push(')');

        self.push_where_unique(&mut sql, &mut args, mode);
        Statement { sql, args }
    }
}
