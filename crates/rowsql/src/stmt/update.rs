//! UPDATE rendering.

use crate::error::SqlResult;
use crate::stmt::options::RenderMode;
use crate::stmt::request::StatementRequest;
use crate::stmt::{Statement, bind_value};

const SEPARATOR: &str = ", ";

impl StatementRequest {
    /// Render `UPDATE <table> SET <col> = ?, ... WHERE <unique> = ?`.
    ///
    /// Only included columns are written, in column order. In parameterized
    /// mode the arguments are the included values followed by the unique
    /// value. With no included columns the SET clause is empty
    /// (`UPDATE t SET  WHERE id = ?`); this is rendered as-is, not rejected.
    ///
    /// Accepts a [`RenderMode`] or a bool (`true` = parameterized).
    pub fn render_update(&self, mode: impl Into<RenderMode>) -> SqlResult<Statement> {
        self.check("update")?;
        let mode = mode.into();

        let mut sql = format!("UPDATE {} SET ", self.table());
        let mut args = Vec::new();

        for (column, value) in self.included() {
            sql.push_str(column);
            sql.push_str(" = ");
            sql.push_str(&bind_value(mode, value, &mut args));
            sql.push_str(SEPARATOR);
        }

        if let Some(trimmed) = sql.strip_suffix(SEPARATOR) {
            let len = trimmed.len();
            sql.truncate(len);
        }

        self.push_where_unique(&mut sql, &mut args, mode);

        let stmt = Statement { sql, args };
        crate::trace::rendered("update", mode, &stmt, self.render_options().max_logged_sql);
        Ok(stmt)
    }
}
