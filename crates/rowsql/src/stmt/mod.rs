//! UPDATE / INSERT statement rendering.
//!
//! A [`StatementRequest`] holds a table, ordered columns and values, one
//! include flag per column, and a unique key. Rendering produces a
//! [`Statement`]: the SQL text plus the argument list for its `?` placeholders.
//!
//! # Example
//!
//! ```ignore
//! use rowsql::{StatementRequest, Value};
//!
//! let stmt = StatementRequest::new("users")
//!     .columns(["name", "age"])
//!     .values([Value::from("Ann"), Value::from(30)])
//!     .flags([true, true])
//!     .unique("id", 7)
//!     .render_update(true)?;
//!
//! assert_eq!(stmt.sql(), "UPDATE users SET name = ?, age = ? WHERE id = ?");
//! assert_eq!(stmt.args().len(), 3);
//! # Ok::<(), rowsql::SqlError>(())
//! ```

mod insert;
mod options;
mod request;
mod update;

pub use options::{InsertShape, RenderMode, RenderOptions};
pub use request::StatementRequest;

use crate::value::Value;

/// A rendered statement and the arguments for its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Statement {
    /// The SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Placeholder arguments (empty in literal mode).
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

impl From<Statement> for (String, Vec<Value>) {
    fn from(stmt: Statement) -> Self {
        stmt.into_parts()
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Render one value: a `?` placeholder (value pushed onto `args`) or its literal.
fn bind_value(mode: RenderMode, value: &Value, args: &mut Vec<Value>) -> String {
    match mode {
        RenderMode::Parameterized => {
            args.push(value.clone());
            "?".to_string()
        }
        RenderMode::InsecureLiteral => value.to_string(),
    }
}
