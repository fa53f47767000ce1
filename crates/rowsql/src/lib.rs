//! # rowsql
//!
//! A small builder for `UPDATE` and `INSERT` statements.
//!
//! ## Features
//!
//! - **Record-driven**: `#[derive(Record)]` maps annotated fields to columns
//! - **Selective**: one include flag per column decides what gets written
//! - **Parameterized by default**: values become `?` placeholders with an aligned argument list
//! - **No panics, no exits**: mismatched inputs come back as [`SqlError::LengthMismatch`]
//!
//! ## Usage
//!
//! ```ignore
//! use rowsql::{Record, StatementRequest};
//!
//! #[derive(Record)]
//! #[row(table = "users")]
//! struct User {
//!     #[row(column = "id", unique)]
//!     id: i64,
//!     #[row(column = "name")]
//!     name: String,
//!     #[row(column = "age")]
//!     age: i32,
//! }
//!
//! let user = User { id: 7, name: "Ann".into(), age: 30 };
//!
//! // UPDATE users SET name = ?, age = ? WHERE id = ?
//! let (sql, args) = StatementRequest::for_record(&user)
//!     .flags([false, true, true])
//!     .render_update(true)?
//!     .into_parts();
//! # Ok::<(), rowsql::SqlError>(())
//! ```
//!
//! Literal rendering ([`RenderMode::InsecureLiteral`], or `false`) writes values
//! straight into the SQL text without quoting or escaping. Use it only with
//! trusted values.

pub mod error;
pub mod record;
pub mod stmt;
pub mod value;

mod trace;

pub use error::{SqlError, SqlResult};
pub use record::{Fields, Record, extract};
pub use stmt::{InsertShape, RenderMode, RenderOptions, Statement, StatementRequest};
pub use value::Value;

#[cfg(feature = "derive")]
pub use rowsql_derive::Record;
