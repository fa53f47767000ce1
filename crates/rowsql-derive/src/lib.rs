//! Derive macros for rowsql
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record;
mod sql_ident;

/// Derive `Record` for a struct, mapping annotated fields to columns.
///
/// # Example
///
/// ```ignore
/// use rowsql::Record;
///
/// #[derive(Record)]
/// #[row(table = "users")]
/// struct User {
///     #[row(column = "id", unique)]
///     id: i64,
///     #[row(column = "email_address")]
///     email: Option<String>,
///     // Not annotated: not a column.
///     login_count: u32,
/// }
/// ```
///
/// # Generated
///
/// - `TABLE` - Table name
/// - `columns()` - Annotated column names in field order
/// - `values()` - Field values converted with `Value::from`
/// - `unique_key()` - The `unique` field's column and value, if any
///
/// # Attributes
///
/// - `#[row(table = "name")]` - Table name (default: snake_case struct name)
/// - `#[row(column = "name")]` - Map field to a column (bare `#[row]` uses the field name)
/// - `#[row(unique)]` - Mark the field as the row's unique key (at most one)
#[proc_macro_derive(Record, attributes(row))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
