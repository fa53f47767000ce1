//! Attribute parsing for the Record derive macro.
//!
//! Handles struct-level and field-level `#[row(...)]` attributes.

use syn::{Attribute, Error, Meta, Result};

use crate::sql_ident::{parse_sql_ident, parse_sql_ident_with_span};

/// Struct-level `#[row(table = "...")]`.
pub(super) struct StructAttrs {
    pub(super) table: Option<String>,
}

impl syn::parse::Parse for StructAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut table = None;

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            let _: syn::Token![=] = input.parse()?;
            let value: syn::LitStr = input.parse()?;

            match ident.to_string().as_str() {
                "table" => table = Some(value.value()),
                other => {
                    return Err(Error::new(
                        ident.span(),
                        format!("unknown struct attribute `{other}` (expected `table`)"),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(Self { table })
    }
}

/// Field-level `#[row(column = "...", unique)]`.
#[derive(Default)]
pub(super) struct FieldAttrs {
    pub(super) column: Option<String>,
    pub(super) unique: bool,
}

impl syn::parse::Parse for FieldAttrs {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut attrs = FieldAttrs::default();

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            match ident.to_string().as_str() {
                "unique" => attrs.unique = true,
                "column" => {
                    let _: syn::Token![=] = input.parse()?;
                    let value: syn::LitStr = input.parse()?;
                    attrs.column = Some(parse_sql_ident(&value, "column")?);
                }
                other => {
                    return Err(Error::new(
                        ident.span(),
                        format!("unknown field attribute `{other}` (expected `column` or `unique`)"),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                let _: syn::Token![,] = input.parse()?;
            } else {
                break;
            }
        }

        Ok(attrs)
    }
}

/// Table name from `#[row(table = "...")]`, if present.
pub(super) fn get_table_name(attrs: &[Attribute]) -> Result<Option<String>> {
    let mut table = None;
    for attr in attrs {
        if !attr.path().is_ident("row") {
            continue;
        }
        let parsed: StructAttrs = attr.parse_args()?;
        if let Some(t) = parsed.table {
            table = Some(t);
        }
    }
    Ok(table)
}

/// Column mapping for one field: `None` when the field carries no `#[row]` attribute.
///
/// A bare `#[row]` (or one without `column = ...`) maps to the field's own name.
pub(super) fn get_field_column(field: &syn::Field) -> Result<Option<(String, bool)>> {
    let mut found: Option<FieldAttrs> = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("row") {
            continue;
        }
        let parsed = match &attr.meta {
            Meta::Path(_) => FieldAttrs::default(),
            _ => attr.parse_args::<FieldAttrs>()?,
        };
        let merged = found.get_or_insert_with(FieldAttrs::default);
        if parsed.column.is_some() {
            merged.column = parsed.column;
        }
        merged.unique |= parsed.unique;
    }

    let Some(attrs) = found else {
        return Ok(None);
    };

    let column = match attrs.column {
        Some(column) => column,
        None => {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| Error::new_spanned(field, "Record fields must be named"))?;
            let name = syn::ext::IdentExt::unraw(ident).to_string();
            parse_sql_ident_with_span(&name, ident.span(), "column")?
        }
    };

    Ok(Some((column, attrs.unique)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn first_field(item: syn::ItemStruct) -> syn::Field {
        item.fields.into_iter().next().unwrap()
    }

    #[test]
    fn unannotated_field_is_skipped() {
        let field = first_field(parse_quote! { struct S { cache: u32 } });
        assert!(get_field_column(&field).unwrap().is_none());
    }

    #[test]
    fn column_and_unique() {
        let field = first_field(parse_quote! {
            struct S { #[row(column = "user_id", unique)] id: i64 }
        });
        assert_eq!(
            get_field_column(&field).unwrap(),
            Some(("user_id".to_string(), true))
        );
    }

    #[test]
    fn bare_attribute_uses_field_name() {
        let field = first_field(parse_quote! { struct S { #[row] r#type: String } });
        assert_eq!(
            get_field_column(&field).unwrap(),
            Some(("type".to_string(), false))
        );

        let field = first_field(parse_quote! { struct S { #[row(unique)] id: i64 } });
        assert_eq!(get_field_column(&field).unwrap(), Some(("id".to_string(), true)));
    }

    #[test]
    fn rejects_unknown_and_invalid() {
        let field = first_field(parse_quote! { struct S { #[row(colum = "x")] x: i64 } });
        assert!(get_field_column(&field).is_err());

        let field = first_field(parse_quote! { struct S { #[row(column = "bad name")] x: i64 } });
        assert!(get_field_column(&field).is_err());
    }

    #[test]
    fn table_attribute() {
        let item: syn::ItemStruct = parse_quote! {
            #[derive(Debug)]
            #[row(table = "people")]
            struct Person { }
        };
        assert_eq!(get_table_name(&item.attrs).unwrap(), Some("people".into()));

        let item: syn::ItemStruct = parse_quote! { struct Person { } };
        assert_eq!(get_table_name(&item.attrs).unwrap(), None);
    }
}
