//! Record derive macro implementation

mod attrs;

use std::collections::HashSet;

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Result};

use attrs::{get_field_column, get_table_name};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    let table = get_table_name(&input.attrs)?.unwrap_or_else(|| name.to_string().to_snake_case());

    let mut columns = Vec::with_capacity(fields.len());
    let mut idents = Vec::with_capacity(fields.len());
    let mut seen = HashSet::new();
    let mut unique: Option<(String, &syn::Ident)> = None;

    for field in fields {
        let Some((column, is_unique)) = get_field_column(field)? else {
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        if !seen.insert(column.clone()) {
            return Err(Error::new_spanned(
                field,
                format!("duplicate column '{column}'"),
            ));
        }
        if is_unique {
            if unique.is_some() {
                return Err(Error::new_spanned(
                    field,
                    "only one field can be marked #[row(unique)]",
                ));
            }
            unique = Some((column.clone(), ident));
        }

        columns.push(column);
        idents.push(ident);
    }

    let unique_key_fn = unique.map(|(column, ident)| {
        quote! {
            fn unique_key(&self) -> ::core::option::Option<(&'static str, ::rowsql::Value)> {
                ::core::option::Option::Some((
                    #column,
                    ::rowsql::Value::from(::core::clone::Clone::clone(&self.#ident)),
                ))
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::rowsql::Record for #name #ty_generics #where_clause {
            const TABLE: &'static str = #table;

            fn columns() -> &'static [&'static str] {
                &[#(#columns),*]
            }

            fn values(&self) -> ::std::vec::Vec<::rowsql::Value> {
                ::std::vec![
                    #(::rowsql::Value::from(::core::clone::Clone::clone(&self.#idents))),*
                ]
            }

            #unique_key_fn
        }
    })
}
