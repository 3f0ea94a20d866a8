//! Columns derive macro implementation

mod attrs;

use attrs::{FieldAttr, StructAttr, Untagged};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Columns can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Columns can only be derived for structs",
            ));
        }
    };

    let struct_attr = StructAttr::from_attrs(&input.attrs)?;

    let mut columns = Vec::new();
    for field in fields {
        let attr = FieldAttr::from_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }
        if !attr.is_tagged() && struct_attr.untagged == Untagged::Skip {
            continue;
        }

        let column = match (attr.expr, attr.column) {
            (Some(expr), _) => expr,
            (None, Some(column)) => column,
            (None, None) => {
                let Some(ident) = field.ident.as_ref() else {
                    continue;
                };
                let field_name = ident.unraw().to_string();
                match struct_attr.rename_all {
                    Some(rule) => rule.apply(&field_name),
                    None => field_name,
                }
            }
        };
        columns.push(column);
    }

    Ok(quote! {
        impl #impl_generics ::sqlg::Columns for #name #ty_generics #where_clause {
            fn columns() -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(::std::string::String::from(#columns)),*]
            }
        }
    })
}
