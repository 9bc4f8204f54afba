use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, ItemStruct};

/// Whether the struct is marked with `#[orm(table_name)]`.
pub(crate) fn decode_table(item: &ItemStruct) -> bool {
    item.attrs
        .iter()
        .filter(|attr| attr.meta.path().is_ident("orm"))
        .any(|attr| {
            let Ok(v) = attr
                .meta
                .require_list()
                .and_then(|v| v.parse_args::<Ident>())
            else {
                panic!(
                    "Error while parsing `orm` on `{}`, use it like: `#[orm(table_name)]`",
                    item.ident
                );
            };
            if v != "table_name" {
                panic!("Unknown attribute `{}` inside orm macro", v);
            }
            true
        })
}

/// Override of `Entity::custom_table_name` delegating to `TableName`, empty when not marked.
pub(crate) fn custom_table_name(marked: bool) -> TokenStream {
    if !marked {
        return TokenStream::new();
    }
    quote! {
        fn custom_table_name(&self) -> Option<String> {
            Some(::tern::TableName::table_name(self))
        }
    }
}
