mod decode_field;
mod decode_table;

use decode_field::{FieldMetadata, decode_field};
use decode_table::{custom_table_name, decode_table};
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, parse_macro_input, parse_quote};

#[proc_macro_derive(Entity, attributes(orm))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let mut item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let marked = decode_table(&item);
    let fields: Vec<_> = item.fields.iter().map(decode_field).collect();
    let name = item.ident.clone();
    let entity_name = syn::ext::IdentExt::unraw(&item.ident).to_string();
    let type_params: Vec<_> = item.generics.type_params().map(|v| v.ident.clone()).collect();
    let where_clause = item.generics.make_where_clause();
    for param in type_params {
        where_clause.predicates.push(parse_quote!(#param: 'static));
    }
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let fields_defs = fields.iter().map(FieldMetadata::descriptor);
    let table_name = custom_table_name(marked);
    quote! {
        impl #impl_generics ::tern::Reflect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::tern::Shape<'_> {
                ::tern::Shape::Struct(self)
            }
        }

        impl #impl_generics ::tern::Entity for #name #ty_generics #where_clause {
            fn descriptor() -> &'static ::tern::EntityDescriptor {
                static DESCRIPTOR: ::tern::EntityDescriptor = ::tern::EntityDescriptor {
                    name: #entity_name,
                    fields: &[#(#fields_defs),*],
                };
                &DESCRIPTOR
            }

            fn entity_descriptor(&self) -> &'static ::tern::EntityDescriptor {
                <Self as ::tern::Entity>::descriptor()
            }

            #table_name
        }
    }
    .into()
}
