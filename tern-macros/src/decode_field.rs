use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, LitStr, ext::IdentExt};

pub(crate) struct FieldMetadata {
    pub(crate) name: String,
    pub(crate) tag: Option<String>,
}

impl FieldMetadata {
    /// `FieldDescriptor` literal placed in the static descriptor of the entity.
    pub(crate) fn descriptor(&self) -> TokenStream {
        let name = &self.name;
        let tag = match &self.tag {
            Some(v) => quote!(Some(#v)),
            None => quote!(None),
        };
        quote! {
            ::tern::FieldDescriptor {
                name: #name,
                tag: #tag,
            }
        }
    }
}

/// Collects the identifier and the raw `#[orm("...")]` tag of a field.
///
/// The tag content is not validated here, the registry parses it when the model is built.
pub fn decode_field(field: &Field) -> FieldMetadata {
    let name = field
        .ident
        .as_ref()
        .expect("Entity can only be derived for structs with named fields")
        .unraw()
        .to_string();
    let mut tag = None;
    for attr in field.attrs.iter().filter(|v| v.meta.path().is_ident("orm")) {
        let Ok(v) = attr
            .meta
            .require_list()
            .and_then(|v| v.parse_args::<LitStr>())
        else {
            panic!(
                "Error while parsing `orm` on field `{}`, use it like: `#[orm(\"column=my_column\")]`",
                name
            );
        };
        if tag.is_some() {
            panic!("Field `{}` has more than one `orm` attribute", name);
        }
        tag = Some(v.value());
    }
    FieldMetadata { name, tag }
}
