use crate::Reflect;
use std::any::TypeId;

/// Static description of a record type, produced by `#[derive(Entity)]`.
#[derive(Debug, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Type identifier, without generic arguments.
    pub name: &'static str,
    /// Every field, in declaration order.
    pub fields: &'static [FieldDescriptor],
}

/// Static description of a struct member.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier (raw identifiers have the `r#` prefix removed).
    pub name: &'static str,
    /// Raw content of the `#[orm("...")]` annotation, if any.
    pub tag: Option<&'static str>,
}

/// A record type that can be mapped onto a table.
///
/// Implement it with `#[derive(Entity)]`. The trait is object safe: the registry works on
/// `&dyn Entity` obtained from [`Reflect::shape`].
pub trait Entity: Reflect + 'static {
    fn descriptor() -> &'static EntityDescriptor
    where
        Self: Sized;

    fn entity_descriptor(&self) -> &'static EntityDescriptor;

    /// Key of the registry cache entry.
    fn entity_type(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Table name supplied by the type itself, see [`TableName`].
    fn custom_table_name(&self) -> Option<String> {
        None
    }
}

/// Table naming capability.
///
/// Implement it and mark the struct with `#[orm(table_name)]` so that the derived [`Entity`]
/// uses the returned value. An empty string is a valid table name.
pub trait TableName {
    fn table_name(&self) -> String;
}
