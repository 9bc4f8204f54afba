use crate::{
    Entity, Field, Model, ModelOpt, OrmError, Reflect, Result, Shape, TAG_COLUMN, parse_tag,
    underscore_name,
};
use anyhow::Context;
use dashmap::DashMap;
use std::{any::TypeId, collections::HashMap, sync::Arc};

/// Cache of the [`Model`] of every registered record type.
///
/// Lookups of a cached type never wait for models being built: construction happens outside
/// of the map and only the finished `Arc<Model>` is stored. Two callers racing on the first
/// lookup of the same type may both build a model, the last one stored wins and is the one
/// returned from then on. Both models are equal, only their identity differs.
#[derive(Default, Debug)]
pub struct Registry {
    models: DashMap<TypeId, Arc<Model>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached model for the type behind `entity`, registering it when missing.
    pub fn get<R: Reflect>(&self, entity: R) -> Result<Arc<Model>> {
        self.get_dyn(&entity)
    }

    pub(crate) fn get_dyn(&self, entity: &dyn Reflect) -> Result<Arc<Model>> {
        if let Some(entity) = pointee(entity) {
            if let Some(model) = self.models.get(&entity.entity_type()) {
                log::trace!(
                    "Model of `{}` found in cache",
                    entity.entity_descriptor().name
                );
                return Ok(model.value().clone());
            }
        }
        self.register_dyn(entity, &[])
    }

    /// Builds the model of the type behind `entity`, applies `opts` in order and stores it,
    /// overwriting a previous registration.
    ///
    /// `entity` must be a single-level pointer (`&T`, `&mut T`, `Box<T>`, `Rc<T>`, `Arc<T>`) to
    /// an [`Entity`], anything else fails with [`OrmError::PointerOnly`].
    pub fn register<R: Reflect>(
        &self,
        entity: R,
        opts: impl IntoIterator<Item = ModelOpt>,
    ) -> Result<Arc<Model>> {
        let opts: Vec<_> = opts.into_iter().collect();
        self.register_dyn(&entity, &opts)
    }

    fn register_dyn(&self, entity: &dyn Reflect, opts: &[ModelOpt]) -> Result<Arc<Model>> {
        let Some(entity) = pointee(entity) else {
            log::warn!("Rejected registration of a value that is not a pointer to a struct");
            return Err(OrmError::PointerOnly.into());
        };
        let descriptor = entity.entity_descriptor();
        let model = Arc::new(
            build_model(entity, opts)
                .with_context(|| format!("While registering `{}`", descriptor.name))
                .inspect_err(|e| log::warn!("{:#}", e))?,
        );
        log::debug!(
            "Registered `{}` as table `{}` with {} fields",
            descriptor.name,
            model.table_name,
            model.fields.len()
        );
        self.models.insert(entity.entity_type(), model.clone());
        Ok(model)
    }

    /// Model currently cached for `T`, without registering it.
    pub fn cached<T: Entity>(&self) -> Option<Arc<Model>> {
        self.models.get(&TypeId::of::<T>()).map(|v| v.value().clone())
    }

    /// Number of cached models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn pointee(entity: &dyn Reflect) -> Option<&dyn Entity> {
    let Shape::Pointer(inner) = entity.shape() else {
        return None;
    };
    match inner.shape() {
        Shape::Struct(entity) => Some(entity),
        _ => None,
    }
}

fn build_model(entity: &dyn Entity, opts: &[ModelOpt]) -> Result<Model> {
    let descriptor = entity.entity_descriptor();
    let mut fields = HashMap::with_capacity(descriptor.fields.len());
    for field in descriptor.fields {
        let mut tag = parse_tag(field.tag)?;
        let column_name = tag
            .remove(TAG_COLUMN)
            .unwrap_or_else(|| underscore_name(field.name));
        fields.insert(field.name.to_string(), Field { column_name });
    }
    let table_name = entity
        .custom_table_name()
        .unwrap_or_else(|| underscore_name(descriptor.name));
    let mut model = Model { table_name, fields };
    for opt in opts {
        opt.apply(&mut model)?;
    }
    Ok(model)
}
