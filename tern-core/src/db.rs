use crate::{Entity, GenericSqlWriter, Registry, Selector, SqlWriter};
use std::sync::Arc;

/// Entry point owning the metadata registry and the sql writer.
///
/// Cloning is cheap, clones share the same registry.
#[derive(Clone)]
pub struct Db {
    registry: Arc<Registry>,
    writer: Arc<dyn SqlWriter>,
}

impl Db {
    /// Db with a fresh registry and the [`GenericSqlWriter`].
    pub fn new() -> Self {
        Self::builder().build()
    }
    pub fn builder() -> DbBuilder {
        DbBuilder::default()
    }
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
    pub fn sql_writer(&self) -> &dyn SqlWriter {
        self.writer.as_ref()
    }
    /// Starts a `SELECT` on the table of `T`.
    ///
    /// `T` must implement `Default`: the model is looked up through `T::default()` when the query
    /// is built.
    pub fn select<T: Entity + Default>(&self) -> Selector<'_, T> {
        Selector::new(self)
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct DbBuilder {
    registry: Option<Arc<Registry>>,
    writer: Option<Arc<dyn SqlWriter>>,
}

impl DbBuilder {
    /// Share an existing registry instead of creating a new one.
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }
    /// Dialect used by the selectors created from this db.
    pub fn sql_writer(mut self, writer: impl SqlWriter + 'static) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }
    pub fn build(self) -> Db {
        Db {
            registry: self.registry.unwrap_or_default(),
            writer: self
                .writer
                .unwrap_or_else(|| Arc::new(GenericSqlWriter::new())),
        }
    }
}
