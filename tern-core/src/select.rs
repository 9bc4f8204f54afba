use crate::{
    Db, Entity, Expr, Expression, Predicate, Query, QueryBuilder, Result, writer::Context,
};
use std::marker::PhantomData;

/// Builder of `SELECT * FROM <table> [WHERE <condition>];` for the record type `T`.
///
/// `T: Default` provides the instance handed to the registry when `build` resolves the model.
pub struct Selector<'a, T> {
    db: &'a Db,
    table: Option<String>,
    condition: Option<Expr>,
    _entity: PhantomData<fn() -> T>,
}

impl<'a, T: Entity + Default> Selector<'a, T> {
    pub fn new(db: &'a Db) -> Self {
        Self {
            db,
            table: None,
            condition: None,
            _entity: PhantomData,
        }
    }

    /// Table clause written verbatim, it can be qualified like `` `db`.`table` ``.
    ///
    /// The empty string restores the table of the model.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        let table = table.into();
        self.table = (!table.is_empty()).then_some(table);
        self
    }

    /// Filter of the query, multiple predicates are joined with `AND`. No predicates means no
    /// `WHERE` clause.
    pub fn where_(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.condition = predicates
            .into_iter()
            .reduce(Predicate::and)
            .map(Expr::Predicate);
        self
    }
}

impl<'a, T: Entity + Default> QueryBuilder for Selector<'a, T> {
    fn build(&self) -> Result<Query> {
        let model = self.db.registry().get(&T::default())?;
        let writer = self.db.sql_writer();
        let mut context = Context::new(&model);
        let mut sql = String::new();
        writer
            .write_select(
                &mut context,
                &mut sql,
                self.table.as_deref(),
                self.condition.as_ref().map(|v| v as &dyn Expression),
            )
            .inspect_err(|e| log::warn!("{:#}", e))?;
        log::trace!(
            "Built query: {} args: [{}]",
            sql,
            context
                .args
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Query {
            sql,
            args: context.args,
        })
    }
}
