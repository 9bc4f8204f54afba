use crate::{
    AsValue, Expr, Expression, Op, Predicate, Result,
    writer::{Context, SqlWriter},
};
use std::borrow::Cow;

/// Reference to a field of the record type, by its identifier.
///
/// The name is resolved against the model only when the query is built.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: Cow<'static, str>,
}

/// Shorthand for [`Column::new`].
pub fn col(name: impl Into<Cow<'static, str>>) -> Column {
    Column::new(name)
}

impl Column {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }
    /// `column = value`
    pub fn eq(self, value: impl AsValue) -> Predicate {
        Predicate {
            left: Some(Box::new(Expr::Column(self))),
            op: Op::Eq,
            right: Box::new(Expr::Value(value.as_value())),
        }
    }
}

impl Expression for Column {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_column(context, out, self)
    }
}
