use crate::{Column, Predicate, Result, Value, writer::Context, writer::SqlWriter};
use std::fmt::Debug;

/// A renderable filter expression node.
pub trait Expression: Send + Sync + Debug {
    /// Serialize the expression into `out` using the sql writer, bound values are collected in
    /// the context.
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()>;
}

impl<T: Expression> Expression for &T {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        (*self).write_query(writer, context, out)
    }
}

impl Expression for Value {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_value(context, out, self);
        Ok(())
    }
}

/// Owned node of an expression tree.
#[derive(Debug, Clone)]
pub enum Expr {
    Column(Column),
    Value(Value),
    Predicate(Predicate),
}

impl Expression for Expr {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        match self {
            Expr::Column(v) => v.write_query(writer, context, out),
            Expr::Value(v) => v.write_query(writer, context, out),
            Expr::Predicate(v) => v.write_query(writer, context, out),
        }
    }
}

impl From<Column> for Expr {
    fn from(value: Column) -> Self {
        Expr::Column(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<Predicate> for Expr {
    fn from(value: Predicate) -> Self {
        Expr::Predicate(value)
    }
}
