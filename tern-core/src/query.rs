use crate::{Result, Value};

/// Compiled statement: SQL text and the values of its placeholders, in order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Query {
    pub sql: String,
    pub args: Vec<Value>,
}

/// Something that compiles into a [`Query`].
pub trait QueryBuilder {
    fn build(&self) -> Result<Query>;
}
