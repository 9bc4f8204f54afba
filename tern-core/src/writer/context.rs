use crate::{Model, Value};

/// State carried while a query is being written.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    /// Number of placeholders written so far.
    pub counter: u32,
    /// Model used to resolve column names.
    pub model: &'a Model,
    /// Bound values, in placeholder order.
    pub args: Vec<Value>,
}

impl<'a> Context<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            counter: 0,
            model,
            args: Vec::new(),
        }
    }
}
