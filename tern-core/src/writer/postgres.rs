use crate::{SqlWriter, writer::Context};
use std::fmt::Write;

/// PostgreSQL flavored writer: double quoted identifiers and `$n` placeholders.
#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresSqlWriter;

impl PostgresSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_identifier_quoted(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(context, out, value, '"', "\"\"");
        out.push('"');
    }

    fn write_placeholder(&self, context: &mut Context, out: &mut String) {
        let _ = write!(out, "${}", context.counter);
    }
}
