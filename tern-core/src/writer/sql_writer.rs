use crate::{Column, Expression, Op, OrmError, Predicate, Result, Value, writer::Context};
use std::fmt::Write;

/// Dialect printer converting the expression tree into concrete SQL strings.
///
/// The default methods produce MySQL flavored SQL: backtick quoted identifiers and `?`
/// placeholders.
pub trait SqlWriter: Send + Sync {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &str,
        search: char,
        replace: &str,
    ) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers (`name`) doubling inner quotes.
    fn write_identifier_quoted(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('`');
        self.write_escaped(context, out, value, '`', "``");
        out.push('`');
    }

    /// Render the table of the model in the context.
    fn write_table_ref(&self, context: &mut Context, out: &mut String) {
        let model = context.model;
        self.write_identifier_quoted(context, out, model.table_name());
    }

    /// Render the column mapped to the field, fails when the model does not have it.
    fn write_column(&self, context: &mut Context, out: &mut String, value: &Column) -> Result<()> {
        let model = context.model;
        let column = model.column_name(&value.name)?;
        self.write_identifier_quoted(context, out, column);
        Ok(())
    }

    /// Render parameter placeholder, `context.counter` is the 1-based position.
    fn write_placeholder(&self, _context: &mut Context, out: &mut String) {
        out.push('?');
    }

    /// Render a placeholder and bind the value to it.
    fn write_value(&self, context: &mut Context, out: &mut String, value: &Value) {
        context.counter += 1;
        self.write_placeholder(context, out);
        context.args.push(value.clone());
    }

    /// Render a predicate, operands of `AND` and `OR` are always parenthesized.
    ///
    /// Fails when `left` is missing on a binary operator or present on `NOT`.
    fn write_predicate(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &Predicate,
    ) -> Result<()> {
        match (value.op, value.left.as_deref()) {
            (Op::Eq, Some(left)) => {
                left.write_query(self.as_dyn(), context, out)?;
                let _ = write!(out, " {} ", value.op);
                value.right.write_query(self.as_dyn(), context, out)?;
            }
            (Op::Not, None) => {
                let _ = write!(out, " {} (", value.op);
                value.right.write_query(self.as_dyn(), context, out)?;
                out.push(')');
            }
            (Op::And | Op::Or, Some(left)) => {
                out.push('(');
                left.write_query(self.as_dyn(), context, out)?;
                let _ = write!(out, ") {} (", value.op);
                value.right.write_query(self.as_dyn(), context, out)?;
                out.push(')');
            }
            (op, _) => return Err(OrmError::MalformedPredicate(op).into()),
        }
        Ok(())
    }

    /// Emit `SELECT * FROM` with the optional condition.
    ///
    /// `table` is written verbatim when present, otherwise the quoted table of the model is used.
    fn write_select(
        &self,
        context: &mut Context,
        out: &mut String,
        table: Option<&str>,
        condition: Option<&dyn Expression>,
    ) -> Result<()> {
        out.reserve(64);
        out.push_str("SELECT * FROM ");
        match table {
            Some(table) => out.push_str(table),
            None => self.write_table_ref(context, out),
        }
        if let Some(condition) = condition {
            out.push_str(" WHERE ");
            condition.write_query(self.as_dyn(), context, out)?;
        }
        out.push(';');
        Ok(())
    }
}

/// Fallback sql writer using the default methods of [`SqlWriter`].
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}
