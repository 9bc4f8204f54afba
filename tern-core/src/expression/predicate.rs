use crate::{
    Expr, Expression, Result,
    writer::{Context, SqlWriter},
};
use std::{
    fmt::{self, Display, Formatter},
    ops,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Not,
    And,
    Or,
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Eq => "=",
            Op::Not => "NOT",
            Op::And => "AND",
            Op::Or => "OR",
        })
    }
}

/// Boolean condition node. `left` is `None` only for [`Op::Not`].
#[derive(Debug, Clone)]
pub struct Predicate {
    pub left: Option<Box<Expr>>,
    pub op: Op,
    pub right: Box<Expr>,
}

/// `NOT (predicate)`
pub fn not(predicate: Predicate) -> Predicate {
    Predicate {
        left: None,
        op: Op::Not,
        right: Box::new(Expr::Predicate(predicate)),
    }
}

impl Predicate {
    pub fn and(self, right: Predicate) -> Predicate {
        self.combine(Op::And, right)
    }
    pub fn or(self, right: Predicate) -> Predicate {
        self.combine(Op::Or, right)
    }
    fn combine(self, op: Op, right: Predicate) -> Predicate {
        Predicate {
            left: Some(Box::new(Expr::Predicate(self))),
            op,
            right: Box::new(Expr::Predicate(right)),
        }
    }
}

impl ops::Not for Predicate {
    type Output = Predicate;
    fn not(self) -> Self::Output {
        not(self)
    }
}

impl Expression for Predicate {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut String,
    ) -> Result<()> {
        writer.write_predicate(context, out, self)
    }
}
