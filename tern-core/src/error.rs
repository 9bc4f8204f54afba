use crate::Op;
use thiserror::Error;

/// Input errors reported by the registry and the query compiler.
///
/// They travel inside [`crate::Error`] and can be recovered with
/// `error.downcast_ref::<OrmError>()`, also after context was attached.
/// None of them is transient: retrying with the same input fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrmError {
    /// The registration target is not a single-level pointer to a struct.
    #[error("only a single-level pointer to a struct can be registered")]
    PointerOnly,
    /// A tag segment is not a `key=value` pair.
    #[error("invalid tag content `{0}`")]
    InvalidTagContent(String),
    /// A customization or a column expression names a field the model does not have.
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// A predicate whose operands do not fit the operator.
    #[error("malformed `{0}` predicate")]
    MalformedPredicate(Op),
}
