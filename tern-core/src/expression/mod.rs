mod column;
mod expression;
mod predicate;

pub use column::*;
pub use expression::*;
pub use predicate::*;
