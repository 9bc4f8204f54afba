mod as_value;
mod db;
mod entity;
mod error;
mod expression;
mod model;
mod naming;
mod query;
mod reflect;
mod registry;
mod select;
mod tag;
mod value;
mod writer;

pub use as_value::*;
pub use db::*;
pub use entity::*;
pub use error::*;
pub use expression::*;
pub use model::*;
pub use naming::*;
pub use query::*;
pub use reflect::*;
pub use registry::*;
pub use select::*;
pub use tag::*;
pub use value::*;
pub use writer::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
