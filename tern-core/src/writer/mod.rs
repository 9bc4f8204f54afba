mod context;
mod postgres;
mod sql_writer;

pub use context::*;
pub use postgres::*;
pub use sql_writer::*;
