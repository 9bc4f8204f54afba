//! Tern (Table Entity Relational Naming) maps Rust structs onto relational tables and compiles
//! filter expressions into parameterized SQL.
//!
//! ```rust
//! use tern::{Db, Entity, QueryBuilder, col};
//!
//! #[derive(Entity, Default)]
//! struct TestModel {
//!     id: i64,
//!     #[orm("column=name")]
//!     first_name: String,
//! }
//!
//! let db = Db::new();
//! let query = db
//!     .select::<TestModel>()
//!     .where_([col("first_name").eq("Tom")])
//!     .build()
//!     .unwrap();
//! assert_eq!(query.sql, "SELECT * FROM `test_model` WHERE `name` = ?;");
//! ```
pub use ::tern_core::*;
pub use ::tern_macros::Entity;
