//! # sqlg
//!
//! A parameterized SQL statement generator.
//!
//! ## Features
//!
//! - **Injection-safe**: values are always bound as `?` parameters, identifiers are backtick-quoted
//! - **Deterministic**: clause and parameter order follow declaration order, never map order
//! - **Driver-agnostic**: output is a [`Statement`] (`sql` + `params`), nothing is executed
//! - **Record columns**: `#[derive(Columns)]` turns a struct into a select list
//! - **Tracing**: generated SQL is emitted on target `sqlg.sql` (feature `tracing`)
//!
//! ## Example
//!
//! ```
//! use sqlg::{CompExprs, Expr, Generator, Options, Value};
//!
//! let opts = Options::new()
//!     .and("deleted_at", Expr::is_null())
//!     .and_exprs(
//!         CompExprs::new()
//!             .with("name", Expr::eq("tom"))
//!             .with("id", Expr::eq(666)),
//!     );
//!
//! let stmt = Generator::new("user", opts).select(&["id", "name"]);
//! assert_eq!(
//!     stmt.sql,
//!     "SELECT `id`, `name` FROM `user` WHERE `deleted_at` IS NULL AND (`name`=? OR `id`=?)"
//! );
//! assert_eq!(stmt.params, vec![Value::from("tom"), Value::from(666)]);
//! ```

pub mod columns;
pub mod condition;
pub mod error;
pub mod expr;
pub mod generator;
pub mod ident;
pub mod options;
pub mod ordered;
pub mod prelude;
pub mod statement;
pub mod value;

mod trace;

pub use columns::Columns;
pub use condition::Condition;
pub use error::{SqlgError, SqlgResult};
pub use expr::{Expr, Expression, Operator, ToSql, Wildcard};
pub use generator::Generator;
pub use ident::{safe_name, safe_names};
pub use options::Options;
pub use ordered::{Assignments, CompExprs, OrderedMap};
pub use statement::{Statement, StatementKind};
pub use value::Value;

#[cfg(feature = "derive")]
pub use sqlg_derive::Columns;
