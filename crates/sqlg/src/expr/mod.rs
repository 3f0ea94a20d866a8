//! Predicate tree for WHERE clauses and EXISTS sub-queries.
//!
//! - [`Expr`] is a deferred predicate: comparison kind plus operands, no column yet.
//! - [`Expression`] is a bound predicate: connective, column and operands, ready to render.
//! - [`ToSql`] renders either an expression or a whole [`Condition`](crate::Condition) into
//!   `?`-placeholder SQL and the parameters in placeholder order.
//!
//! Fragments always lead with their connective (``AND `id`=?``). Grouping constructs strip the first
//! child's connective, so `AND (a OR b)` never becomes `AND (OR a OR b)`.

mod builder;
mod expression;
mod operator;

pub use builder::Expr;
pub use expression::{Expression, ToSql, Wildcard};
pub use operator::Operator;

pub(crate) use expression::{placeholders, strip_first_op};
