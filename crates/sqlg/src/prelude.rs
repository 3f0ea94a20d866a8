//! Convenient imports for typical `sqlg` usage.
//!
//! ```
//! use sqlg::prelude::*;
//! ```

pub use crate::{
    Assignments, Columns, CompExprs, Expr, Generator, Options, SqlgError, SqlgResult, Statement,
    Value,
};
