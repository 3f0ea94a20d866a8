//! Statement logging.
//!
//! With the `tracing` feature every generated statement is emitted on target `sqlg.sql`:
//! a `DEBUG` event for real statements, a `TRACE` event when generation produced nothing.
//! Without the feature these functions compile to nothing.

use crate::statement::{Statement, StatementKind};

/// SQL longer than this many bytes is cut (on a char boundary) and suffixed with `...`.
pub const MAX_SQL_LENGTH: usize = 200;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn display_sql(sql: &str) -> String {
    if sql.len() > MAX_SQL_LENGTH {
        format!("{}...", truncate_sql_bytes(sql, MAX_SQL_LENGTH))
    } else {
        sql.to_string()
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn statement(kind: StatementKind, table: &str, stmt: &Statement) {
    if stmt.is_empty() {
        return;
    }
    tracing::debug!(
        target: "sqlg.sql",
        kind = kind.as_str(),
        table,
        param_count = stmt.params.len(),
        sql = %display_sql(&stmt.sql),
        "generated statement"
    );
}

#[cfg(feature = "tracing")]
pub(crate) fn skipped(kind: StatementKind, table: &str, reason: &'static str) {
    tracing::trace!(
        target: "sqlg.sql",
        kind = kind.as_str(),
        table,
        reason,
        "statement skipped"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn statement(_kind: StatementKind, _table: &str, _stmt: &Statement) {}

#[cfg(not(feature = "tracing"))]
pub(crate) fn skipped(_kind: StatementKind, _table: &str, _reason: &'static str) {}
