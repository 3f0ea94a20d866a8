//! Statement build options.
//!
//! [`Options`] collects everything a [`Generator`](crate::Generator) needs besides the table name.
//! It is a consuming builder: configure it once, hand it to the generator, and it is read-only
//! from then on.
//!
//! # Example
//! ```
//! use sqlg::{CompExprs, Expr, Options};
//!
//! let opts = Options::new()
//!     .and("deleted_at", Expr::is_null())
//!     .and_exprs(
//!         CompExprs::new()
//!             .with("name", Expr::eq("tom"))
//!             .with("id", Expr::eq(666)),
//!     )
//!     .order_by_desc("id")
//!     .limit(10);
//! ```

use crate::condition::Condition;
use crate::expr::{Expr, Expression, Operator, ToSql};
use crate::ident::{join_safe_names, safe_name};
use crate::ordered::{Assignments, CompExprs};
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    condition: Condition,
    group_by: Vec<String>,
    order_by: Vec<String>,
    limit: u32,
    offset: u32,
    force_index: String,
    on_duplicate_key_update: Option<Assignments>,
    for_update: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    // ── WHERE ──────────────────────────────────────────────────────────────

    /// `AND column <expr>`
    pub fn and(mut self, column: impl Into<String>, expr: Expr) -> Self {
        self.condition.append(expr.bind(Operator::And, column));
        self
    }

    /// `OR column <expr>`
    pub fn or(mut self, column: impl Into<String>, expr: Expr) -> Self {
        self.condition.append(expr.bind(Operator::Or, column));
        self
    }

    /// [`and`](Self::and), skipped when `expr` is `None`.
    pub fn and_opt(self, column: impl Into<String>, expr: Option<Expr>) -> Self {
        match expr {
            Some(expr) => self.and(column, expr),
            None => self,
        }
    }

    /// [`or`](Self::or), skipped when `expr` is `None`.
    pub fn or_opt(self, column: impl Into<String>, expr: Option<Expr>) -> Self {
        match expr {
            Some(expr) => self.or(column, expr),
            None => self,
        }
    }

    /// `AND (a OR b ...)`: members are joined with OR.
    pub fn and_exprs(self, exprs: CompExprs) -> Self {
        self.group(Operator::And, &exprs)
    }

    /// `OR (a AND b ...)`: members are joined with AND.
    pub fn or_exprs(self, exprs: CompExprs) -> Self {
        self.group(Operator::Or, &exprs)
    }

    fn group(mut self, op: Operator, exprs: &CompExprs) -> Self {
        if exprs.is_empty() {
            return self;
        }
        let members = bind_all(exprs, op.opposite());
        self.condition.append(Expression::compound(op, members));
        self
    }

    /// `AND EXISTS (SELECT * FROM table WHERE a AND b ...)`
    pub fn exists(self, table: impl Into<String>, exprs: CompExprs) -> Self {
        self.sub_query(Operator::And, false, table.into(), &exprs)
    }

    /// `AND NOT EXISTS (...)`
    pub fn not_exists(self, table: impl Into<String>, exprs: CompExprs) -> Self {
        self.sub_query(Operator::And, true, table.into(), &exprs)
    }

    /// `OR EXISTS (...)`
    pub fn or_exists(self, table: impl Into<String>, exprs: CompExprs) -> Self {
        self.sub_query(Operator::Or, false, table.into(), &exprs)
    }

    /// `OR NOT EXISTS (...)`
    pub fn or_not_exists(self, table: impl Into<String>, exprs: CompExprs) -> Self {
        self.sub_query(Operator::Or, true, table.into(), &exprs)
    }

    fn sub_query(mut self, op: Operator, negated: bool, table: String, exprs: &CompExprs) -> Self {
        if table.is_empty() || exprs.is_empty() {
            return self;
        }
        self.condition.append(Expression::Exists {
            op,
            table,
            children: bind_all(exprs, Operator::And),
            negated,
        });
        self
    }

    // ── Other clauses ──────────────────────────────────────────────────────

    /// Append GROUP BY columns.
    pub fn group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append `column ASC`.
    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by.push(format!("{} ASC", safe_name(column)));
        self
    }

    /// Append `column DESC`.
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order_by.push(format!("{} DESC", safe_name(column)));
        self
    }

    /// Set LIMIT. Zero means no LIMIT clause.
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = n;
        self
    }

    /// Set OFFSET. Zero means no OFFSET clause.
    pub fn offset(mut self, n: u32) -> Self {
        self.offset = n;
        self
    }

    /// Set `FORCE INDEX (index)`, replacing any earlier index.
    pub fn force_index(mut self, index: impl Into<String>) -> Self {
        self.force_index = index.into();
        self
    }

    /// Assignments for `ON DUPLICATE KEY UPDATE`. Only INSERT reads them.
    pub fn on_duplicate_key_update(mut self, assignments: Assignments) -> Self {
        self.on_duplicate_key_update = Some(assignments);
        self
    }

    /// Append `FOR UPDATE` to SELECT.
    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn has_where(&self) -> bool {
        !self.condition.is_empty()
    }

    // ── Clause rendering ───────────────────────────────────────────────────
    //
    // Each renderer returns "" when its state is unset.

    pub(crate) fn force_index_sql(&self) -> String {
        if self.force_index.is_empty() {
            return String::new();
        }
        format!("FORCE INDEX ({})", safe_name(&self.force_index))
    }

    pub(crate) fn where_sql(&self, params: &mut Vec<Value>) -> String {
        let sql = self.condition.build(params);
        if sql.is_empty() {
            return sql;
        }
        format!("WHERE {sql}")
    }

    pub(crate) fn group_by_sql(&self) -> String {
        if self.group_by.is_empty() {
            return String::new();
        }
        format!("GROUP BY {}", join_safe_names(&self.group_by))
    }

    pub(crate) fn order_by_sql(&self) -> String {
        if self.order_by.is_empty() {
            return String::new();
        }
        format!("ORDER BY {}", self.order_by.join(", "))
    }

    pub(crate) fn limit_sql(&self) -> String {
        if self.limit == 0 {
            return String::new();
        }
        format!("LIMIT {}", self.limit)
    }

    pub(crate) fn offset_sql(&self) -> String {
        if self.offset == 0 {
            return String::new();
        }
        format!("OFFSET {}", self.offset)
    }

    pub(crate) fn on_duplicate_key_update_sql(&self, params: &mut Vec<Value>) -> String {
        match &self.on_duplicate_key_update {
            Some(assignments) if !assignments.is_empty() => format!(
                "ON DUPLICATE KEY UPDATE {}",
                assignment_list(assignments, params)
            ),
            _ => String::new(),
        }
    }

    pub(crate) fn for_update_sql(&self) -> String {
        if self.for_update {
            "FOR UPDATE".to_string()
        } else {
            String::new()
        }
    }
}

/// `SET a=?, b=?`; empty when there is nothing to assign.
pub(crate) fn set_sql(assignments: &Assignments, params: &mut Vec<Value>) -> String {
    if assignments.is_empty() {
        return String::new();
    }
    format!("SET {}", assignment_list(assignments, params))
}

fn assignment_list(assignments: &Assignments, params: &mut Vec<Value>) -> String {
    assignments
        .iter()
        .map(|(column, value)| {
            params.push(value.clone());
            format!("{}=?", safe_name(column))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn bind_all(exprs: &CompExprs, op: Operator) -> Vec<Expression> {
    exprs.iter().map(|(column, expr)| expr.bind(op, column)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_of(opts: &Options) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let sql = opts.where_sql(&mut params);
        (sql, params)
    }

    #[test]
    fn defaults_render_nothing() {
        let opts = Options::new();
        assert!(!opts.has_where());
        assert_eq!(where_of(&opts).0, "");
        assert_eq!(opts.force_index_sql(), "");
        assert_eq!(opts.group_by_sql(), "");
        assert_eq!(opts.order_by_sql(), "");
        assert_eq!(opts.limit_sql(), "");
        assert_eq!(opts.offset_sql(), "");
        assert_eq!(opts.for_update_sql(), "");
        assert_eq!(opts.on_duplicate_key_update_sql(&mut Vec::new()), "");
    }

    #[test]
    fn and_exprs_joins_members_with_or() {
        let opts = Options::new().and_exprs(
            CompExprs::new()
                .with("name", Expr::eq("tom"))
                .with("id", Expr::eq(666)),
        );
        let (sql, params) = where_of(&opts);
        assert_eq!(sql, "WHERE (`name`=? OR `id`=?)");
        assert_eq!(params, vec![Value::from("tom"), Value::Int(666)]);
    }

    #[test]
    fn or_exprs_joins_members_with_and() {
        let opts = Options::new().and("a", Expr::eq(1)).or_exprs(
            CompExprs::new()
                .with("b", Expr::eq(2))
                .with("c", Expr::eq(3)),
        );
        assert_eq!(where_of(&opts).0, "WHERE `a`=? OR (`b`=? AND `c`=?)");
    }

    #[test]
    fn empty_groups_are_ignored() {
        let opts = Options::new()
            .and_exprs(CompExprs::new())
            .or_exprs(CompExprs::new())
            .exists("t", CompExprs::new())
            .not_exists("", CompExprs::new().with("a", Expr::eq(1)));
        assert!(!opts.has_where());
        assert_eq!(opts.condition().len(), 0);
    }

    #[test]
    fn exists_variants() {
        let inner = CompExprs::new().with("uid", Expr::eq(1));
        let opts = Options::new()
            .exists("a", inner.clone())
            .not_exists("b", inner.clone())
            .or_exists("c", inner.clone())
            .or_not_exists("d", inner);
        assert_eq!(
            where_of(&opts).0,
            "WHERE EXISTS (SELECT * FROM `a` WHERE `uid`=?) \
             AND NOT EXISTS (SELECT * FROM `b` WHERE `uid`=?) \
             OR EXISTS (SELECT * FROM `c` WHERE `uid`=?) \
             OR NOT EXISTS (SELECT * FROM `d` WHERE `uid`=?)"
        );
    }

    #[test]
    fn optional_predicates() {
        let opts = Options::new()
            .and_opt("a", None)
            .or_opt("b", Some(Expr::gt(1)));
        assert_eq!(where_of(&opts).0, "WHERE `b`>?");
    }

    #[test]
    fn ordering_is_not_deduplicated() {
        let opts = Options::new()
            .order_by("a")
            .order_by_desc("b")
            .order_by("a")
            .group_by(["x", "y"])
            .group_by(["x"]);
        assert_eq!(opts.order_by_sql(), "ORDER BY `a` ASC, `b` DESC, `a` ASC");
        assert_eq!(opts.group_by_sql(), "GROUP BY `x`, `y`, `x`");
    }

    #[test]
    fn limit_offset_zero_suppressed() {
        let opts = Options::new().limit(0).offset(5);
        assert_eq!(opts.limit_sql(), "");
        assert_eq!(opts.offset_sql(), "OFFSET 5");
    }

    #[test]
    fn force_index_replaces() {
        let opts = Options::new().force_index("a").force_index("idx_b");
        assert_eq!(opts.force_index_sql(), "FORCE INDEX (`idx_b`)");
    }

    #[test]
    fn set_list() {
        let mut params = Vec::new();
        let assignments = Assignments::new().with("c", 1).with("d", "x");
        assert_eq!(set_sql(&assignments, &mut params), "SET `c`=?, `d`=?");
        assert_eq!(params, vec![Value::Int(1), Value::from("x")]);
        assert_eq!(set_sql(&Assignments::new(), &mut params), "");
    }

    #[test]
    fn duplicate_key_update() {
        let opts = Options::new()
            .on_duplicate_key_update(Assignments::new().with("name", "tom").with("age", 5));
        let mut params = Vec::new();
        assert_eq!(
            opts.on_duplicate_key_update_sql(&mut params),
            "ON DUPLICATE KEY UPDATE `name`=?, `age`=?"
        );
        assert_eq!(params.len(), 2);
    }
}
