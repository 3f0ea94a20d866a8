//! SELECT / INSERT / UPDATE / DELETE generation.
//!
//! A [`Generator`] pairs a table with fully built [`Options`]. Each method renders one statement
//! and never mutates the generator, so calling it twice yields byte-identical output.
//!
//! Clause order is fixed per statement kind:
//!
//! | kind   | clauses |
//! |--------|---------|
//! | SELECT | FORCE INDEX, WHERE, GROUP BY, ORDER BY, LIMIT, OFFSET, FOR UPDATE |
//! | UPDATE | SET, WHERE, ORDER BY, LIMIT, OFFSET |
//! | DELETE | WHERE, ORDER BY, LIMIT, OFFSET |
//! | INSERT | VALUES rows + ON DUPLICATE KEY UPDATE, or `SELECT ... FROM dual` + WHERE |

use crate::columns::Columns;
use crate::error::{SqlgError, SqlgResult};
use crate::expr::placeholders;
use crate::ident::{join_safe_names, safe_name};
use crate::options::{Options, set_sql};
use crate::ordered::Assignments;
use crate::statement::{Statement, StatementKind};
use crate::trace;
use crate::value::Value;

/// Statement generator for one table.
///
/// # Example
/// ```
/// use sqlg::{Expr, Generator, Options};
///
/// let g = Generator::new("user", Options::new().and("id", Expr::eq(1)).limit(1));
/// let stmt = g.delete();
/// assert_eq!(stmt.sql, "DELETE FROM `user` WHERE `id`=? LIMIT 1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    table: String,
    options: Options,
}

impl Generator {
    pub fn new(table: impl Into<String>, options: Options) -> Self {
        Self {
            table: table.into(),
            options,
        }
    }

    /// Generator with default options.
    pub fn table(table: impl Into<String>) -> Self {
        Self::new(table, Options::default())
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// `SELECT cols FROM table ...`. No columns selects `*`.
    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Statement {
        let opts = &self.options;
        let mut params = Vec::new();

        let cols = if columns.is_empty() {
            "*".to_string()
        } else {
            join_safe_names(columns)
        };
        let mut sql = format!("SELECT {} FROM {}", cols, safe_name(&self.table));
        push_clause(&mut sql, opts.force_index_sql());
        push_clause(&mut sql, opts.where_sql(&mut params));
        push_clause(&mut sql, opts.group_by_sql());
        push_clause(&mut sql, opts.order_by_sql());
        push_clause(&mut sql, opts.limit_sql());
        push_clause(&mut sql, opts.offset_sql());
        push_clause(&mut sql, opts.for_update_sql());

        self.finish(StatementKind::Select, sql, params)
    }

    /// [`select`](Self::select) with the columns of `T`.
    ///
    /// `target` only has to be present; its field values are not read.
    pub fn select_by_struct<T: Columns>(&self, target: Option<&T>) -> SqlgResult<Statement> {
        if target.is_none() {
            trace::skipped(StatementKind::Select, &self.table, "no target record");
            return Err(SqlgError::empty_target());
        }
        Ok(self.select_as::<T>())
    }

    /// [`select`](Self::select) with the columns of `T`.
    pub fn select_as<T: Columns>(&self) -> Statement {
        self.select(T::columns().as_slice())
    }

    /// `UPDATE table SET ...`. Nothing to assign yields an empty statement.
    pub fn update<'a>(&self, assignments: impl Into<Option<&'a Assignments>>) -> Statement {
        let assignments = match assignments.into() {
            Some(a) if !a.is_empty() => a,
            _ => {
                trace::skipped(StatementKind::Update, &self.table, "no assignments");
                return Statement::empty();
            }
        };

        let opts = &self.options;
        let mut params = Vec::new();
        let mut sql = format!("UPDATE {}", safe_name(&self.table));
        push_clause(&mut sql, set_sql(assignments, &mut params));
        push_clause(&mut sql, opts.where_sql(&mut params));
        push_clause(&mut sql, opts.order_by_sql());
        push_clause(&mut sql, opts.limit_sql());
        push_clause(&mut sql, opts.offset_sql());

        self.finish(StatementKind::Update, sql, params)
    }

    /// `DELETE FROM table ...`
    pub fn delete(&self) -> Statement {
        let opts = &self.options;
        let mut params = Vec::new();
        let mut sql = format!("DELETE FROM {}", safe_name(&self.table));
        push_clause(&mut sql, opts.where_sql(&mut params));
        push_clause(&mut sql, opts.order_by_sql());
        push_clause(&mut sql, opts.limit_sql());
        push_clause(&mut sql, opts.offset_sql());

        self.finish(StatementKind::Delete, sql, params)
    }

    /// `INSERT INTO table (cols) ...`
    ///
    /// Without a WHERE condition every record becomes a `VALUES` row and the options'
    /// duplicate-key assignments are appended. With a WHERE condition only the first record is
    /// inserted, as `SELECT ?,... FROM dual WHERE ...`.
    ///
    /// No columns, no records, or an empty record that would be inserted yields an empty
    /// statement. Records past the first are never checked in the conditional form.
    pub fn insert<S: AsRef<str>>(&self, columns: &[S], records: &[Vec<Value>]) -> Statement {
        let Some(first) = records.first() else {
            trace::skipped(StatementKind::Insert, &self.table, "no columns or records");
            return Statement::empty();
        };
        if columns.is_empty() {
            trace::skipped(StatementKind::Insert, &self.table, "no columns or records");
            return Statement::empty();
        }

        if self.options.has_where() {
            if first.is_empty() {
                trace::skipped(StatementKind::Insert, &self.table, "empty record");
                return Statement::empty();
            }
            self.insert_select(columns, first)
        } else {
            if records.iter().any(Vec::is_empty) {
                trace::skipped(StatementKind::Insert, &self.table, "empty record");
                return Statement::empty();
            }
            self.insert_values(columns, records)
        }
    }

    fn insert_values<S: AsRef<str>>(&self, columns: &[S], records: &[Vec<Value>]) -> Statement {
        let rows: Vec<String> = records
            .iter()
            .map(|record| format!("({})", placeholders(record.len())))
            .collect();
        let mut params: Vec<Value> = records.iter().flatten().cloned().collect();

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            safe_name(&self.table),
            join_safe_names(columns),
            rows.join(", ")
        );
        push_clause(&mut sql, self.options.on_duplicate_key_update_sql(&mut params));

        self.finish(StatementKind::Insert, sql, params)
    }

    fn insert_select<S: AsRef<str>>(&self, columns: &[S], record: &[Value]) -> Statement {
        let mut params = record.to_vec();
        let mut sql = format!(
            "INSERT INTO {} ({}) SELECT {} FROM dual",
            safe_name(&self.table),
            join_safe_names(columns),
            placeholders(record.len())
        );
        push_clause(&mut sql, self.options.where_sql(&mut params));

        self.finish(StatementKind::Insert, sql, params)
    }

    fn finish(&self, kind: StatementKind, sql: String, params: Vec<Value>) -> Statement {
        let stmt = Statement::new(sql, params);
        trace::statement(kind, &self.table, &stmt);
        stmt
    }
}

/// Append ` clause` when the clause is non-empty.
fn push_clause(sql: &mut String, clause: String) {
    if !clause.is_empty() {
        sql.push(' ');
        sql.push_str(&clause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expr;
    use crate::ordered::CompExprs;

    #[test]
    fn select_defaults_to_star() {
        let stmt = Generator::table("user").select::<&str>(&[]);
        assert_eq!(stmt.sql, "SELECT * FROM `user`");
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn select_passes_expressions_through() {
        let stmt = Generator::table("user").select(&["COUNT(id)", "name"]);
        assert_eq!(stmt.sql, "SELECT COUNT(id), `name` FROM `user`");
    }

    #[test]
    fn update_without_assignments_is_empty() {
        let g = Generator::new("user", Options::new().and("id", Expr::eq(1)));
        assert!(g.update(&Assignments::new()).is_empty());
        let unset: Option<&Assignments> = None;
        assert!(g.update(unset).is_empty());
    }

    #[test]
    fn update_params_set_then_where() {
        let g = Generator::new("user", Options::new().and("id", Expr::eq(9)));
        let stmt = g.update(&Assignments::new().with("name", "tom"));
        assert_eq!(stmt.sql, "UPDATE `user` SET `name`=? WHERE `id`=?");
        assert_eq!(stmt.params, vec![Value::from("tom"), Value::Int(9)]);
    }

    #[test]
    fn update_ignores_select_only_clauses() {
        let g = Generator::new(
            "user",
            Options::new()
                .force_index("idx")
                .group_by(["a"])
                .for_update()
                .order_by("id")
                .limit(2),
        );
        let stmt = g.update(&Assignments::new().with("a", 1));
        assert_eq!(stmt.sql, "UPDATE `user` SET `a`=? ORDER BY `id` ASC LIMIT 2");
    }

    #[test]
    fn delete_without_where() {
        let stmt = Generator::table("user").delete();
        assert_eq!(stmt.sql, "DELETE FROM `user`");
    }

    #[test]
    fn insert_multiple_rows() {
        let stmt = Generator::table("user").insert(
            &["name", "age"],
            &[
                vec!["tom".into(), 5.into()],
                vec!["ann".into(), 7.into()],
            ],
        );
        assert_eq!(
            stmt.sql,
            "INSERT INTO `user` (`name`, `age`) VALUES (?,?), (?,?)"
        );
        assert_eq!(
            stmt.params,
            vec![
                Value::from("tom"),
                Value::Int(5),
                Value::from("ann"),
                Value::Int(7)
            ]
        );
    }

    #[test]
    fn insert_empty_inputs() {
        let g = Generator::table("user");
        assert!(g.insert::<&str>(&[], &[vec![1.into()]]).is_empty());
        assert!(g.insert(&["a"], &[]).is_empty());
        assert!(g.insert(&["a"], &[vec![]]).is_empty());
    }

    #[test]
    fn conditional_insert_uses_first_record_only() {
        let g = Generator::new(
            "user",
            Options::new().not_exists("user", CompExprs::new().with("name", Expr::eq("tom"))),
        );
        let stmt = g.insert(&["name"], &[vec!["tom".into()], vec!["ann".into()]]);
        assert_eq!(
            stmt.sql,
            "INSERT INTO `user` (`name`) SELECT ? FROM dual \
             WHERE NOT EXISTS (SELECT * FROM `user` WHERE `name`=?)"
        );
        assert_eq!(stmt.params, vec![Value::from("tom"), Value::from("tom")]);
    }

    #[test]
    fn conditional_insert_ignores_duplicate_key_update() {
        let g = Generator::new(
            "t",
            Options::new()
                .and("a", Expr::eq(1))
                .on_duplicate_key_update(Assignments::new().with("a", 2)),
        );
        let stmt = g.insert(&["a"], &[vec![3.into()]]);
        assert_eq!(stmt.sql, "INSERT INTO `t` (`a`) SELECT ? FROM dual WHERE `a`=?");
        assert_eq!(stmt.placeholder_count(), stmt.params.len());
    }

    #[test]
    fn select_by_struct_requires_target() {
        struct Row;
        impl Columns for Row {
            fn columns() -> Vec<String> {
                vec!["id".into()]
            }
        }

        let g = Generator::table("t");
        let err = g.select_by_struct::<Row>(None).unwrap_err();
        assert!(err.is_empty_target());

        let stmt = g.select_by_struct(Some(&Row)).unwrap();
        assert_eq!(stmt.sql, "SELECT `id` FROM `t`");
        assert_eq!(g.select_as::<Row>(), stmt);
    }
}
