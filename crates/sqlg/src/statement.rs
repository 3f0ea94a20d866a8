//! Generated statements.

use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// The kind of statement a [`Generator`](crate::Generator) produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SQL text with `?` placeholders plus the values to bind, in placeholder order.
///
/// An empty statement (`sql == ""`, no params) means there was nothing to do, e.g. an UPDATE
/// without assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    /// The "nothing to do" statement.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Split into `(sql, params)` for handing to a driver.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Number of `?` characters in the SQL text.
    ///
    /// Matches the parameter count for generated clauses. A `?` inside a pass-through select
    /// expression or a raw column name, such as `IFNULL(x,'?')`, is counted too.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

impl From<Statement> for (String, Vec<Value>) {
    fn from(stmt: Statement) -> Self {
        stmt.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statement() {
        let stmt = Statement::empty();
        assert!(stmt.is_empty());
        assert_eq!(stmt.placeholder_count(), 0);
        assert_eq!(stmt.into_parts(), (String::new(), vec![]));
    }

    #[test]
    fn counts_placeholders() {
        let stmt = Statement::new(
            "SELECT * FROM `t` WHERE `a`=? AND `b` IN (?,?)".to_string(),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)],
        );
        assert_eq!(stmt.placeholder_count(), stmt.params.len());
    }

    #[test]
    fn counts_question_marks_in_expressions() {
        let stmt = Statement::new(
            "SELECT IFNULL(x,'?') FROM `t` WHERE `a`=?".to_string(),
            vec![Value::Int(1)],
        );
        assert_eq!(stmt.placeholder_count(), 2);
    }

    #[test]
    fn kind_names() {
        assert_eq!(StatementKind::Select.to_string(), "select");
        assert_eq!(StatementKind::Delete.as_str(), "delete");
    }
}
