//! WHERE clause accumulator.
//!
//! A [`Condition`] is an ordered list of top-level [`Expression`]s. Rendering joins their
//! fragments with single spaces and drops the first connective, so the first predicate reads
//! `` `a`=? `` rather than ``AND `a`=?``.

use crate::expr::{Expression, ToSql, strip_first_op};
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    exprs: Vec<Expression>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level expression. Call order is clause order.
    pub fn append(&mut self, expr: Expression) {
        self.exprs.push(expr);
    }

    /// True when nothing would be rendered.
    pub fn is_empty(&self) -> bool {
        self.exprs.iter().all(Expression::is_empty)
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expression> {
        self.exprs.iter()
    }
}

impl ToSql for Condition {
    fn build(&self, params: &mut Vec<Value>) -> String {
        let parts: Vec<String> = self
            .exprs
            .iter()
            .map(|expr| expr.build(params))
            .filter(|sql| !sql.is_empty())
            .collect();
        if parts.is_empty() {
            return String::new();
        }
        strip_first_op(&parts.join(" ")).to_string()
    }
}

impl FromIterator<Expression> for Condition {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Self {
            exprs: iter.into_iter().collect(),
        }
    }
}
