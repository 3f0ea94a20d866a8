use super::{Expression, Operator, Wildcard};
use crate::value::Value;

/// A predicate waiting for its connective and column.
///
/// `Expr` values are what callers hand to [`Options`](crate::Options); the options layer decides
/// the operator and supplies the column, then calls [`Expr::bind`].
///
/// # Example
/// ```
/// use sqlg::{Expr, Operator, ToSql, Value};
///
/// let (sql, params) = Expr::gte(18).bind(Operator::And, "age").to_sql();
/// assert_eq!(sql, "AND `age`>=?");
/// assert_eq!(params, vec![Value::Int(18)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Compare { cmp: &'static str, value: Value },
    Between { lower: Value, upper: Value, negated: bool },
    InList { values: Vec<Value>, negated: bool },
    Like { value: Value, wildcard: Wildcard, negated: bool },
    NullCheck { negated: bool },
}

impl Expr {
    fn compare(cmp: &'static str, value: impl Into<Value>) -> Self {
        Expr::Compare {
            cmp,
            value: value.into(),
        }
    }

    /// `col=?`
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::compare("=", value)
    }

    /// `col!=?`
    pub fn neq(value: impl Into<Value>) -> Self {
        Self::compare("!=", value)
    }

    /// `col>?`
    pub fn gt(value: impl Into<Value>) -> Self {
        Self::compare(">", value)
    }

    /// `col>=?`
    pub fn gte(value: impl Into<Value>) -> Self {
        Self::compare(">=", value)
    }

    /// `col<?`
    pub fn lt(value: impl Into<Value>) -> Self {
        Self::compare("<", value)
    }

    /// `col<=?`
    pub fn lte(value: impl Into<Value>) -> Self {
        Self::compare("<=", value)
    }

    /// `col BETWEEN ? AND ?`
    pub fn between(lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        Expr::Between {
            lower: lower.into(),
            upper: upper.into(),
            negated: false,
        }
    }

    /// `col NOT BETWEEN ? AND ?`
    pub fn not_between(lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        Expr::Between {
            lower: lower.into(),
            upper: upper.into(),
            negated: true,
        }
    }

    /// `col IN (?,...)`. An empty list is kept and renders `IN ()`.
    pub fn in_list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Expr::InList {
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    /// `col NOT IN (?,...)`
    pub fn not_in<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Expr::InList {
            values: values.into_iter().map(Into::into).collect(),
            negated: true,
        }
    }

    fn pattern(value: impl Into<Value>, wildcard: Wildcard, negated: bool) -> Self {
        Expr::Like {
            value: value.into(),
            wildcard,
            negated,
        }
    }

    /// `col LIKE ?` bound to `%value%`
    pub fn like(value: impl Into<Value>) -> Self {
        Self::pattern(value, Wildcard::Contains, false)
    }

    /// `col NOT LIKE ?` bound to `%value%`
    pub fn not_like(value: impl Into<Value>) -> Self {
        Self::pattern(value, Wildcard::Contains, true)
    }

    /// `col LIKE ?` bound to `value%`
    pub fn like_prefix(value: impl Into<Value>) -> Self {
        Self::pattern(value, Wildcard::Prefix, false)
    }

    pub fn not_like_prefix(value: impl Into<Value>) -> Self {
        Self::pattern(value, Wildcard::Prefix, true)
    }

    /// `col LIKE ?` bound to `%value`
    pub fn like_suffix(value: impl Into<Value>) -> Self {
        Self::pattern(value, Wildcard::Suffix, false)
    }

    pub fn not_like_suffix(value: impl Into<Value>) -> Self {
        Self::pattern(value, Wildcard::Suffix, true)
    }

    /// `col IS NULL`
    pub fn is_null() -> Self {
        Expr::NullCheck { negated: false }
    }

    /// `col IS NOT NULL`
    pub fn is_not_null() -> Self {
        Expr::NullCheck { negated: true }
    }

    /// Materialize into an [`Expression`] joined by `op` on `column`.
    pub fn bind(&self, op: Operator, column: impl Into<String>) -> Expression {
        let column = column.into();
        match self {
            Expr::Compare { cmp, value } => Expression::Compare {
                op,
                column,
                cmp: *cmp,
                value: value.clone(),
            },
            Expr::Between {
                lower,
                upper,
                negated,
            } => Expression::Between {
                op,
                column,
                lower: lower.clone(),
                upper: upper.clone(),
                negated: *negated,
            },
            Expr::InList { values, negated } => Expression::InList {
                op,
                column,
                values: values.clone(),
                negated: *negated,
            },
            Expr::Like {
                value,
                wildcard,
                negated,
            } => Expression::Like {
                op,
                column,
                value: value.clone(),
                wildcard: *wildcard,
                negated: *negated,
            },
            Expr::NullCheck { negated } => Expression::NullCheck {
                op,
                column,
                negated: *negated,
            },
        }
    }
}
