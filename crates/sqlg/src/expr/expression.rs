use super::Operator;
use crate::ident::safe_name;
use crate::value::Value;

/// Anything that renders to a SQL fragment plus the parameters it binds.
pub trait ToSql {
    /// Render into `params`, returning the fragment. Parameters are appended in placeholder order.
    fn build(&self, params: &mut Vec<Value>) -> String;

    /// Render into a fresh parameter list.
    fn to_sql(&self) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let sql = self.build(&mut params);
        (sql, params)
    }
}

/// Wildcard placement for LIKE patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `%value%`
    Contains,
    /// `value%`
    Prefix,
    /// `%value`
    Suffix,
}

impl Wildcard {
    /// Apply the pattern template to the display form of `value`.
    pub fn apply(&self, value: &Value) -> String {
        match self {
            Wildcard::Contains => format!("%{value}%"),
            Wildcard::Prefix => format!("{value}%"),
            Wildcard::Suffix => format!("%{value}"),
        }
    }
}

/// A predicate bound to a connective and (for leaf variants) a column.
///
/// Every non-empty fragment starts with its connective keyword, e.g. ``AND `id`=?``.
/// Groups strip the keyword of their first child before wrapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `op col<cmp>?` for `=`, `!=`, `>`, `>=`, `<`, `<=`.
    Compare {
        op: Operator,
        column: String,
        cmp: &'static str,
        value: Value,
    },

    /// `op col [NOT ]BETWEEN ? AND ?`. Bounds are bound as given.
    Between {
        op: Operator,
        column: String,
        lower: Value,
        upper: Value,
        negated: bool,
    },

    /// `op col [NOT ]IN (?,?,...)`. An empty list renders `IN ()`.
    InList {
        op: Operator,
        column: String,
        values: Vec<Value>,
        negated: bool,
    },

    /// `op col [NOT ]LIKE ?`, binding the wildcarded text.
    Like {
        op: Operator,
        column: String,
        value: Value,
        wildcard: Wildcard,
        negated: bool,
    },

    /// `op col IS [NOT ]NULL`
    NullCheck {
        op: Operator,
        column: String,
        negated: bool,
    },

    /// `op (a OP b ...)`, or `op a` for a single child. Empty children are dropped.
    Compound { op: Operator, children: Vec<Expression> },

    /// `op [NOT ]EXISTS (SELECT * FROM table WHERE ...)`
    Exists {
        op: Operator,
        table: String,
        children: Vec<Expression>,
        negated: bool,
    },
}

impl Expression {
    /// Group `children` under `op`.
    pub fn compound(op: Operator, children: Vec<Expression>) -> Self {
        Expression::Compound { op, children }
    }

    /// Existence sub-query over `table`, filtered by `children`.
    pub fn exists(op: Operator, table: impl Into<String>, children: Vec<Expression>) -> Self {
        Expression::Exists {
            op,
            table: table.into(),
            children,
            negated: false,
        }
    }

    pub fn not_exists(op: Operator, table: impl Into<String>, children: Vec<Expression>) -> Self {
        Expression::Exists {
            op,
            table: table.into(),
            children,
            negated: true,
        }
    }

    /// The leading connective.
    pub fn operator(&self) -> Operator {
        match self {
            Expression::Compare { op, .. }
            | Expression::Between { op, .. }
            | Expression::InList { op, .. }
            | Expression::Like { op, .. }
            | Expression::NullCheck { op, .. }
            | Expression::Compound { op, .. }
            | Expression::Exists { op, .. } => *op,
        }
    }

    /// Whether this expression renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Expression::Compound { children, .. } => children.iter().all(Expression::is_empty),
            Expression::Exists { table, children, .. } => {
                table.is_empty() || children.iter().all(Expression::is_empty)
            }
            _ => false,
        }
    }
}

impl ToSql for Expression {
    fn build(&self, params: &mut Vec<Value>) -> String {
        match self {
            Expression::Compare {
                op,
                column,
                cmp,
                value,
            } => {
                params.push(value.clone());
                format!("{} {}{}?", op, safe_name(column), cmp)
            }
            Expression::Between {
                op,
                column,
                lower,
                upper,
                negated,
            } => {
                params.push(lower.clone());
                params.push(upper.clone());
                format!("{} {} {}BETWEEN ? AND ?", op, safe_name(column), not(*negated))
            }
            Expression::InList {
                op,
                column,
                values,
                negated,
            } => {
                params.extend(values.iter().cloned());
                format!(
                    "{} {} {}IN ({})",
                    op,
                    safe_name(column),
                    not(*negated),
                    placeholders(values.len())
                )
            }
            Expression::Like {
                op,
                column,
                value,
                wildcard,
                negated,
            } => {
                params.push(Value::Text(wildcard.apply(value)));
                format!("{} {} {}LIKE ?", op, safe_name(column), not(*negated))
            }
            Expression::NullCheck {
                op,
                column,
                negated,
            } => format!("{} {} IS {}NULL", op, safe_name(column), not(*negated)),
            Expression::Compound { op, children } => {
                let parts = build_children(children, params);
                match parts.len() {
                    0 => String::new(),
                    1 => format!("{} {}", op, strip_first_op(&parts[0])),
                    _ => format!("{} ({})", op, strip_first_op(&parts.join(" "))),
                }
            }
            Expression::Exists {
                op,
                table,
                children,
                negated,
            } => {
                if table.is_empty() {
                    return String::new();
                }
                let parts = build_children(children, params);
                if parts.is_empty() {
                    return String::new();
                }
                format!(
                    "{} {}EXISTS (SELECT * FROM {} WHERE {})",
                    op,
                    not(*negated),
                    safe_name(table),
                    strip_first_op(&parts.join(" "))
                )
            }
        }
    }
}

/// An unset expression renders to nothing.
impl ToSql for Option<Expression> {
    fn build(&self, params: &mut Vec<Value>) -> String {
        match self {
            Some(expr) => expr.build(params),
            None => String::new(),
        }
    }
}

fn build_children(children: &[Expression], params: &mut Vec<Value>) -> Vec<String> {
    children
        .iter()
        .map(|child| child.build(params))
        .filter(|sql| !sql.is_empty())
        .collect()
}

fn not(negated: bool) -> &'static str {
    if negated { "NOT " } else { "" }
}

/// `?,?,?` for `n` values; empty for zero.
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

/// Drop the leading connective keyword of a rendered fragment.
pub(crate) fn strip_first_op(sql: &str) -> &str {
    let sql = sql.trim();
    match sql.find(' ') {
        Some(idx) => &sql[idx + 1..],
        None => sql,
    }
}
