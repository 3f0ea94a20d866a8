use std::fmt;

/// Logical connective that prefixes every rendered predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operator {
    #[default]
    And,
    Or,
    /// Marker connective for fragments whose leading keyword is always stripped.
    /// Renders `unknown-operator`, which is not valid SQL.
    #[doc(hidden)]
    Empty,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Empty => "unknown-operator",
        }
    }

    /// The other connective. `Empty` has no opposite.
    pub fn opposite(&self) -> Self {
        match self {
            Operator::And => Operator::Or,
            Operator::Or => Operator::And,
            Operator::Empty => Operator::Empty,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
