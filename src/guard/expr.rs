//! Guard expression syntax tree.

use crate::guard::error::GuardError;
use crate::guard::parser::parse_guard;
use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

/// Parsed guard expression.
///
/// `And` and `Or` always hold at least two operands. `Parenthesized` records
/// grouping written in the source so that rendering reproduces it exactly.
///
/// # Example
///
/// ```rust
/// use statechart::guard::{parse_guard, GuardExpr};
///
/// let expr = parse_guard("x or (not y and z)").unwrap();
/// assert_eq!(expr.to_string(), "x or (not y and z)");
///
/// let names: Vec<String> = expr.condition_names().into_iter().collect();
/// assert_eq!(names, ["x", "y", "z"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GuardExpr {
    Condition(String),
    Not(Box<GuardExpr>),
    And(Vec<GuardExpr>),
    Or(Vec<GuardExpr>),
    Parenthesized(Box<GuardExpr>),
}

impl GuardExpr {
    pub fn condition(name: impl Into<String>) -> Self {
        Self::Condition(name.into())
    }

    pub fn not(inner: GuardExpr) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn parenthesized(inner: GuardExpr) -> Self {
        Self::Parenthesized(Box::new(inner))
    }

    /// Condition names referenced by this expression.
    ///
    /// Names appear in depth-first, left-to-right order of first occurrence.
    pub fn condition_names(&self) -> IndexSet<String> {
        let mut names = IndexSet::new();
        self.visit_conditions(&mut |name| {
            names.insert(name.to_string());
        });
        names
    }

    fn visit_conditions<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Self::Condition(name) => f(name),
            Self::Not(inner) | Self::Parenthesized(inner) => inner.visit_conditions(f),
            Self::And(operands) | Self::Or(operands) => {
                for operand in operands {
                    operand.visit_conditions(f);
                }
            }
        }
    }

    pub fn is_condition(&self) -> bool {
        matches!(self, Self::Condition(_))
    }

    /// The condition name, if this is a bare condition leaf.
    pub fn as_condition(&self) -> Option<&str> {
        match self {
            Self::Condition(name) => Some(name),
            _ => None,
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, operands: &[GuardExpr], sep: &str) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{operand}")?;
    }
    Ok(())
}

impl fmt::Display for GuardExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condition(name) => f.write_str(name),
            Self::Not(inner) => write!(f, "not {inner}"),
            Self::And(operands) => write_joined(f, operands, " and "),
            Self::Or(operands) => write_joined(f, operands, " or "),
            Self::Parenthesized(inner) => write!(f, "({inner})"),
        }
    }
}

impl FromStr for GuardExpr {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_guard(s)
    }
}
