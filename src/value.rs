use crate::common::*;
use crate::roll::{RResult, RollError};
use std::fmt;

/// The result of evaluating dice notation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Value {
    Int(Int),
    Bool(bool),
    /// Individual die values in roll order.
    Pool(Vec<Int>),
    Qualifier(String),
    /// A tuple of qualifiers: choice options, or a pool mapped through a dice map.
    Qualifiers(Vec<String>),
    /// The results of several rolls separated by roll delimiters.
    Compound(Vec<Value>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
            Self::Pool(_) => ValueKind::Pool,
            Self::Qualifier(_) => ValueKind::Qualifier,
            Self::Qualifiers(_) => ValueKind::Qualifiers,
            Self::Compound(_) => ValueKind::Compound,
        }
    }

    pub(crate) fn into_int(self, symbol: &str, side: Side) -> RResult<Int> {
        match self {
            Self::Int(x) => Ok(x),
            other => Err(RollError::operand(symbol, side, ValueKind::Int, other.kind())),
        }
    }

    pub(crate) fn into_bool(self, symbol: &str, side: Side) -> RResult<bool> {
        match self {
            Self::Bool(x) => Ok(x),
            other => Err(RollError::operand(symbol, side, ValueKind::Bool, other.kind())),
        }
    }

    pub(crate) fn into_pool(self, symbol: &str, side: Side) -> RResult<Vec<Int>> {
        match self {
            Self::Pool(x) => Ok(x),
            other => Err(RollError::operand(symbol, side, ValueKind::Pool, other.kind())),
        }
    }

    pub(crate) fn into_qualifier(self, symbol: &str, side: Side) -> RResult<String> {
        match self {
            Self::Qualifier(x) => Ok(x),
            other => Err(RollError::operand(
                symbol,
                side,
                ValueKind::Qualifier,
                other.kind(),
            )),
        }
    }

    pub(crate) fn into_qualifiers(self, symbol: &str, side: Side) -> RResult<Vec<String>> {
        match self {
            Self::Qualifiers(x) => Ok(x),
            other => Err(RollError::operand(
                symbol,
                side,
                ValueKind::Qualifiers,
                other.kind(),
            )),
        }
    }
}

impl From<Int> for Value {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Self::Bool(x)
    }
}

impl From<Vec<Int>> for Value {
    fn from(x: Vec<Int>) -> Self {
        Self::Pool(x)
    }
}

impl From<String> for Value {
    fn from(x: String) -> Self {
        Self::Qualifier(x)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Self::Qualifier(x.to_owned())
    }
}

fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(item, f)?;
    }
    f.write_str(")")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Bool(x) => fmt::Display::fmt(x, f),
            Self::Pool(xs) => write_tuple(f, xs),
            Self::Qualifier(s) => f.write_str(s),
            Self::Qualifiers(xs) => write_tuple(f, xs),
            Self::Compound(xs) => {
                f.write_str("[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    fmt::Display::fmt(x, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Int,
    Bool,
    Pool,
    Qualifier,
    Qualifiers,
    Compound,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Int => "a number",
            Self::Bool => "a boolean",
            Self::Pool => "a pool",
            Self::Qualifier => "a qualifier",
            Self::Qualifiers => "a tuple of qualifiers",
            Self::Compound => "a compound result",
        };
        f.write_str(s)
    }
}

/// Which operand of an operator a value was bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(5).to_string(), "5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Pool(vec![1, 5, 3]).to_string(), "(1, 5, 3)");
        assert_eq!(Value::Pool(vec![]).to_string(), "()");
        assert_eq!(Value::from("success").to_string(), "success");
        assert_eq!(
            Value::Qualifiers(vec!["success".into(), "none".into()]).to_string(),
            "(success, none)"
        );
        assert_eq!(
            Value::Compound(vec![Value::Pool(vec![1, 1, 3]), Value::Int(10)]).to_string(),
            "[(1, 1, 3); 10]"
        );
    }

    #[test]
    fn test_operand_extraction() {
        assert_eq!(Value::Int(3).into_int("+", Side::Left), Ok(3));
        assert_eq!(
            Value::Pool(vec![1]).into_int(">", Side::Right),
            Err(RollError::OperandType {
                symbol: ">".into(),
                side: Side::Right,
                expected: ValueKind::Int,
                found: ValueKind::Pool,
            })
        );
        assert_eq!(
            Value::Int(1).into_pool("pa", Side::Left).unwrap_err().to_string(),
            "left operand of 'pa' must be a pool, found a number"
        );
    }
}
