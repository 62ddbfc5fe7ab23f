use crate::common::Int;
use crate::value::{Side, ValueKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("cannot take modulus by zero")]
    ZeroModulo,
    #[error("integer overflow")]
    Overflow,
    #[error("cannot raise to a negative power")]
    NegativeExponent,
    #[error("{side} operand of '{symbol}' must be {expected}, found {found}")]
    OperandType {
        symbol: String,
        side: Side,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("unknown dice map {0:?}")]
    UnknownMap(String),
    #[error("dice map {map:?} has no entry for {outcome}")]
    UnknownOutcome { map: String, outcome: Int },
    #[error("{0}")]
    ValueError(String),
}

impl RollError {
    pub fn value_error(msg: impl ToString) -> Self {
        Self::ValueError(msg.to_string())
    }

    pub(crate) fn operand(symbol: &str, side: Side, expected: ValueKind, found: ValueKind) -> Self {
        Self::OperandType {
            symbol: symbol.to_owned(),
            side,
            expected,
            found,
        }
    }
}
