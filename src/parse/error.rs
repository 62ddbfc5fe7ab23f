use crate::common::NonEmpty;
use crate::roll::RollError;
use crate::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// Where the parser was in the current roll when an error occurred.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Nothing has been consumed yet.
    BeforeStart,
    /// A roll or group has begun and its first operand is expected.
    Started,
    /// An operand was just completed.
    Value,
    /// An operator was just consumed and its right operand is expected.
    Operator,
    /// The roll is complete.
    Ended,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeStart => "before start",
            Self::Started => "started",
            Self::Value => "value",
            Self::Operator => "operator",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("error at token {position} ({phase}): {kind}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub phase: Phase,
    /// Index of the offending token, or the stream length if it ended early.
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: impl Into<ErrorKind>, phase: Phase, position: usize) -> Self {
        Self {
            kind: kind.into(),
            phase,
            position,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    #[error(transparent)]
    Roll(#[from] RollError),
    #[error("no tokens to parse")]
    EmptyStream,
    #[error("a roll must always start with a value, a group, a dice map, or a unary pool operator")]
    BadStart,
    #[error("unexpected token: found {found}, expected {}", fmt_expected(.expected))]
    UnexpectedToken {
        found: TokenKind,
        expected: NonEmpty<TokenKind>,
    },
    #[error("unexpected end of tokens, expected {}", fmt_expected(.expected))]
    UnexpectedEnd { expected: NonEmpty<TokenKind> },
    #[error("unclosed group")]
    UnclosedGroup,
    #[error("{symbol:?} is not a known {kind}")]
    UnknownOperator { kind: TokenKind, symbol: String },
    #[error("a dice map must be the only item in its roll")]
    MapNotAlone,
}

fn fmt_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => String::new(),
        [a] => a.to_string(),
        [a, b] => format!("{} or {}", a, b),
        [rest @ .., last] => {
            let rest: Vec<_> = rest.iter().map(TokenKind::as_str).collect();
            format!("{}, or {}", rest.join(", "), last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::vec1;

    #[test]
    fn test_fmt_expected() {
        assert_eq!(fmt_expected(&[TokenKind::GroupClose]), "')'");
        assert_eq!(
            fmt_expected(&[TokenKind::Number, TokenKind::Pool]),
            "<number> or <pool>"
        );
        assert_eq!(
            fmt_expected(&[TokenKind::Number, TokenKind::Pool, TokenKind::GroupOpen]),
            "<number>, <pool>, or '('"
        );
    }

    #[test]
    fn test_messages() {
        let err = ParseError::new(ErrorKind::EmptyStream, Phase::BeforeStart, 0);
        assert_eq!(err.to_string(), "error at token 0 (before start): no tokens to parse");

        let err = ParseError::new(
            ErrorKind::UnexpectedToken {
                found: TokenKind::GroupClose,
                expected: vec1![TokenKind::Number, TokenKind::GroupOpen],
            },
            Phase::Operator,
            4,
        );
        assert_eq!(
            err.to_string(),
            "error at token 4 (operator): unexpected token: found ')', expected <number> or '('"
        );

        let err = ParseError::new(RollError::ZeroDivision, Phase::Ended, 1);
        assert_eq!(err.kind, ErrorKind::Roll(RollError::ZeroDivision));
        assert_eq!(err.to_string(), "error at token 1 (ended): cannot divide by zero");
    }
}
