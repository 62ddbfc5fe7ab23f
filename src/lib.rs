//! An evaluator for YADN dice notation.
//!
//! Input is an already-tokenized stream of [`Token`]s. A [`Parser`] parses
//! and evaluates it roll by roll, keeping the dice maps the stream registers
//! for later rolls and later calls.

mod common;
mod eval;
pub mod ops;
pub mod parse;
pub mod pool;
pub mod roll;
mod token;
mod value;

pub use common::{DiceMap, Int, NonEmpty, NonZeroUInt, UInt};
pub use parse::{ErrorKind, ParseError, Parser, Phase};
pub use roll::{DefaultRoller, RollContext, RollError, Roller, SeededRoller};
pub use token::{Token, TokenKind};
pub use value::{Side, Value, ValueKind};

/// Evaluates `tokens` with a fresh [`Parser`].
pub fn parse(tokens: &[Token]) -> Result<Option<Value>, ParseError> {
    Parser::new().parse(tokens)
}
