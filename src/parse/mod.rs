pub mod ast;
mod error;
mod parser;

pub use error::{ErrorKind, ParseError, Phase};

use crate::common::*;
use crate::roll::{DefaultRoller, RollContext, Roller, SeededRoller};
use crate::token::Token;
use crate::value::Value;
use ast::Roll;
use parser::RollParser;

/// A parsing session. Dice maps registered by one call to [`parse`](Self::parse)
/// stay visible to every later call on the same `Parser`.
pub struct Parser<R = DefaultRoller> {
    ctx: RollContext<R>,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            ctx: RollContext::default(),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<SeededRoller> {
    /// A parser whose rolls are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            ctx: RollContext::seeded(seed),
        }
    }
}

impl<R: Roller> Parser<R> {
    pub fn with_roller(roller: R) -> Self {
        Self {
            ctx: RollContext::new_unbounded(roller),
        }
    }

    /// Caps the number of physical dice a single call to `parse` may roll.
    pub fn with_max_rolls(mut self, max_rolls: usize) -> Self {
        self.ctx.set_max_rolls(Some(max_rolls));
        self
    }

    pub fn context(&self) -> &RollContext<R> {
        &self.ctx
    }

    pub fn dice_map(&self, name: &str) -> Option<&DiceMap> {
        self.ctx.maps().get(name)
    }

    pub fn register_map(&mut self, name: impl Into<String>, map: DiceMap) -> Option<DiceMap> {
        self.ctx.maps_mut().register(name, map)
    }

    /// Parses and evaluates `tokens`.
    ///
    /// Each roll is evaluated as soon as it is parsed, so a dice map is
    /// usable by every roll after it. Rolls that produce nothing are
    /// dropped: no results give `None`, one result is returned as is, and
    /// several are collected into a [`Value::Compound`] in order.
    pub fn parse(&mut self, tokens: &[Token]) -> Result<Option<Value>, ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::new(ErrorKind::EmptyStream, Phase::BeforeStart, 0));
        }
        self.ctx.reset_rolls();

        let mut parser = RollParser::new(tokens);
        let mut results = Vec::new();
        while let Some(roll) = parser.next_roll()? {
            match roll {
                Roll::Map { name, map } => {
                    self.ctx.maps_mut().register(name, map);
                }
                Roll::Expr(node) => {
                    let result = self.ctx.eval(node)?;
                    log::trace!("roll {} gave {}", results.len(), result);
                    results.push(result);
                }
            }
        }

        Ok(match results.len() {
            0 | 1 => results.pop(),
            _ => Some(Value::Compound(results)),
        })
    }
}
