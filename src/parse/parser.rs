use super::ast::*;
use super::error::{ErrorKind, ParseError, Phase};
use crate::common::*;
use crate::ops::{Operator, UPoolDegenOp};
use crate::token::{Token, TokenKind};

pub(crate) type PResult<T = Node> = Result<T, ParseError>;

/// Recursive-descent parser over a token stream, handing out one roll at a
/// time so each can be evaluated before the next is read.
pub(crate) struct RollParser<'t> {
    tokens: &'t [Token],
    pos: usize,
    phase: Phase,
}

impl<'t> RollParser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            phase: Phase::BeforeStart,
        }
    }

    /// Operand starts other than a dice map, which may only open a roll.
    fn operands() -> NonEmpty<TokenKind> {
        let [first, rest @ ..] = TokenKind::OPERAND_STARTS;
        let mut kinds = vec1![first];
        for kind in rest {
            if kind != TokenKind::Map {
                kinds.push(kind);
            }
        }
        kinds
    }

    fn continuations() -> NonEmpty<TokenKind> {
        let [first, rest @ ..] = TokenKind::CONTINUATIONS;
        let mut kinds = vec1![first];
        for kind in rest {
            kinds.push(kind);
        }
        kinds
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn matches(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |token| token.kind() == kind)
    }

    fn error<T>(&self, kind: impl Into<ErrorKind>) -> PResult<T> {
        Err(ParseError::new(kind, self.phase, self.pos))
    }

    /// Reports whatever sits at the cursor as not being one of `expected`.
    fn unexpected<T>(&self, expected: NonEmpty<TokenKind>) -> PResult<T> {
        match self.peek() {
            Some(token) => self.error(ErrorKind::UnexpectedToken {
                found: token.kind(),
                expected,
            }),
            None => self.error(ErrorKind::UnexpectedEnd { expected }),
        }
    }

    /// Parses the next non-empty roll, consuming its trailing delimiter.
    pub fn next_roll(&mut self) -> PResult<Option<Roll>> {
        while self.matches(TokenKind::RollDelimiter) {
            self.advance();
            self.phase = Phase::Started;
        }
        let first = match self.peek() {
            Some(token) => token,
            None => return Ok(None),
        };
        if !first.kind().is_operand_start() {
            return self.error(ErrorKind::BadStart);
        }

        let roll = if let Token::Map(name, map) = first {
            self.advance();
            self.phase = Phase::Ended;
            if !(self.peek().is_none() || self.matches(TokenKind::RollDelimiter)) {
                return self.error(ErrorKind::MapNotAlone);
            }
            Roll::Map {
                name: name.clone(),
                map: map.clone(),
            }
        } else {
            self.phase = Phase::Started;
            Roll::Expr(self.parse_node()?)
        };

        if self.matches(TokenKind::RollDelimiter) {
            self.advance();
            self.phase = Phase::Started;
        } else if self.peek().is_some() {
            return self.unexpected(Self::continuations());
        } else {
            self.phase = Phase::Ended;
        }
        Ok(Some(roll))
    }

    fn parse_node(&mut self) -> PResult {
        self.parse_mapping()
    }

    fn parse_operator(&mut self, kind: TokenKind) -> PResult<(Operator, usize)> {
        let position = self.pos;
        let token = match self.advance() {
            Some(token) => token,
            None => return self.unexpected(vec1![kind]),
        };
        let symbol = token.symbol().unwrap_or_default();
        match Operator::lookup(token.kind(), symbol) {
            Some(op) => {
                self.phase = Phase::Operator;
                Ok((op, position))
            }
            None => Err(ParseError::new(
                ErrorKind::UnknownOperator {
                    kind: token.kind(),
                    symbol: symbol.to_owned(),
                },
                self.phase,
                position,
            )),
        }
    }

    /// Folds a left-associative chain of `kind` operators over operands
    /// parsed by `operand`.
    fn parse_left_assoc(&mut self, kind: TokenKind, operand: fn(&mut Self) -> PResult) -> PResult {
        let mut lhs = operand(self)?;

        while self.matches(kind) {
            let (op, position) = self.parse_operator(kind)?;
            let rhs = operand(self)?;

            lhs = Node::new_binary(op, position, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_mapping(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::MappingOperator, Self::parse_choice)
    }

    fn parse_choice(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::ChoiceOperator, Self::parse_options)
    }

    fn parse_options(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::OptionsOperator, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::ComparisonOperator, Self::parse_addition)
    }

    fn parse_addition(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::AsOperator, Self::parse_multiplication)
    }

    fn parse_multiplication(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::MdOperator, Self::parse_exponent)
    }

    fn parse_exponent(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::ExOperator, Self::parse_dice)
    }

    fn parse_dice(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::DiceOperator, Self::parse_pool_degen)
    }

    fn parse_pool_degen(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::PoolDegenOperator, Self::parse_unary_pool_degen)
    }

    /// A prefix pool degeneration applies to everything the pool levels
    /// below it produce, so `S 5g6` sums the generated pool.
    fn parse_unary_pool_degen(&mut self) -> PResult {
        let position = self.pos;
        let op = match self.peek() {
            Some(Token::UPoolDegenOperator(symbol)) => match UPoolDegenOp::from_symbol(symbol) {
                Some(op) => op,
                None => {
                    return self.error(ErrorKind::UnknownOperator {
                        kind: TokenKind::UPoolDegenOperator,
                        symbol: symbol.clone(),
                    })
                }
            },
            _ => return self.parse_pool(),
        };
        self.advance();
        self.phase = Phase::Operator;

        let operand = self.parse_unary_pool_degen()?;
        Ok(Node::new_unary(op, position, operand))
    }

    fn parse_pool(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::PoolOperator, Self::parse_pool_gen)
    }

    fn parse_pool_gen(&mut self) -> PResult {
        self.parse_left_assoc(TokenKind::PoolGenOperator, Self::parse_primary)
    }

    fn parse_primary(&mut self) -> PResult {
        let node = match self.peek() {
            Some(Token::Number(x)) => Node::new_literal(*x),
            Some(Token::Boolean(x)) => Node::new_literal(*x),
            Some(Token::Pool(xs)) => Node::new_literal(xs.clone()),
            Some(Token::Qualifier(s)) => Node::new_literal(s.clone()),
            Some(Token::GroupOpen) => return self.parse_group(),
            Some(Token::Map(..)) => return self.error(ErrorKind::MapNotAlone),
            _ => return self.unexpected(Self::operands()),
        };
        self.advance();
        self.phase = Phase::Value;
        Ok(node)
    }

    fn parse_group(&mut self) -> PResult {
        let open = self.pos;
        self.advance();
        self.phase = Phase::Started;

        let inner = self.parse_node()?;
        if self.matches(TokenKind::GroupClose) {
            self.advance();
            self.phase = Phase::Value;
            Ok(Node::new_group(inner))
        } else if self.peek().is_none() {
            Err(ParseError::new(ErrorKind::UnclosedGroup, self.phase, open))
        } else {
            self.unexpected(vec1![TokenKind::GroupClose])
        }
    }
}
