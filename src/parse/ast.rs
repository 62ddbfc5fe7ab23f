use crate::common::*;
use crate::ops::{Operator, UPoolDegenOp};
use crate::value::Value;

/// One roll of a token stream; rolls are separated by roll delimiters.
#[derive(Debug, Clone, PartialEq)]
pub enum Roll {
    /// Registers a dice map and produces no result.
    Map { name: String, map: DiceMap },
    Expr(Node),
}

/// Operator nodes remember the index of their operator token so evaluation
/// errors can point back into the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Value),
    Group(Box<Node>),
    Unary {
        op: UPoolDegenOp,
        operand: Box<Node>,
        position: usize,
    },
    Binary {
        op: Operator,
        lhs: Box<Node>,
        rhs: Box<Node>,
        position: usize,
    },
}

impl Node {
    pub fn new_literal(x: impl Into<Value>) -> Self {
        Self::Literal(x.into())
    }

    pub fn new_group(inner: Node) -> Self {
        Self::Group(Box::new(inner))
    }

    pub fn new_unary(op: UPoolDegenOp, position: usize, operand: Node) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
            position,
        }
    }

    pub fn new_binary(op: impl Into<Operator>, position: usize, lhs: Node, rhs: Node) -> Self {
        Self::Binary {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            position,
        }
    }
}
