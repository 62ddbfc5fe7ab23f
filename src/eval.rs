use crate::ops::Operate;
use crate::parse::ast::Node;
use crate::parse::{ParseError, Phase};
use crate::roll::{RollContext, Roller};
use crate::value::Value;

impl<R: Roller> RollContext<R> {
    /// Evaluates a parsed roll. Operands are evaluated left to right, so dice
    /// on the left of an operator are rolled first.
    pub(crate) fn eval(&mut self, node: Node) -> Result<Value, ParseError> {
        match node {
            Node::Literal(value) => Ok(value),
            Node::Group(inner) => self.eval(*inner),
            Node::Unary {
                op,
                operand,
                position,
            } => {
                let operand = self.eval(*operand)?;
                op.apply(operand)
                    .map_err(|e| ParseError::new(e, Phase::Ended, position))
            }
            Node::Binary {
                op,
                lhs,
                rhs,
                position,
            } => {
                let lhs = self.eval(*lhs)?;
                let rhs = self.eval(*rhs)?;
                let result = op
                    .apply(self, lhs, rhs)
                    .map_err(|e| ParseError::new(e, Phase::Ended, position))?;
                log::trace!("token {}: '{}' gave {}", position, op, result);
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::*;
    use crate::ops::*;
    use crate::parse::ErrorKind;
    use crate::roll::{RollError, ScriptedRoller};

    fn ctx(results: impl IntoIterator<Item = UInt>) -> RollContext<ScriptedRoller> {
        RollContext::new_unbounded(ScriptedRoller::new(results))
    }

    fn num(x: Int) -> Node {
        Node::new_literal(x)
    }

    #[test]
    fn test_eval_order() {
        // 1d6 - 1d6 rolls the left dice first.
        let node = Node::new_binary(
            AddOp::Sub,
            3,
            Node::new_binary(DiceOp::Die, 1, num(1), num(6)),
            Node::new_binary(DiceOp::Die, 5, num(1), num(6)),
        );
        assert_eq!(ctx([6, 2]).eval(node), Ok(Value::Int(4)));
    }

    #[test]
    fn test_eval_sum_of_pool() {
        let node = Node::new_unary(
            UPoolDegenOp::Sum,
            0,
            Node::new_binary(PoolGenOp::Pool, 2, num(5), num(6)),
        );
        assert_eq!(ctx([5, 4, 6, 2, 3]).eval(node), Ok(Value::Int(20)));
    }

    #[test]
    fn test_eval_error_position() {
        let node = Node::new_binary(
            AddOp::Add,
            1,
            num(1),
            Node::new_group(Node::new_binary(MulOp::Div, 4, num(3), num(0))),
        );
        assert_eq!(
            ctx([]).eval(node),
            Err(ParseError::new(
                ErrorKind::Roll(RollError::ZeroDivision),
                Phase::Ended,
                4
            ))
        );
    }
}
