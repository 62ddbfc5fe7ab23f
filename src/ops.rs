//! The operator registry. Every syntactic operator class has its own enum,
//! and a symbol is only meaningful within the class its token names.

use crate::common::*;
use crate::pool;
use crate::roll::{RResult, RollContext, RollError, Roller};
use crate::token::TokenKind;
use crate::value::{Side::*, Value, ValueKind};
use std::fmt;

macro_rules! operator_class {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $sym:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn from_symbol(symbol: &str) -> Option<Self> {
                match symbol {
                    $($sym => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $sym),+
                }
            }
        }

        impl Symbol for $name {
            fn symbol(&self) -> &'static str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operator_class!(AddOp { Add => "+", Sub => "-" });
operator_class!(MulOp { Mul => "*", Div => "/", Mod => "%" });
operator_class!(PowOp { Pow => "^" });
operator_class!(CompareOp {
    Gt => ">",
    Lt => "<",
    Ge => ">=",
    Le => "<=",
    Eq => "==",
    Ne => "!=",
});
operator_class!(
    /// Pairs two qualifiers into the options of a choice.
    OptionsOp { Options => ":" }
);
operator_class!(ChoiceOp { Choice => "?" });
operator_class!(DiceOp {
    Die => "d",
    Exploding => "d!",
    KeepHigh => "dh",
    KeepLow => "dl",
    Wild => "dw",
    Concat => "dc",
});
operator_class!(PoolGenOp { Pool => "g", ExplodingPool => "g!" });
operator_class!(PoolOp {
    KeepAbove => "pa",
    KeepBelow => "pb",
    Cap => "pc",
    Floor => "pf",
    KeepHigh => "ph",
    KeepLow => "pl",
    Modulo => "p%",
    Remove => "pr",
});
operator_class!(PoolDegenOp { CountSuccesses => "ns", CountSuccessesWithBotch => "nb" });
operator_class!(
    /// Prefix operators reducing a pool to a number.
    UPoolDegenOp { Concatenate => "C", Count => "N", Sum => "S" }
);
operator_class!(MappingOp { Map => "m" });

#[enum_dispatch::enum_dispatch]
pub trait Symbol {
    fn symbol(&self) -> &'static str;
}

#[enum_dispatch::enum_dispatch]
pub trait Operate {
    fn apply<R: Roller>(&self, ctx: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value>;
}

/// Any binary operator, tagged by its syntactic class.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Operate, Symbol)]
pub enum Operator {
    Add(AddOp),
    Mul(MulOp),
    Pow(PowOp),
    Compare(CompareOp),
    Options(OptionsOp),
    Choice(ChoiceOp),
    Dice(DiceOp),
    PoolGen(PoolGenOp),
    Pool(PoolOp),
    PoolDegen(PoolDegenOp),
    Mapping(MappingOp),
}

impl Operator {
    /// Resolves `symbol` within the binary operator class named by `kind`.
    pub fn lookup(kind: TokenKind, symbol: &str) -> Option<Self> {
        match kind {
            TokenKind::AsOperator => AddOp::from_symbol(symbol).map(Self::Add),
            TokenKind::MdOperator => MulOp::from_symbol(symbol).map(Self::Mul),
            TokenKind::ExOperator => PowOp::from_symbol(symbol).map(Self::Pow),
            TokenKind::ComparisonOperator => CompareOp::from_symbol(symbol).map(Self::Compare),
            TokenKind::OptionsOperator => OptionsOp::from_symbol(symbol).map(Self::Options),
            TokenKind::ChoiceOperator => ChoiceOp::from_symbol(symbol).map(Self::Choice),
            TokenKind::DiceOperator => DiceOp::from_symbol(symbol).map(Self::Dice),
            TokenKind::PoolGenOperator => PoolGenOp::from_symbol(symbol).map(Self::PoolGen),
            TokenKind::PoolOperator => PoolOp::from_symbol(symbol).map(Self::Pool),
            TokenKind::PoolDegenOperator => PoolDegenOp::from_symbol(symbol).map(Self::PoolDegen),
            TokenKind::MappingOperator => MappingOp::from_symbol(symbol).map(Self::Mapping),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn ints(symbol: &str, lhs: Value, rhs: Value) -> RResult<(Int, Int)> {
    Ok((lhs.into_int(symbol, Left)?, rhs.into_int(symbol, Right)?))
}

fn pool_and_int(symbol: &str, lhs: Value, rhs: Value) -> RResult<(Vec<Int>, Int)> {
    Ok((lhs.into_pool(symbol, Left)?, rhs.into_int(symbol, Right)?))
}

impl Operate for AddOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (a, b) = ints(self.as_str(), lhs, rhs)?;
        let result = match self {
            Self::Add => a.checked_add(b),
            Self::Sub => a.checked_sub(b),
        };
        result.map(Value::Int).ok_or(RollError::Overflow)
    }
}

impl Operate for MulOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (a, b) = ints(self.as_str(), lhs, rhs)?;
        let result = match self {
            Self::Mul => a.checked_mul(b).ok_or(RollError::Overflow),
            Self::Div => pool::floor_div(a, b),
            Self::Mod => pool::floor_mod(a, b),
        };
        result.map(Value::Int)
    }
}

impl Operate for PowOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (base, exp) = ints(self.as_str(), lhs, rhs)?;
        if exp < 0 {
            return Err(RollError::NegativeExponent);
        }
        let result = match base {
            1 => Some(1),
            0 => Some(if exp == 0 { 1 } else { 0 }),
            -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
            _ => u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)),
        };
        result.map(Value::Int).ok_or(RollError::Overflow)
    }
}

impl Operate for CompareOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (a, b) = ints(self.as_str(), lhs, rhs)?;
        Ok(Value::Bool(match self {
            Self::Gt => a > b,
            Self::Lt => a < b,
            Self::Ge => a >= b,
            Self::Le => a <= b,
            Self::Eq => a == b,
            Self::Ne => a != b,
        }))
    }
}

impl Operate for OptionsOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let a = lhs.into_qualifier(self.as_str(), Left)?;
        let b = rhs.into_qualifier(self.as_str(), Right)?;
        Ok(Value::Qualifiers(pool::choice_options(a, b)))
    }
}

impl Operate for ChoiceOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let condition = lhs.into_bool(self.as_str(), Left)?;
        let options = rhs.into_qualifiers(self.as_str(), Right)?;
        pool::choice(condition, options).map(Value::Qualifier)
    }
}

impl Operate for DiceOp {
    fn apply<R: Roller>(&self, ctx: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (num, size) = ints(self.as_str(), lhs, rhs)?;
        let result = match self {
            Self::Die => ctx.die(num, size),
            Self::Exploding => ctx.exploding_die(num, size),
            Self::KeepHigh => ctx.keep_high_die(num, size),
            Self::KeepLow => ctx.keep_low_die(num, size),
            Self::Wild => ctx.wild_die(num, size),
            Self::Concat => ctx.concat(num, size),
        };
        result.map(Value::Int)
    }
}

impl Operate for PoolGenOp {
    fn apply<R: Roller>(&self, ctx: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (num, size) = ints(self.as_str(), lhs, rhs)?;
        let result = match self {
            Self::Pool => ctx.dice_pool(num, size),
            Self::ExplodingPool => ctx.exploding_pool(num, size),
        };
        result.map(Value::Pool)
    }
}

impl Operate for PoolOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (p, x) = pool_and_int(self.as_str(), lhs, rhs)?;
        let result = match self {
            Self::KeepAbove => pool::pool_keep_above(&p, x),
            Self::KeepBelow => pool::pool_keep_below(&p, x),
            Self::Cap => pool::pool_cap(&p, x),
            Self::Floor => pool::pool_floor(&p, x),
            Self::KeepHigh => pool::pool_keep_high(&p, x)?,
            Self::KeepLow => pool::pool_keep_low(&p, x)?,
            Self::Modulo => pool::pool_modulo(&p, x)?,
            Self::Remove => pool::pool_remove(&p, x),
        };
        Ok(Value::Pool(result))
    }
}

impl Operate for PoolDegenOp {
    fn apply<R: Roller>(&self, _: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let (p, target) = pool_and_int(self.as_str(), lhs, rhs)?;
        let result = match self {
            Self::CountSuccesses => pool::count_successes(&p, target),
            Self::CountSuccessesWithBotch => pool::count_successes_with_botch(&p, target),
        };
        result.map(Value::Int)
    }
}

impl Operate for MappingOp {
    /// Maps a number, or every member of a pool, through the named dice map.
    fn apply<R: Roller>(&self, ctx: &mut RollContext<R>, lhs: Value, rhs: Value) -> RResult<Value> {
        let name = rhs.into_qualifier(self.as_str(), Right)?;
        let maps = ctx.maps();
        match lhs {
            Value::Int(outcome) => Ok(Value::from(maps.lookup(&name, outcome)?)),
            Value::Pool(p) => p
                .into_iter()
                .map(|outcome| maps.lookup(&name, outcome).map(str::to_owned))
                .collect::<RResult<_>>()
                .map(Value::Qualifiers),
            other => Err(RollError::operand(
                self.as_str(),
                Left,
                ValueKind::Int,
                other.kind(),
            )),
        }
    }
}

impl UPoolDegenOp {
    pub fn apply(&self, operand: Value) -> RResult<Value> {
        let p = operand.into_pool(self.as_str(), Right)?;
        let result = match self {
            Self::Concatenate => pool::pool_concatenate(&p),
            Self::Count => pool::pool_count(&p),
            Self::Sum => pool::pool_sum(&p),
        };
        result.map(Value::Int)
    }
}
