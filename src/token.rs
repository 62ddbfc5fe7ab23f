use crate::common::*;
use std::fmt;

/// A lexed unit of dice notation.
///
/// Tokens arrive from an external tokenizer and are consumed strictly left to
/// right. Operator tokens carry the symbol that selects the operation within
/// their syntactic class.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Int),
    Boolean(bool),
    Pool(Vec<Int>),
    Qualifier(String),
    Map(String, DiceMap),
    AsOperator(String),
    MdOperator(String),
    ExOperator(String),
    ComparisonOperator(String),
    ChoiceOperator(String),
    OptionsOperator(String),
    DiceOperator(String),
    PoolGenOperator(String),
    PoolOperator(String),
    UPoolDegenOperator(String),
    PoolDegenOperator(String),
    MappingOperator(String),
    GroupOpen,
    GroupClose,
    RollDelimiter,
}

impl Token {
    /// Builds an operator token of the given class. Returns `None` if `kind`
    /// is not an operator class.
    pub fn operator(kind: TokenKind, symbol: impl Into<String>) -> Option<Self> {
        use TokenKind::*;

        let symbol = symbol.into();
        Some(match kind {
            AsOperator => Self::AsOperator(symbol),
            MdOperator => Self::MdOperator(symbol),
            ExOperator => Self::ExOperator(symbol),
            ComparisonOperator => Self::ComparisonOperator(symbol),
            ChoiceOperator => Self::ChoiceOperator(symbol),
            OptionsOperator => Self::OptionsOperator(symbol),
            DiceOperator => Self::DiceOperator(symbol),
            PoolGenOperator => Self::PoolGenOperator(symbol),
            PoolOperator => Self::PoolOperator(symbol),
            UPoolDegenOperator => Self::UPoolDegenOperator(symbol),
            PoolDegenOperator => Self::PoolDegenOperator(symbol),
            MappingOperator => Self::MappingOperator(symbol),
            _ => return None,
        })
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Boolean(_) => TokenKind::Boolean,
            Self::Pool(_) => TokenKind::Pool,
            Self::Qualifier(_) => TokenKind::Qualifier,
            Self::Map(..) => TokenKind::Map,
            Self::AsOperator(_) => TokenKind::AsOperator,
            Self::MdOperator(_) => TokenKind::MdOperator,
            Self::ExOperator(_) => TokenKind::ExOperator,
            Self::ComparisonOperator(_) => TokenKind::ComparisonOperator,
            Self::ChoiceOperator(_) => TokenKind::ChoiceOperator,
            Self::OptionsOperator(_) => TokenKind::OptionsOperator,
            Self::DiceOperator(_) => TokenKind::DiceOperator,
            Self::PoolGenOperator(_) => TokenKind::PoolGenOperator,
            Self::PoolOperator(_) => TokenKind::PoolOperator,
            Self::UPoolDegenOperator(_) => TokenKind::UPoolDegenOperator,
            Self::PoolDegenOperator(_) => TokenKind::PoolDegenOperator,
            Self::MappingOperator(_) => TokenKind::MappingOperator,
            Self::GroupOpen => TokenKind::GroupOpen,
            Self::GroupClose => TokenKind::GroupClose,
            Self::RollDelimiter => TokenKind::RollDelimiter,
        }
    }

    /// The operator symbol, for operator tokens.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::AsOperator(s)
            | Self::MdOperator(s)
            | Self::ExOperator(s)
            | Self::ComparisonOperator(s)
            | Self::ChoiceOperator(s)
            | Self::OptionsOperator(s)
            | Self::DiceOperator(s)
            | Self::PoolGenOperator(s)
            | Self::PoolOperator(s)
            | Self::UPoolDegenOperator(s)
            | Self::PoolDegenOperator(s)
            | Self::MappingOperator(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Number,
    Boolean,
    Pool,
    Qualifier,
    Map,
    AsOperator,
    MdOperator,
    ExOperator,
    ComparisonOperator,
    ChoiceOperator,
    OptionsOperator,
    DiceOperator,
    PoolGenOperator,
    PoolOperator,
    UPoolDegenOperator,
    PoolDegenOperator,
    MappingOperator,
    GroupOpen,
    GroupClose,
    RollDelimiter,
}

impl TokenKind {
    /// Tokens that can begin a roll or an operand.
    pub const OPERAND_STARTS: [Self; 7] = [
        Self::Number,
        Self::Boolean,
        Self::Pool,
        Self::Qualifier,
        Self::GroupOpen,
        Self::UPoolDegenOperator,
        Self::Map,
    ];

    /// Tokens that can follow a complete operand.
    pub const CONTINUATIONS: [Self; 12] = [
        Self::MappingOperator,
        Self::ChoiceOperator,
        Self::OptionsOperator,
        Self::ComparisonOperator,
        Self::AsOperator,
        Self::MdOperator,
        Self::ExOperator,
        Self::DiceOperator,
        Self::PoolDegenOperator,
        Self::PoolOperator,
        Self::PoolGenOperator,
        Self::RollDelimiter,
    ];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Number => "<number>",
            Boolean => "<boolean>",
            Pool => "<pool>",
            Qualifier => "<qualifier>",
            Map => "<dice map>",
            AsOperator => "<additive operator>",
            MdOperator => "<multiplicative operator>",
            ExOperator => "<exponent operator>",
            ComparisonOperator => "<comparison operator>",
            ChoiceOperator => "<choice operator>",
            OptionsOperator => "<options operator>",
            DiceOperator => "<dice operator>",
            PoolGenOperator => "<pool generation operator>",
            PoolOperator => "<pool operator>",
            UPoolDegenOperator => "<unary pool degeneration operator>",
            PoolDegenOperator => "<pool degeneration operator>",
            MappingOperator => "<mapping operator>",
            GroupOpen => "'('",
            GroupClose => "')'",
            RollDelimiter => "';'",
        }
    }

    pub fn is_operand_start(&self) -> bool {
        Self::OPERAND_STARTS.contains(self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_constructor() {
        assert_eq!(
            Token::operator(TokenKind::DiceOperator, "d!"),
            Some(Token::DiceOperator("d!".into()))
        );
        assert_eq!(Token::operator(TokenKind::Number, "3"), None);
        assert_eq!(Token::operator(TokenKind::GroupOpen, "("), None);
    }

    #[test]
    fn test_kind_and_symbol() {
        let tok = Token::PoolOperator("ph".into());
        assert_eq!(tok.kind(), TokenKind::PoolOperator);
        assert_eq!(tok.symbol(), Some("ph"));
        assert_eq!(Token::Number(3).symbol(), None);
        assert_eq!(Token::Map("m".into(), DiceMap::new()).kind(), TokenKind::Map);
    }

    #[test]
    fn test_operand_starts() {
        assert!(TokenKind::UPoolDegenOperator.is_operand_start());
        assert!(TokenKind::GroupOpen.is_operand_start());
        assert!(!TokenKind::AsOperator.is_operand_start());
        assert!(!TokenKind::RollDelimiter.is_operand_start());
    }
}
