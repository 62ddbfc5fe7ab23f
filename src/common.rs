use std::num::NonZeroU32;
pub use vec1::vec1;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Outcome-to-qualifier table registered under a name by a `MAP` token.
pub type DiceMap = std::collections::HashMap<Int, String>;
