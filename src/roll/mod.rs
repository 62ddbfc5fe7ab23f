mod ctx;
mod dice;
mod error;
mod maps;
mod roller;

pub(crate) type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext, SeededRoller};
pub use error::RollError;
pub use maps::DiceMaps;
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::ScriptedRoller;
