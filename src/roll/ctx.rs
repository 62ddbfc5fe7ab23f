use super::{error::RollError, maps::DiceMaps, roller::Roller, RResult};
use crate::common::*;
use rand::SeedableRng;

pub type DefaultRoller = rand::prelude::ThreadRng;
pub type SeededRoller = rand_chacha::ChaCha8Rng;

/// How many physical dice a context may still roll.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
struct RollBudget {
    limit: Option<usize>,
    spent: usize,
}

impl RollBudget {
    /// Records `n` more dice, failing once the limit is passed. The dice are
    /// counted even when the limit is exceeded.
    fn spend(&mut self, n: usize) -> RResult<()> {
        self.spent = self.spent.saturating_add(n);
        match self.limit {
            Some(limit) if self.spent > limit => Err(RollError::TooManyRolls),
            _ => Ok(()),
        }
    }
}

/// Mutable evaluation state: the die roller, the optional roll budget, and
/// the dice maps registered so far.
pub struct RollContext<R = DefaultRoller> {
    roller: R,
    budget: RollBudget,
    maps: DiceMaps,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            roller,
            budget: RollBudget {
                limit: max_rolls,
                spent: 0,
            },
            maps: DiceMaps::new(),
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn max_rolls(&self) -> Option<usize> {
        self.budget.limit
    }

    pub fn set_max_rolls(&mut self, max_rolls: Option<usize>) {
        self.budget.limit = max_rolls;
    }

    pub fn maps(&self) -> &DiceMaps {
        &self.maps
    }

    pub fn maps_mut(&mut self) -> &mut DiceMaps {
        &mut self.maps
    }

    /// Physical dice rolled since the budget was last reset.
    pub fn rolls(&self) -> usize {
        self.budget.spent
    }

    pub fn reset_rolls(&mut self) {
        self.budget.spent = 0;
    }

    /// Rolls `num` dice of `sides` faces after charging them to the budget.
    pub fn roll(
        &mut self,
        num: usize,
        sides: NonZeroUInt,
    ) -> RResult<impl Iterator<Item = Int> + '_> {
        self.budget.spend(num)?;
        Ok(self.roller.roll_iter(num, sides).map(Int::from))
    }

    pub fn roll_one(&mut self, sides: NonZeroUInt) -> RResult<Int> {
        self.budget.spend(1)?;
        Ok(self.roller.roll(sides).into())
    }
}

impl RollContext<SeededRoller> {
    /// An unbounded context whose rolls are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new_unbounded(SeededRoller::seed_from_u64(seed))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new_unbounded(rand::thread_rng())
    }
}

/// Validates a die size from notation.
pub(crate) fn sides(size: Int) -> RResult<NonZeroUInt> {
    UInt::try_from(size)
        .ok()
        .and_then(NonZeroUInt::new)
        .ok_or_else(|| {
            RollError::value_error(format!("dice must have 1 or more sides, found {}", size))
        })
}

/// Validates a dice count from notation.
pub(crate) fn count(num: Int) -> RResult<usize> {
    usize::try_from(num)
        .map_err(|_| RollError::value_error(format!("cannot roll {} dice", num)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::ScriptedRoller;

    #[test]
    fn test_roll_budget() {
        let mut ctx = RollContext::new_bounded(3, ScriptedRoller::new([1, 2, 3, 4]));
        let six = NonZeroUInt::new(6).unwrap();
        assert_eq!(ctx.roll(2, six).unwrap().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(ctx.roll_one(six), Ok(3));
        assert_eq!(ctx.rolls(), 3);
        assert_eq!(ctx.roll_one(six), Err(RollError::TooManyRolls));

        ctx.reset_rolls();
        assert_eq!(ctx.roll_one(six), Ok(4));
    }

    #[test]
    fn test_budget_change() {
        let six = NonZeroUInt::new(6).unwrap();
        let mut ctx = RollContext::new_unbounded(ScriptedRoller::new([5, 5, 5]));
        assert_eq!(ctx.max_rolls(), None);
        assert_eq!(ctx.roll(2, six).unwrap().sum::<Int>(), 10);

        // Dice already rolled count against a limit set afterwards.
        ctx.set_max_rolls(Some(2));
        assert_eq!(ctx.max_rolls(), Some(2));
        assert_eq!(ctx.roll_one(six), Err(RollError::TooManyRolls));
        assert_eq!(ctx.rolls(), 3);

        let mut budget = RollBudget::default();
        assert_eq!(budget.spend(usize::MAX), Ok(()));
        assert_eq!(budget.spend(1), Ok(()));
        assert_eq!(budget.spent, usize::MAX);
    }

    #[test]
    fn test_unbounded() {
        let mut ctx = RollContext::seeded(3);
        let ten = NonZeroUInt::new(10).unwrap();
        assert_eq!(ctx.roll(10_000, ten).unwrap().count(), 10_000);
        assert_eq!(ctx.rolls(), 10_000);
    }

    #[test]
    fn test_sides_and_count() {
        assert_eq!(sides(6).map(NonZeroUInt::get), Ok(6));
        assert!(sides(0).is_err());
        assert!(sides(-4).is_err());
        assert_eq!(
            sides(0).unwrap_err().to_string(),
            "dice must have 1 or more sides, found 0"
        );
        assert_eq!(count(0), Ok(0));
        assert_eq!(count(-1).unwrap_err().to_string(), "cannot roll -1 dice");
    }
}
