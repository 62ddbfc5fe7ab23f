//! Operators that draw from the roller: dice and pool generation.

use super::ctx::{count, sides};
use super::{RResult, RollContext, RollError, Roller};
use crate::common::*;
use crate::pool;

impl<R: Roller> RollContext<R> {
    /// Rolls `num` dice of `size` faces, in roll order.
    pub fn dice_pool(&mut self, num: Int, size: Int) -> RResult<Vec<Int>> {
        let n = count(num)?;
        let sides = sides(size)?;
        let pool: Vec<Int> = self.roll(n, sides)?.collect();
        log::debug!("rolled {:?} for {}g{}", pool, num, size);
        Ok(pool)
    }

    /// Like [`dice_pool`](Self::dice_pool), but each die showing its maximum
    /// is rolled again and added, for as long as the maximum keeps coming up.
    pub fn exploding_pool(&mut self, num: Int, size: Int) -> RResult<Vec<Int>> {
        if size == 1 {
            return Err(RollError::value_error("a one-sided die cannot explode"));
        }
        let sides = sides(size)?;
        let mut pool = self.dice_pool(num, size)?;
        for value in &mut pool {
            let mut last = *value;
            while last == size {
                last = self.roll_one(sides)?;
                *value = value.checked_add(last).ok_or(RollError::Overflow)?;
            }
        }
        log::debug!("exploded to {:?} for {}g!{}", pool, num, size);
        Ok(pool)
    }

    pub fn die(&mut self, num: Int, size: Int) -> RResult<Int> {
        let pool = self.dice_pool(num, size)?;
        pool::pool_sum(&pool)
    }

    pub fn exploding_die(&mut self, num: Int, size: Int) -> RResult<Int> {
        let pool = self.exploding_pool(num, size)?;
        pool::pool_sum(&pool)
    }

    pub fn keep_high_die(&mut self, num: Int, size: Int) -> RResult<Int> {
        let pool = self.dice_pool(num, size)?;
        pool.into_iter()
            .max()
            .ok_or_else(|| RollError::value_error("cannot keep the highest of zero dice"))
    }

    pub fn keep_low_die(&mut self, num: Int, size: Int) -> RResult<Int> {
        let pool = self.dice_pool(num, size)?;
        pool.into_iter()
            .min()
            .ok_or_else(|| RollError::value_error("cannot keep the lowest of zero dice"))
    }

    /// Rolls one exploding wild die and `num - 1` regular dice. A 1 on the
    /// wild die's first roll zeroes the whole result.
    ///
    /// Fewer than one die is an error. Earlier yadr versions rolled just the
    /// wild die for `0dw`, since a pool of `-1` dice came out empty.
    pub fn wild_die(&mut self, num: Int, size: Int) -> RResult<Int> {
        if num < 1 {
            return Err(RollError::value_error(format!(
                "a wild die roll needs at least 1 die, found {}",
                num
            )));
        }
        let wild = self.exploding_pool(1, size)?;
        let regular = self.dice_pool(num - 1, size)?;
        if wild[0] == 1 {
            log::debug!("wild die botched; discarding {:?}", regular);
            return Ok(0);
        }
        pool::pool_sum(&wild)?
            .checked_add(pool::pool_sum(&regular)?)
            .ok_or(RollError::Overflow)
    }

    /// Concatenates the last digit of each die. Percentile dice read `00` as 0.
    pub fn concat(&mut self, num: Int, size: Int) -> RResult<Int> {
        let pool = self.dice_pool(num, size)?;
        let digits = pool::pool_modulo(&pool, 10)?;
        pool::pool_concatenate(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::ScriptedRoller;

    fn ctx(results: impl IntoIterator<Item = UInt>) -> RollContext<ScriptedRoller> {
        RollContext::new_unbounded(ScriptedRoller::new(results))
    }

    #[test]
    fn test_die() {
        assert_eq!(ctx([1, 2, 2]).die(3, 6), Ok(5));
        assert_eq!(ctx([]).die(0, 6), Ok(0));
        assert!(ctx([]).die(-1, 6).is_err());
        assert!(ctx([]).die(2, 0).is_err());
    }

    #[test]
    fn test_exploding() {
        assert_eq!(ctx([1, 2, 4, 2, 2]).exploding_pool(4, 4), Ok(vec![1, 2, 6, 2]));
        assert_eq!(ctx([1, 2, 4, 2, 2]).exploding_die(4, 4), Ok(11));
        assert_eq!(ctx([6, 6, 6, 1]).exploding_pool(1, 6), Ok(vec![19]));
        assert!(ctx([]).exploding_die(3, 1).is_err());
    }

    #[test]
    fn test_keep_high_low() {
        assert_eq!(ctx([1, 5, 3]).keep_high_die(3, 6), Ok(5));
        assert_eq!(ctx([1, 5, 3]).keep_low_die(3, 6), Ok(1));
        assert!(ctx([]).keep_high_die(0, 6).is_err());
    }

    #[test]
    fn test_wild_die() {
        assert_eq!(ctx([4, 2, 1, 6]).wild_die(4, 6), Ok(13));
        // Exploding wild die is rolled before the regular dice.
        assert_eq!(ctx([6, 3, 2, 2]).wild_die(3, 6), Ok(13));
    }

    #[test]
    fn test_wild_die_botch() {
        let mut c = ctx([1, 6, 6, 6]);
        assert_eq!(c.wild_die(4, 6), Ok(0));
        assert_eq!(c.rolls(), 4);
        assert!(ctx([]).wild_die(0, 6).is_err());
    }

    #[test]
    fn test_concat() {
        assert_eq!(ctx([1, 11, 3]).concat(3, 12), Ok(113));
        assert_eq!(ctx([10, 7]).concat(2, 10), Ok(7));
        assert!(ctx([]).concat(0, 10).is_err());
        assert_eq!(ctx([9; 25]).concat(25, 10), Err(RollError::Overflow));
    }

    #[test]
    fn test_die_bounds() {
        let mut c = RollContext::seeded(1234);
        for num in 0..20 {
            for size in 1..13 {
                let total = c.die(num, size).unwrap();
                assert!(num <= total && total <= num * size);
            }
        }
    }

    #[test]
    fn test_pool_sum_matches_die() {
        for seed in 0..50 {
            let pool = RollContext::seeded(seed).dice_pool(7, 8).unwrap();
            let total = RollContext::seeded(seed).die(7, 8).unwrap();
            assert_eq!(pool::pool_sum(&pool), Ok(total));
        }
    }
}
