use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// A source of die results: `roll(sides)` is uniform over `1..=sides`.
///
/// Every call consumes one unit of entropy. Implementations are not expected
/// to be shared between threads.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_rolls_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let sides = NonZeroUInt::new(6).unwrap();
        for _ in 0..500 {
            let x = Roller::roll(&mut rng, sides);
            assert!((1..=6).contains(&x));
        }
        assert_eq!(rng.roll_iter(40, sides).filter(|x| (1..=6).contains(x)).count(), 40);
    }

    #[test]
    fn test_one_sided_die() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let one = NonZeroUInt::new(1).unwrap();
        assert!(rng.roll_iter(10, one).all(|x| x == 1));
    }

    #[test]
    fn test_seeded_rngs_agree() {
        let sides = NonZeroUInt::new(20).unwrap();
        let a: Vec<_> = ChaCha8Rng::seed_from_u64(99).roll_iter(16, sides).collect();
        let b: Vec<_> = ChaCha8Rng::seed_from_u64(99).roll_iter(16, sides).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_roller() {
        let mut roller = ScriptedRoller::new([1, 2, 2]);
        let sides = NonZeroUInt::new(6).unwrap();
        assert_eq!(roller.roll(sides), 1);
        assert_eq!(roller.roll_iter(2, sides).collect::<Vec<_>>(), vec![2, 2]);
        assert_eq!(roller.remaining(), 0);
        assert_eq!(roller.roll_iter(0, sides).count(), 0);
    }

    #[test]
    #[should_panic(expected = "ran out of results")]
    fn test_scripted_roller_exhausted() {
        let mut roller = ScriptedRoller::new([3]);
        roller.roll_iter(2, NonZeroUInt::new(6).unwrap()).for_each(drop);
    }
}
