//! Pure pool primitives. None of these touch the roller; every function
//! returns a new pool instead of mutating its input.

use crate::common::*;
use crate::roll::{RResult, RollError};
use std::num::{IntErrorKind, ParseIntError};

pub fn pool_cap(pool: &[Int], cap: Int) -> Vec<Int> {
    pool.iter().map(|&x| x.min(cap)).collect()
}

pub fn pool_floor(pool: &[Int], floor: Int) -> Vec<Int> {
    pool.iter().map(|&x| x.max(floor)).collect()
}

pub fn pool_keep_above(pool: &[Int], floor: Int) -> Vec<Int> {
    pool.iter().copied().filter(|&x| x >= floor).collect()
}

pub fn pool_keep_below(pool: &[Int], ceiling: Int) -> Vec<Int> {
    pool.iter().copied().filter(|&x| x <= ceiling).collect()
}

fn keep_count(keep: Int) -> RResult<usize> {
    usize::try_from(keep)
        .map_err(|_| RollError::value_error(format!("cannot keep {} dice", keep)))
}

/// Removes elements one at a time until `keep` remain. `discard` picks the
/// value to drop; its first occurrence is the one removed.
fn keep_by(pool: &[Int], keep: Int, discard: fn(&[Int]) -> Option<Int>) -> RResult<Vec<Int>> {
    let keep = keep_count(keep)?;
    let mut pool = pool.to_vec();
    while pool.len() > keep {
        let Some(target) = discard(&pool) else { break };
        let Some(i) = pool.iter().position(|&x| x == target) else { break };
        pool.remove(i);
    }
    Ok(pool)
}

/// Keeps the `keep` highest values, e.g. `[4, 10, 3, 5, 1, 9]` keeping 3
/// gives `[10, 5, 9]`.
pub fn pool_keep_high(pool: &[Int], keep: Int) -> RResult<Vec<Int>> {
    keep_by(pool, keep, |p| p.iter().copied().min())
}

pub fn pool_keep_low(pool: &[Int], keep: Int) -> RResult<Vec<Int>> {
    keep_by(pool, keep, |p| p.iter().copied().max())
}

/// Elementwise modulo with the sign of the divisor.
pub fn pool_modulo(pool: &[Int], divisor: Int) -> RResult<Vec<Int>> {
    pool.iter().map(|&x| floor_mod(x, divisor)).collect()
}

pub fn pool_remove(pool: &[Int], value: Int) -> Vec<Int> {
    pool.iter().copied().filter(|&x| x != value).collect()
}

/// Joins the decimal representations of the pool and reads them back as one
/// number.
pub fn pool_concatenate(pool: &[Int]) -> RResult<Int> {
    if pool.is_empty() {
        return Err(RollError::value_error("cannot concatenate an empty pool"));
    }
    let digits: String = pool.iter().map(Int::to_string).collect();
    digits.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => RollError::Overflow,
        _ => RollError::value_error(format!("cannot read {:?} as a number", digits)),
    })
}

pub fn pool_count(pool: &[Int]) -> RResult<Int> {
    Int::try_from(pool.len()).map_err(|_| RollError::Overflow)
}

pub fn pool_sum(pool: &[Int]) -> RResult<Int> {
    pool.iter()
        .try_fold(0 as Int, |acc, &x| acc.checked_add(x))
        .ok_or(RollError::Overflow)
}

pub fn count_successes(pool: &[Int], target: Int) -> RResult<Int> {
    pool_count(&pool_keep_above(pool, target))
}

/// Successes minus ones. May go negative.
pub fn count_successes_with_botch(pool: &[Int], target: Int) -> RResult<Int> {
    let botches = pool_count(pool)? - pool_count(&pool_remove(pool, 1))?;
    Ok(count_successes(pool, target)? - botches)
}

pub fn choice_options(a: String, b: String) -> Vec<String> {
    vec![a, b]
}

pub fn choice(condition: bool, options: Vec<String>) -> RResult<String> {
    let [on_true, on_false]: [String; 2] = options.try_into().map_err(|opts: Vec<String>| {
        RollError::value_error(format!(
            "a choice needs exactly 2 options, found {}",
            opts.len()
        ))
    })?;
    Ok(if condition { on_true } else { on_false })
}

pub(crate) fn floor_div(a: Int, b: Int) -> RResult<Int> {
    if b == 0 {
        return Err(RollError::ZeroDivision);
    }
    let q = a.checked_div(b).ok_or(RollError::Overflow)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

pub(crate) fn floor_mod(a: Int, b: Int) -> RResult<Int> {
    if b == 0 {
        return Err(RollError::ZeroModulo);
    }
    let r = a.checked_rem(b).ok_or(RollError::Overflow)?;
    if r != 0 && (r < 0) != (b < 0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}
