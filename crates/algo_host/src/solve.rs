//! Dispatch from typed inputs to the core algorithms.

use algo_core::{bits, clock, damage, lookup, palindrome, prefix, text};
use algo_io::case::{Input, Value};
use anyhow::{Context, Result};

/// Solves one problem instance and returns the answer as a case value.
///
/// Answers use the same literal forms as expectations in case files: a
/// missing two-sum pair is `[]`, word lists come back sorted.
pub fn solve(input: &Input) -> Result<Value> {
    let value = match input {
        Input::TwoSum { nums, target } => match lookup::two_sum(nums, *target) {
            Some((i, j)) => Value::List(vec![Value::Int(i as i64), Value::Int(j as i64)]),
            None => Value::List(Vec::new()),
        },
        Input::ContainsDuplicate { nums } => Value::Bool(lookup::contains_duplicate(nums)),
        Input::RangeSum { nums, queries } => {
            let table = prefix::RangeSum::new(nums);
            let sums = queries
                .iter()
                .map(|&(l, r)| table.sum_range(l, r))
                .collect::<Result<Vec<i64>, _>>()?;
            sums.into()
        }
        Input::UncommonWords { first, second } => text::uncommon_words(first, second).into(),
        Input::ConsistentStrings { allowed, words } => {
            Value::Int(text::count_consistent_strings(allowed, words) as i64)
        }
        Input::MinBitFlips { start, goal } => bits::min_bit_flips(*start, *goal).into(),
        Input::MinTimeDifference { points } => {
            Value::Int(i64::from(clock::minimum_time_difference(points)?))
        }
        Input::LongestMaxAnd { nums } => {
            Value::Int(bits::longest_max_and_subarray(nums) as i64)
        }
        Input::HashDividedString { s, k } => text::hash_divided_string(s, *k)?.into(),
        Input::XorQueries { arr, queries } => prefix::xor_queries(arr, queries)?.into(),
        Input::ShortestPalindrome { s } => palindrome::shortest_palindrome_str(s).into(),
        Input::MinimumDamage {
            power,
            damage,
            health,
        } => {
            let total = damage::minimum_damage(*power, damage, health)?;
            Value::Int(i64::try_from(total).context("total damage does not fit in i64")?)
        }
    };
    Ok(value)
}
