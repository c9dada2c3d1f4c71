//! Random case generator.
//!
//! Produces damage-ordering and palindrome cases whose expected answers come
//! from the brute-force oracles, so a generated file can be fed straight to
//! `algo run` to cross-check the fast algorithms. Generation is deterministic
//! for a given seed.

use crate::oracle;
use algo_common::catalog::Problem;
use algo_io::case::{Case, Input, Value};
use algo_io::loader;
use anyhow::{Result, bail};
use rayon::prelude::*;
use tracing::{debug, info};

/// Largest roster handed to the permutation oracle (7! orders).
const MAX_ENEMIES: usize = 7;
const MAX_PALINDROME_LEN: usize = 16;
const PALINDROME_ALPHABET: &[u8] = b"abc";

/// Xorshift generator.
pub struct XorShift {
    state: u64,
}

impl XorShift {
    pub fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform-enough value in `lo..=hi`.
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        let span = u64::from(hi - lo) + 1;
        lo + (self.next_u64() % span) as u32
    }
}

fn random_input(problem: Problem, rng: &mut XorShift) -> Result<Input> {
    let input = match problem {
        Problem::MinimumDamage => {
            let n = rng.range(1, MAX_ENEMIES as u32) as usize;
            Input::MinimumDamage {
                power: rng.range(1, 10),
                damage: (0..n).map(|_| rng.range(1, 20)).collect(),
                health: (0..n).map(|_| rng.range(1, 40)).collect(),
            }
        }
        Problem::ShortestPalindrome => {
            let len = rng.range(0, MAX_PALINDROME_LEN as u32) as usize;
            let s = (0..len)
                .map(|_| {
                    let idx = rng.range(0, PALINDROME_ALPHABET.len() as u32 - 1) as usize;
                    char::from(PALINDROME_ALPHABET[idx])
                })
                .collect();
            Input::ShortestPalindrome { s }
        }
        other => bail!("no generator for {}", other.name()),
    };
    Ok(input)
}

fn expected(input: &Input) -> Result<Value> {
    let value = match input {
        Input::MinimumDamage {
            power,
            damage,
            health,
        } => Value::Int(oracle::minimum_damage(*power, damage, health) as i64),
        Input::ShortestPalindrome { s } => Value::Str(oracle::shortest_palindrome(s)),
        other => bail!("no oracle for {}", other.problem().name()),
    };
    Ok(value)
}

/// Builds `count` labelled cases.
///
/// # Arguments
///
/// * `count` - Number of cases to draw
/// * `seed` - Generator seed; equal seeds give equal cases
/// * `problem` - Restrict to one problem. With `None`, damage and palindrome
///   cases alternate
///
/// # Returns
///
/// Cases with `line` 0 and expectations from the oracles, or an error if
/// `problem` has no generator.
pub fn generate_cases(count: usize, seed: u64, problem: Option<Problem>) -> Result<Vec<Case>> {
    let mut rng = XorShift::new(seed);
    let mut inputs = Vec::with_capacity(count);
    for i in 0..count {
        let problem = problem.unwrap_or(if i % 2 == 0 {
            Problem::MinimumDamage
        } else {
            Problem::ShortestPalindrome
        });
        inputs.push(random_input(problem, &mut rng)?);
    }
    debug!(count = inputs.len(), "inputs drawn, labelling with oracles");

    // Oracles are the expensive part; label in parallel.
    let cases = inputs
        .into_par_iter()
        .map(|input| {
            Ok(Case {
                line: 0,
                expected: Some(expected(&input)?),
                input,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(cases)
}

/// Generates cases and writes them to `out_path`.
pub fn write_generated(out_path: &str, count: usize, seed: u64, problem: Option<Problem>) -> Result<()> {
    println!("Generating {} cases (seed={})...", count, seed);
    let cases = generate_cases(count, seed, problem)?;

    let header = format!("generated by `algo gen --count {} --seed {}`", count, seed);
    loader::write_case_file(out_path, Some(&header), &cases)?;
    info!(path = out_path, cases = cases.len(), "case file written");

    println!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::solve;

    #[test]
    fn same_seed_same_cases() {
        let a = generate_cases(20, 7, None).unwrap();
        let b = generate_cases(20, 7, None).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, generate_cases(20, 8, None).unwrap());
    }

    #[test]
    fn alternates_problems_by_default() {
        let cases = generate_cases(4, 1, None).unwrap();
        let problems: Vec<Problem> = cases.iter().map(Case::problem).collect();
        assert_eq!(
            problems,
            vec![
                Problem::MinimumDamage,
                Problem::ShortestPalindrome,
                Problem::MinimumDamage,
                Problem::ShortestPalindrome,
            ]
        );
    }

    #[test]
    fn fast_solvers_agree_with_oracle_labels() {
        for case in generate_cases(200, 2024, None).unwrap() {
            assert_eq!(Some(solve(&case.input).unwrap()), case.expected, "{}", case);
        }
    }

    #[test]
    fn unsupported_problem_is_an_error() {
        assert!(generate_cases(1, 1, Some(Problem::TwoSum)).is_err());
    }

    #[test]
    fn ranges_stay_in_bounds() {
        let mut rng = XorShift::new(0);
        for _ in 0..1000 {
            let v = rng.range(3, 5);
            assert!((3..=5).contains(&v));
        }
    }
}
