//! Case values and typed problem inputs.

use algo_common::catalog::Problem;
use algo_core::clock::TimeOfDay;
use anyhow::{Context, Result, bail};
use std::fmt;

/// Literal value as written in a case file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// The integer held by this value, or an error naming what was found.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => bail!("expected integer, found {}", other.kind()),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => bail!("expected string, found {}", other.kind()),
        }
    }

    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(items) => Ok(items),
            other => bail!("expected list, found {}", other.kind()),
        }
    }

    fn as_u32(&self) -> Result<u32> {
        let n = self.as_int()?;
        u32::try_from(n).with_context(|| format!("{} does not fit in u32", n))
    }

    fn as_usize(&self) -> Result<usize> {
        let n = self.as_int()?;
        usize::try_from(n).with_context(|| format!("{} is not a valid index", n))
    }

    fn int_list(&self) -> Result<Vec<i64>> {
        self.as_list()?.iter().map(Value::as_int).collect()
    }

    fn u32_list(&self) -> Result<Vec<u32>> {
        self.as_list()?.iter().map(Value::as_u32).collect()
    }

    fn string_list(&self) -> Result<Vec<String>> {
        self.as_list()?
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect()
    }

    fn range_list(&self) -> Result<Vec<(usize, usize)>> {
        self.as_list()?
            .iter()
            .map(|pair| match pair.as_list()? {
                [left, right] => Ok((left.as_usize()?, right.as_usize()?)),
                other => bail!("range must have two bounds, found {}", other.len()),
            })
            .collect()
    }

    fn time_list(&self) -> Result<Vec<TimeOfDay>> {
        self.as_list()?
            .iter()
            .map(|v| crate::parser::parse_time(v.as_str()?))
            .collect()
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Checked arguments of one problem instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    TwoSum { nums: Vec<i64>, target: i64 },
    ContainsDuplicate { nums: Vec<i64> },
    RangeSum { nums: Vec<i64>, queries: Vec<(usize, usize)> },
    UncommonWords { first: String, second: String },
    ConsistentStrings { allowed: String, words: Vec<String> },
    MinBitFlips { start: u32, goal: u32 },
    MinTimeDifference { points: Vec<TimeOfDay> },
    LongestMaxAnd { nums: Vec<u32> },
    HashDividedString { s: String, k: usize },
    XorQueries { arr: Vec<u32>, queries: Vec<(usize, usize)> },
    ShortestPalindrome { s: String },
    MinimumDamage { power: u32, damage: Vec<u32>, health: Vec<u32> },
}

fn ranges_value(queries: &[(usize, usize)]) -> Value {
    Value::List(
        queries
            .iter()
            .map(|&(l, r)| Value::List(vec![Value::Int(l as i64), Value::Int(r as i64)]))
            .collect(),
    )
}

impl Input {
    /// Binds parsed literals to the argument shape of `problem`.
    ///
    /// # Arguments
    ///
    /// * `problem` - The problem named on the case line
    /// * `args` - Literals following the keyword, in order
    ///
    /// # Returns
    ///
    /// The typed input, or an error naming the argument that has the wrong
    /// count, shape or range.
    pub fn bind(problem: Problem, args: &[Value]) -> Result<Input> {
        let arity = match problem {
            Problem::ContainsDuplicate
            | Problem::LongestMaxAnd
            | Problem::ShortestPalindrome
            | Problem::MinTimeDifference => 1,
            Problem::MinimumDamage => 3,
            _ => 2,
        };
        if args.len() != arity {
            bail!(
                "{} takes {} argument(s), found {}",
                problem.name(),
                arity,
                args.len()
            );
        }

        let input = match problem {
            Problem::TwoSum => Input::TwoSum {
                nums: args[0].int_list().context("nums")?,
                target: args[1].as_int().context("target")?,
            },
            Problem::ContainsDuplicate => Input::ContainsDuplicate {
                nums: args[0].int_list().context("nums")?,
            },
            Problem::RangeSum => Input::RangeSum {
                nums: args[0].int_list().context("nums")?,
                queries: args[1].range_list().context("queries")?,
            },
            Problem::UncommonWords => Input::UncommonWords {
                first: args[0].as_str().context("first sentence")?.to_owned(),
                second: args[1].as_str().context("second sentence")?.to_owned(),
            },
            Problem::ConsistentStrings => Input::ConsistentStrings {
                allowed: args[0].as_str().context("allowed")?.to_owned(),
                words: args[1].string_list().context("words")?,
            },
            Problem::MinBitFlips => Input::MinBitFlips {
                start: args[0].as_u32().context("start")?,
                goal: args[1].as_u32().context("goal")?,
            },
            Problem::MinTimeDifference => Input::MinTimeDifference {
                points: args[0].time_list().context("time points")?,
            },
            Problem::LongestMaxAnd => Input::LongestMaxAnd {
                nums: args[0].u32_list().context("nums")?,
            },
            Problem::HashDividedString => Input::HashDividedString {
                s: args[0].as_str().context("s")?.to_owned(),
                k: args[1].as_usize().context("k")?,
            },
            Problem::XorQueries => Input::XorQueries {
                arr: args[0].u32_list().context("arr")?,
                queries: args[1].range_list().context("queries")?,
            },
            Problem::ShortestPalindrome => Input::ShortestPalindrome {
                s: args[0].as_str().context("s")?.to_owned(),
            },
            Problem::MinimumDamage => Input::MinimumDamage {
                power: args[0].as_u32().context("power")?,
                damage: args[1].u32_list().context("damage")?,
                health: args[2].u32_list().context("health")?,
            },
        };
        Ok(input)
    }

    pub fn problem(&self) -> Problem {
        match self {
            Input::TwoSum { .. } => Problem::TwoSum,
            Input::ContainsDuplicate { .. } => Problem::ContainsDuplicate,
            Input::RangeSum { .. } => Problem::RangeSum,
            Input::UncommonWords { .. } => Problem::UncommonWords,
            Input::ConsistentStrings { .. } => Problem::ConsistentStrings,
            Input::MinBitFlips { .. } => Problem::MinBitFlips,
            Input::MinTimeDifference { .. } => Problem::MinTimeDifference,
            Input::LongestMaxAnd { .. } => Problem::LongestMaxAnd,
            Input::HashDividedString { .. } => Problem::HashDividedString,
            Input::XorQueries { .. } => Problem::XorQueries,
            Input::ShortestPalindrome { .. } => Problem::ShortestPalindrome,
            Input::MinimumDamage { .. } => Problem::MinimumDamage,
        }
    }

    /// Literal arguments that [`Input::bind`] turns back into `self`.
    pub fn args(&self) -> Vec<Value> {
        match self {
            Input::TwoSum { nums, target } => vec![nums.clone().into(), (*target).into()],
            Input::ContainsDuplicate { nums } => vec![nums.clone().into()],
            Input::RangeSum { nums, queries } => vec![nums.clone().into(), ranges_value(queries)],
            Input::UncommonWords { first, second } => {
                vec![first.as_str().into(), second.as_str().into()]
            }
            Input::ConsistentStrings { allowed, words } => {
                vec![allowed.as_str().into(), words.clone().into()]
            }
            Input::MinBitFlips { start, goal } => vec![(*start).into(), (*goal).into()],
            Input::MinTimeDifference { points } => vec![Value::List(
                points.iter().map(|p| Value::Str(p.to_string())).collect(),
            )],
            Input::LongestMaxAnd { nums } => vec![nums.clone().into()],
            Input::HashDividedString { s, k } => vec![s.as_str().into(), Value::Int(*k as i64)],
            Input::XorQueries { arr, queries } => vec![arr.clone().into(), ranges_value(queries)],
            Input::ShortestPalindrome { s } => vec![s.as_str().into()],
            Input::MinimumDamage {
                power,
                damage,
                health,
            } => vec![(*power).into(), damage.clone().into(), health.clone().into()],
        }
    }
}

/// One line of a case file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// 1-based line number in the source file, 0 for generated cases.
    pub line: usize,
    pub input: Input,
    pub expected: Option<Value>,
}

impl Case {
    pub fn problem(&self) -> Problem {
        self.input.problem()
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem().name())?;
        for arg in self.input.args() {
            write!(f, " {}", arg)?;
        }
        if let Some(expected) = &self.expected {
            write!(f, " => {}", expected)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_checks_arity() {
        let err = Input::bind(Problem::TwoSum, &[Value::Int(1)]).unwrap_err();
        assert!(err.to_string().contains("takes 2 argument(s)"));
    }

    #[test]
    fn bind_checks_shapes() {
        let args = [Value::Str("x".into()), Value::Int(3)];
        assert!(Input::bind(Problem::TwoSum, &args).is_err());

        let args = [Value::Int(-1), Value::Int(3)];
        assert!(Input::bind(Problem::MinBitFlips, &args).is_err());

        let args = [
            Value::from(vec![1i64, 2]),
            Value::List(vec![Value::from(vec![0i64, 1, 2])]),
        ];
        assert!(Input::bind(Problem::XorQueries, &args).is_err());
    }

    #[test]
    fn args_rebind_to_the_same_input() {
        let input = Input::MinimumDamage {
            power: 4,
            damage: vec![1, 2, 3, 4],
            health: vec![4, 5, 6, 8],
        };
        assert_eq!(Input::bind(input.problem(), &input.args()).unwrap(), input);

        let input = Input::XorQueries {
            arr: vec![1, 3],
            queries: vec![(0, 1), (1, 1)],
        };
        assert_eq!(Input::bind(input.problem(), &input.args()).unwrap(), input);
    }

    #[test]
    fn display_escapes_strings() {
        let v = Value::from(vec!["a\"b", "c\\d"]);
        assert_eq!(v.to_string(), r#"["a\"b","c\\d"]"#);
    }
}
