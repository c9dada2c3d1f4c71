//! Parser for single case lines.
//!
//! Grammar, whitespace-separated:
//!
//! ```text
//! line     := keyword value* ("=>" value)?
//! value    := integer | "true" | "false" | string | list
//! list     := "[" (value ("," value)*)? "]"
//! string   := '"' (char | '\"' | '\\' | '\n')* '"'
//! ```
//!
//! Time points are ordinary strings holding `HH:MM` and are checked when a
//! `min-time-difference` case is bound.

use crate::case::{Case, Input, Value};
use algo_common::catalog::Problem;
use algo_core::clock::TimeOfDay;
use anyhow::{Context, Result, anyhow};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while_m_n, take_while1};
use nom::character::complete::{char, digit1, multispace0, multispace1, none_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::{fold_many0, many0, separated_list0};
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated, tuple};

fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i64>)(input)
}

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((value(true, tag("true")), value(false, tag("false"))))(input)
}

fn string_char(input: &str) -> IResult<&str, char> {
    alt((
        none_of("\\\""),
        preceded(
            char('\\'),
            alt((
                value('"', char('"')),
                value('\\', char('\\')),
                value('\n', char('n')),
            )),
        ),
    ))(input)
}

fn string(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        fold_many0(string_char, String::new, |mut acc, c| {
            acc.push(c);
            acc
        }),
        char('"'),
    )(input)
}

fn list(input: &str) -> IResult<&str, Vec<Value>> {
    delimited(
        terminated(char('['), multispace0),
        separated_list0(delimited(multispace0, char(','), multispace0), literal),
        preceded(multispace0, char(']')),
    )(input)
}

/// A single literal value.
pub fn literal(input: &str) -> IResult<&str, Value> {
    alt((
        map(integer, Value::Int),
        map(boolean, Value::Bool),
        map(string, Value::Str),
        map(list, Value::List),
    ))(input)
}

fn keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_lowercase() || c == '-')(input)
}

type RawLine<'a> = (&'a str, Vec<Value>, Option<Value>);

fn raw_line(input: &str) -> IResult<&str, RawLine<'_>> {
    all_consuming(delimited(
        multispace0,
        tuple((
            keyword,
            many0(preceded(multispace1, literal)),
            opt(preceded(
                tuple((multispace0, tag("=>"), multispace0)),
                literal,
            )),
        )),
        multispace0,
    ))(input)
}

fn two_digits(input: &str) -> IResult<&str, u16> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), str::parse::<u16>)(input)
}

/// Parses an `HH:MM` reading on a 24-hour clock.
pub fn parse_time(text: &str) -> Result<TimeOfDay> {
    let (_, (hours, minutes)) =
        all_consuming(separated_pair(two_digits, char(':'), two_digits))(text)
            .map_err(|e| anyhow!("malformed time {:?}: {}", text, e))?;
    Ok(TimeOfDay::new(hours, minutes)?)
}

/// Parses one case line.
///
/// Returns `Ok(None)` for blank lines and `#` comments. `line` is recorded in
/// the resulting case for error reporting.
pub fn parse_case_line(text: &str, line: usize) -> Result<Option<Case>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (_, (name, args, expected)) =
        raw_line(trimmed).map_err(|e| anyhow!("syntax error: {}", e))?;
    let problem = Problem::from_name(name).with_context(|| format!("unknown problem {:?}", name))?;
    let input = Input::bind(problem, &args)?;

    Ok(Some(Case {
        line,
        input,
        expected,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(literal("-42"), Ok(("", Value::Int(-42))));
        assert_eq!(literal("true"), Ok(("", Value::Bool(true))));
        assert_eq!(literal(r#""""#), Ok(("", Value::Str(String::new()))));
        assert_eq!(
            literal(r#""say \"hi\"\n""#),
            Ok(("", Value::Str("say \"hi\"\n".into())))
        );
        assert_eq!(
            literal("[ [0, 1] ,[2,3], [] ]"),
            Ok((
                "",
                Value::List(vec![
                    Value::from(vec![0i64, 1]),
                    Value::from(vec![2i64, 3]),
                    Value::List(vec![]),
                ])
            ))
        );
    }

    #[test]
    fn times() {
        assert_eq!(parse_time("23:59").unwrap().minutes(), 1439);
        assert_eq!(parse_time("00:00").unwrap().minutes(), 0);
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("7:05").is_err());
        assert!(parse_time("07:05 ").is_err());
    }

    #[test]
    fn full_case_line() {
        let case = parse_case_line("minimum-damage 4 [1,2,3,4] [4,5,6,8] => 39", 3)
            .unwrap()
            .unwrap();
        assert_eq!(case.line, 3);
        assert_eq!(
            case.input,
            Input::MinimumDamage {
                power: 4,
                damage: vec![1, 2, 3, 4],
                health: vec![4, 5, 6, 8],
            }
        );
        assert_eq!(case.expected, Some(Value::Int(39)));
    }

    #[test]
    fn case_without_expectation() {
        let case = parse_case_line(r#"  shortest-palindrome "abcd"  "#, 1)
            .unwrap()
            .unwrap();
        assert_eq!(
            case.input,
            Input::ShortestPalindrome {
                s: "abcd".into()
            }
        );
        assert_eq!(case.expected, None);
    }

    #[test]
    fn time_points_are_validated_on_bind() {
        let ok = parse_case_line(r#"min-time-difference ["23:59","00:00"] => 1"#, 1).unwrap();
        assert!(ok.is_some());
        let bad = parse_case_line(r#"min-time-difference ["25:00","00:00"]"#, 1);
        assert!(bad.is_err());
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert!(parse_case_line("# two-sum [1] 1", 1).unwrap().is_none());
        assert!(parse_case_line("   ", 2).unwrap().is_none());
    }

    #[test]
    fn rejects_unknown_problem_and_bad_syntax() {
        let err = parse_case_line("three-sum [1,2,3] 0", 1).unwrap_err();
        assert!(err.to_string().contains("unknown problem"));
        assert!(parse_case_line("two-sum [1,2 9", 1).is_err());
        assert!(parse_case_line("two-sum [1,2] 9 =>", 1).is_err());
    }

    #[test]
    fn rendered_case_parses_back() {
        let text = r#"consistent-strings "ab" ["ad","bd","aaab","baa","badab"] => 2"#;
        let case = parse_case_line(text, 0).unwrap().unwrap();
        assert_eq!(case.to_string(), text);
    }
}
