use crate::solve::solve;
use crate::stats::LatencyStats;
use algo_common::catalog::{Difficulty, Problem};
use algo_io::case::{Case, Value};
use algo_io::loader;
use anyhow::{Result, bail};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of solving one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The answer matched the expectation.
    Pass,
    /// The answer differed from the expectation.
    Fail { got: Value },
    /// No expectation was given; the answer is only reported.
    Unchecked { got: Value },
    /// The solver rejected the input.
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub line: usize,
    pub problem: Problem,
    pub verdict: Verdict,
    pub nanos: u64,
}

#[derive(Debug, Default)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub unchecked: usize,
    pub errors: usize,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub latency: LatencyStats,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.unchecked + self.errors
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

fn judge(case: &Case) -> Outcome {
    let start = Instant::now();
    let answer = solve(&case.input);
    let nanos = start.elapsed().as_nanos() as u64;

    let verdict = match (answer, &case.expected) {
        (Ok(got), Some(expected)) if &got == expected => Verdict::Pass,
        (Ok(got), Some(_)) => Verdict::Fail { got },
        (Ok(got), None) => Verdict::Unchecked { got },
        (Err(e), _) => Verdict::Error(format!("{:#}", e)),
    };

    Outcome {
        line: case.line,
        problem: case.problem(),
        verdict,
        nanos,
    }
}

/// Solves every case in parallel and tallies the verdicts.
///
/// Outcomes are returned in input order alongside the summary.
pub fn run_cases(cases: &[Case]) -> (Vec<Outcome>, Summary) {
    let outcomes: Vec<Outcome> = cases.par_iter().map(judge).collect();

    // Per-thread latency partials, merged at the end.
    let latency = outcomes
        .par_iter()
        .fold(LatencyStats::new, |mut stats, outcome| {
            stats.update(outcome.nanos);
            stats
        })
        .reduce(LatencyStats::new, |a, b| a.merge(&b));

    let mut summary = Summary {
        latency,
        ..Summary::default()
    };
    for outcome in &outcomes {
        *summary
            .by_difficulty
            .entry(outcome.problem.difficulty())
            .or_insert(0) += 1;
        match outcome.verdict {
            Verdict::Pass => summary.passed += 1,
            Verdict::Fail { .. } => summary.failed += 1,
            Verdict::Unchecked { .. } => summary.unchecked += 1,
            Verdict::Error(_) => summary.errors += 1,
        }
    }
    (outcomes, summary)
}

/// Loads a case file, runs it and prints a report.
///
/// # Arguments
///
/// * `cases_path` - Case file to load
/// * `show_unchecked` - Also print answers for cases without an expectation
///
/// # Returns
///
/// `Ok(())` when every checked case passed, otherwise an error counting the
/// failures and solver errors.
pub fn run_file(cases_path: &str, show_unchecked: bool) -> Result<()> {
    println!("Loading cases from {}...", cases_path);
    let start_load = Instant::now();
    let cases = loader::load_case_file(cases_path)?;
    println!("Loaded {} cases in {:?}.", cases.len(), start_load.elapsed());
    debug!(threads = rayon::current_num_threads(), "solving");

    let start = Instant::now();
    let (outcomes, summary) = run_cases(&cases);
    let seconds = start.elapsed().as_secs_f64();

    for (case, outcome) in cases.iter().zip(&outcomes) {
        match &outcome.verdict {
            Verdict::Pass => {}
            Verdict::Fail { got } => {
                warn!(line = outcome.line, problem = outcome.problem.name(), "mismatch");
                println!("FAIL line {}: {}", outcome.line, case);
                println!("     got {}", got);
            }
            Verdict::Unchecked { got } => {
                if show_unchecked {
                    println!("     line {}: {} => {}", outcome.line, case, got);
                }
            }
            Verdict::Error(msg) => {
                warn!(line = outcome.line, problem = outcome.problem.name(), "solver error");
                println!("ERR  line {}: {}", outcome.line, case);
                println!("     {}", msg);
            }
        }
    }

    println!("Results");
    println!("Time: {:.4} s", seconds);
    if seconds > 0.0 {
        println!("Throughput: {:.2} cases/s", summary.total() as f64 / seconds);
    }
    println!(
        "Passed: {}  Failed: {}  Errors: {}  Unchecked: {}",
        summary.passed, summary.failed, summary.errors, summary.unchecked
    );
    for (difficulty, count) in &summary.by_difficulty {
        println!("  {:<6} {}", difficulty.label(), count);
    }
    summary.latency.print_report();
    info!(passed = summary.passed, failed = summary.failed, "run finished");

    if !summary.is_success() {
        bail!(
            "{} of {} cases did not pass",
            summary.failed + summary.errors,
            summary.total()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_io::loader::parse_cases;

    #[test]
    fn tallies_every_verdict() {
        let cases = parse_cases(
            r#"
two-sum [2,7,11,15] 9 => [0,1]
min-bit-flips 3 4 => 2
shortest-palindrome "abcd"
minimum-damage 0 [1] [1] => 1
"#,
        )
        .unwrap();

        let (outcomes, summary) = run_cases(&cases);
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].verdict, Verdict::Pass);
        assert_eq!(
            outcomes[1].verdict,
            Verdict::Fail {
                got: Value::Int(3)
            }
        );
        assert_eq!(
            outcomes[2].verdict,
            Verdict::Unchecked {
                got: Value::from("dcbabcd")
            }
        );
        assert!(matches!(outcomes[3].verdict, Verdict::Error(_)));

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.latency.count, 4);
        assert_eq!(summary.by_difficulty[&Difficulty::Easy], 2);
        assert_eq!(summary.by_difficulty[&Difficulty::Hard], 2);
        assert!(!summary.is_success());
    }

    #[test]
    fn shipped_examples_all_pass() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../cases/worked_examples.cases");
        let cases = loader::load_case_file(path).unwrap();
        let (outcomes, summary) = run_cases(&cases);

        let failures: Vec<_> = outcomes
            .iter()
            .filter(|o| o.verdict != Verdict::Pass)
            .collect();
        assert!(failures.is_empty(), "{:?}", failures);
        assert_eq!(summary.passed, cases.len());
        assert_eq!(summary.by_difficulty.len(), 3);
    }

    #[test]
    fn overflowing_case_is_an_error_verdict() {
        let cases = parse_cases(
            "minimum-damage 1 [4294967295,4294967295] [4294967295,4294967295] => 0\n\
             min-bit-flips 10 7 => 3\n",
        )
        .unwrap();
        let (outcomes, summary) = run_cases(&cases);
        assert_eq!(
            outcomes[0].verdict,
            Verdict::Error("arithmetic overflow".into())
        );
        assert_eq!(outcomes[1].verdict, Verdict::Pass);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.latency.count, 2);
    }

    #[test]
    fn latency_partials_cover_every_case() {
        let text: String = (0..200).map(|i| format!("min-bit-flips {} 1\n", i)).collect();
        let cases = parse_cases(&text).unwrap();
        let (outcomes, summary) = run_cases(&cases);

        let nanos: Vec<u64> = outcomes.iter().map(|o| o.nanos).collect();
        assert_eq!(summary.latency.count, 200);
        assert_eq!(summary.latency.sum, nanos.iter().sum::<u64>());
        assert_eq!(summary.latency.min, *nanos.iter().min().unwrap());
        assert_eq!(summary.latency.max, *nanos.iter().max().unwrap());
        assert_eq!(summary.latency.buckets.iter().sum::<u64>(), 200);
    }

    #[test]
    fn preserves_input_order() {
        let text: String = (0..50)
            .map(|i| format!("min-bit-flips {} 0 => {}\n", i, (i as u32).count_ones()))
            .collect();
        let cases = parse_cases(&text).unwrap();
        let (outcomes, summary) = run_cases(&cases);

        assert!(summary.is_success());
        let lines: Vec<usize> = outcomes.iter().map(|o| o.line).collect();
        assert_eq!(lines, (1..=50).collect::<Vec<_>>());
    }
}
