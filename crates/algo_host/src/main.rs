mod demo;
mod generator;
mod oracle;
mod runner;
mod solve;
mod stats;

use algo_common::catalog::Problem;
use algo_io::parser;
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algo", about = "Solve, check and generate algorithm cases")]
struct Cli {
    /// More diagnostics on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Worker threads for parallel solving (default: one per core).
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single case line, e.g. `two-sum [2,7,11,15] 9`.
    Eval { case: String },
    /// Solve every case in a file and compare with expectations.
    Run {
        #[arg(short, long)]
        cases: String,
        /// Also print answers of cases without an expectation.
        #[arg(long)]
        show_unchecked: bool,
    },
    /// Write randomly generated cases labelled by brute-force oracles.
    Gen {
        #[arg(long, default_value = "generated.cases")]
        out: String,
        #[arg(long, default_value_t = 1_000)]
        count: usize,
        #[arg(long, default_value_t = 12345)]
        seed: u64,
        /// Restrict to one problem (minimum-damage or shortest-palindrome).
        #[arg(long)]
        problem: Option<String>,
    },
    /// Print the worked examples.
    Demo,
    /// List the available problems.
    List,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn eval(text: &str) -> Result<()> {
    let case = parser::parse_case_line(text, 1)?.context("nothing to evaluate")?;
    let answer = solve::solve(&case.input)?;
    println!("{}", answer);

    if let Some(expected) = &case.expected {
        if &answer != expected {
            bail!("expected {}, got {}", expected, answer);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Eval { case } => eval(&case)?,
        Commands::Run {
            cases,
            show_unchecked,
        } => {
            runner::run_file(&cases, show_unchecked)?;
        }
        Commands::Gen {
            out,
            count,
            seed,
            problem,
        } => {
            let problem = problem
                .map(|name| {
                    Problem::from_name(&name).with_context(|| format!("unknown problem {:?}", name))
                })
                .transpose()?;
            generator::write_generated(&out, count, seed, problem)?;
        }
        Commands::Demo => demo::run()?,
        Commands::List => {
            for problem in Problem::ALL {
                println!("{:<22} {}", problem.name(), problem.difficulty().label());
            }
        }
    }
    Ok(())
}
