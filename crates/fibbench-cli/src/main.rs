use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use fibbench_core::{
    fib_iterative, fib_memoized, fib_naive, timed, FibResult, Measurement, Strategy, Term,
    TermCache,
};

#[derive(Parser)]
#[command(
    name = "fibbench",
    version,
    about = "Fibonacci terms three ways, with per-call timing"
)]
struct Cli {
    /// Term index n; prompts on stdin when omitted
    #[arg(allow_negative_numbers = true)]
    n: Option<i64>,

    /// Computation strategy
    #[arg(short, long, default_value = "iterative")]
    strategy: CliStrategy,

    /// Run every strategy on the same n, one report line each
    #[arg(long, conflicts_with = "strategy")]
    compare: bool,

    /// Emit each report as a JSON object instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliStrategy {
    Naive,
    Memoized,
    Iterative,
}

impl From<CliStrategy> for Strategy {
    fn from(s: CliStrategy) -> Self {
        match s {
            CliStrategy::Naive => Strategy::Naive,
            CliStrategy::Memoized => Strategy::Memoized,
            CliStrategy::Iterative => Strategy::Iterative,
        }
    }
}

/// Dispatches one timed top-level call. The cache belongs to the caller so
/// repeated memoized runs in one process reuse earlier terms.
fn run_strategy(
    strategy: Strategy,
    cache: &mut TermCache,
    n: i64,
) -> (FibResult<Term>, Measurement) {
    match strategy {
        Strategy::Naive => timed(strategy, n, fib_naive),
        Strategy::Memoized => timed(strategy, n, |n| fib_memoized(cache, n)),
        Strategy::Iterative => timed(strategy, n, fib_iterative),
    }
}

fn parse_term_index(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("no input provided");
    }
    trimmed
        .parse::<i64>()
        .with_context(|| format!("not a base-10 integer: {trimmed:?}"))
}

fn prompt_for_n() -> Result<i64> {
    print!("Enter the number of Fibonacci numbers to calculate: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    parse_term_index(&line)
}

fn report(result: FibResult<Term>, measurement: &Measurement, json: bool) -> Result<()> {
    let term = result?;
    if json {
        let mut value = serde_json::to_value(measurement)?;
        // u128 does not fit a JSON number reliably; report it as a string
        value["result"] = serde_json::Value::String(term.to_string());
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{measurement}");
        println!("Result: {term}");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let n = match cli.n {
        Some(n) => n,
        None => prompt_for_n()?,
    };
    tracing::debug!(n, compare = cli.compare, "starting run");

    let mut cache = TermCache::new();
    if cli.compare {
        // Naive runs unbounded; for large n it may take arbitrarily long,
        // and that is the point of the comparison.
        for strategy in [Strategy::Naive, Strategy::Memoized, Strategy::Iterative] {
            let (result, measurement) = run_strategy(strategy, &mut cache, n);
            report(result, &measurement, cli.json)?;
        }
    } else {
        let (result, measurement) = run_strategy(cli.strategy.into(), &mut cache, n);
        report(result, &measurement, cli.json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_term_index() {
        assert_eq!(parse_term_index("10").unwrap(), 10);
        assert_eq!(parse_term_index("  7\n").unwrap(), 7);
        assert_eq!(parse_term_index("-3").unwrap(), -3);
        assert!(parse_term_index("").is_err());
        assert!(parse_term_index("ten").is_err());
        assert!(parse_term_index("3.5").is_err());
    }

    #[test]
    fn test_run_strategy_end_to_end() {
        let mut cache = TermCache::new();
        for (n, expected) in [(0, 0), (1, 1), (7, 13), (10, 55)] {
            for strategy in [Strategy::Naive, Strategy::Memoized, Strategy::Iterative] {
                let (result, measurement) = run_strategy(strategy, &mut cache, n);
                assert_eq!(result.unwrap(), expected, "{strategy} at n={n}");
                assert_eq!(measurement.n, n);
            }
        }
    }

    #[test]
    fn test_run_strategy_rejects_negative() {
        let mut cache = TermCache::new();
        for strategy in [Strategy::Naive, Strategy::Memoized, Strategy::Iterative] {
            let (result, _) = run_strategy(strategy, &mut cache, -1);
            assert!(result.is_err(), "{strategy} accepted -1");
        }
    }

    #[test]
    fn test_memoized_cache_survives_across_runs() {
        let mut cache = TermCache::new();
        run_strategy(Strategy::Memoized, &mut cache, 20).0.unwrap();
        let len = cache.len();
        run_strategy(Strategy::Memoized, &mut cache, 10).0.unwrap();
        assert_eq!(cache.len(), len);
    }

    #[test]
    fn test_json_report_shape() {
        let mut cache = TermCache::new();
        let (result, measurement) = run_strategy(Strategy::Iterative, &mut cache, 10);
        let mut value = serde_json::to_value(&measurement).unwrap();
        value["result"] = serde_json::Value::String(result.unwrap().to_string());
        assert_eq!(value["strategy"], "iterative");
        assert_eq!(value["n"], 10);
        assert_eq!(value["result"], "55");
        assert!(value["elapsed_secs"].as_f64().unwrap() >= 0.0);
    }
}
