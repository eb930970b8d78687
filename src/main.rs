use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ledger_calc::{CalcConfig, Evaluator, FileSink, Ledger, Session};

/// Interactive calculator that keeps an append-only history
#[derive(Parser, Debug)]
#[command(name = "ledger-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// File the history is appended to (overrides config)
    #[arg(long, value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Report bad operands, zero divisors and unknown operators as errors
    #[arg(long)]
    strict: bool,

    /// Seed for the unknown-operator fallback
    #[arg(long)]
    seed: Option<u64>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = CalcConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(path) = cli.history_file {
        config.history_file = path;
    }
    if cli.strict {
        config.strict = true;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    tracing::info!(
        history_file = %config.history_file.display(),
        strict = config.strict,
        "starting calculator"
    );

    let evaluator = match config.seed {
        Some(seed) => Evaluator::seeded(seed),
        None => Evaluator::from_os_rng(),
    };
    let mut evaluator = evaluator.with_policy(config.error_policy());
    let mut ledger = Ledger::new(FileSink::new(&config.history_file));

    let stdin = io::stdin();
    Session::new(&mut evaluator, &mut ledger, &config.system_prompt)
        .run(stdin.lock(), io::stdout().lock())
        .context("terminal I/O failed")?;

    Ok(())
}
