//! Guesswork — entry point.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use guesswork::{search, SearchOutcome, SearchRange, TargetOracle};
use guesswork_cli::config::{resolve_range, RangeConfig};
use guesswork_cli::error::{exit_code_of, CliError, CliResult};
use guesswork_cli::{repl, report, script};

#[derive(Parser)]
#[command(
    name = "guesswork",
    about = "Think of a number; guesswork finds it by binary search",
    version
)]
struct Cli {
    /// Lowest value in the range (also GUESSWORK_LOW).
    #[arg(long, global = true, allow_negative_numbers = true)]
    low: Option<i64>,

    /// Highest value in the range, inclusive (also GUESSWORK_HIGH).
    #[arg(long, global = true, allow_negative_numbers = true)]
    high: Option<i64>,

    /// Print the outcome as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer each guess at an interactive prompt (default).
    Play,

    /// Replay replies from a file, one or more tokens per line.
    ///
    /// Use `-` to read the script from standard input.
    Script {
        /// Path to the reply script.
        path: PathBuf,
    },

    /// Let the program answer for a known target.
    Simulate {
        /// The number to find.
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
    },

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   guesswork completions bash > ~/.local/share/bash-completion/completions/guesswork
    ///   guesswork completions zsh > ~/.zfunc/_guesswork
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_of(&err));
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "guesswork", &mut std::io::stdout());
        return Ok(());
    }

    let bounds = resolve_range(cli.low, cli.high)?;
    let range = SearchRange::from_bounds(bounds.low, bounds.high)?;
    tracing::info!("Searching {} values from {} to {}", range.len(), bounds.low, bounds.high);

    let (outcome, replay) = match command {
        Commands::Play => (repl::run(&range)?, false),
        Commands::Script { path } => {
            let mut oracle = script::load_script(&path)
                .with_context(|| format!("reading reply script {}", path.display()))?;
            let outcome = search(&range, &mut oracle)?;
            if oracle.remaining() > 0 {
                tracing::warn!("{} unused replies left in script", oracle.remaining());
            }
            (outcome, true)
        }
        Commands::Simulate { target } => {
            if !bounds.contains(target) {
                return Err(CliError::Config(format!(
                    "target {target} is outside {}..={}",
                    bounds.low, bounds.high
                ))
                .into());
            }
            let outcome = search(&range, &mut TargetOracle::new(target))?;
            (outcome, true)
        }
        Commands::Completions { .. } => return Ok(()),
    };

    print_outcome(bounds, &outcome, replay, cli.json).context("writing outcome")
}

fn print_outcome(
    bounds: RangeConfig,
    outcome: &SearchOutcome,
    replay: bool,
    json: bool,
) -> CliResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        report::write_json(&mut out, &report::Report::new(bounds, outcome))?;
    } else {
        if replay {
            report::write_steps(&mut out, outcome)?;
        }
        report::write_outcome(&mut out, outcome)?;
    }
    out.flush()?;
    Ok(())
}
