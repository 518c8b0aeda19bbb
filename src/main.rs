//! Mastermind Strategy Builder - CLI
//!
//! Builds and explores Knuth's minimax strategy for Mastermind.
//! Classic game: every code solved in at most 5 guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_knuth::{
    commands::{SolveConfig, analyze_guess, build_strategy, run_stats, solve_code},
    core::GameConfig,
    output::{
        print_analysis_result, print_progress, print_solve_result, print_statistics,
        print_strategy_report,
    },
    solver::Solver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_knuth",
    about = "Mastermind strategy builder using Knuth's minimax algorithm",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in a code
    #[arg(short, long, global = true, default_value = "4")]
    digits: usize,

    /// Number of colours (digits 1..=N)
    #[arg(short, long, global = true, default_value = "6")]
    colors: u8,

    /// Disallow repeated digits within a code
    #[arg(long, global = true)]
    no_repeats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full strategy tree and print it (default)
    Strategy {
        /// Print every game's guesses while building
        #[arg(short, long)]
        progress: bool,
    },

    /// Solve a specific secret code
    Solve {
        /// The secret to solve (random if omitted)
        code: Option<String>,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every code and report guess statistics
    Stats,

    /// Show how a guess splits all possible codes
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.digits, cli.colors, !cli.no_repeats)
        .context("invalid game configuration")?;
    let solver = Solver::new(config);

    // Default to building the strategy if no command given
    let command = cli.command.unwrap_or(Commands::Strategy { progress: false });

    match command {
        Commands::Strategy { progress } => {
            run_strategy_command(&solver, progress);
            Ok(())
        }
        Commands::Solve { code, verbose } => run_solve_command(&solver, code, verbose),
        Commands::Stats => {
            run_stats_command(&solver);
            Ok(())
        }
        Commands::Analyze { guess } => run_analyze_command(&solver, &guess),
    }
}

fn run_strategy_command(solver: &Solver, progress: bool) {
    let report = build_strategy(solver, |trace| {
        if progress {
            print_progress(trace);
        }
    });
    print_strategy_report(&report, solver.config());
}

fn run_solve_command(solver: &Solver, code: Option<String>, verbose: bool) -> Result<()> {
    let config = SolveConfig::new(code);
    let trace = solve_code(&config, solver).context("cannot solve code")?;

    print_solve_result(&trace, verbose);
    Ok(())
}

fn run_stats_command(solver: &Solver) {
    println!("\n{}", "═".repeat(70));
    println!(" Knuth Minimax Strategy ");
    println!("{}", "═".repeat(70));
    println!("\nVariant: {}", solver.config());
    println!("Opening guess: {}", solver.space().first_guess());
    println!();

    let stats = run_stats(solver);
    print_statistics(&stats);
}

fn run_analyze_command(solver: &Solver, guess: &str) -> Result<()> {
    let result = analyze_guess(guess, solver).with_context(|| format!("cannot analyze '{guess}'"))?;
    print_analysis_result(&result);
    Ok(())
}
