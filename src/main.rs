//! Wordle Engine - CLI
//!
//! Judge protocol, solver runs, interactive play and whole-dictionary tests.
//! Set `RUST_LOG=debug` to trace game and solver decisions on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use wordle_engine::{
    commands::{
        parse_request, print_test_all_statistics, random_secret, run_play, run_request,
        run_test_all, solve,
    },
    core::Word,
    game::{Config, Game, GameMode},
    output::print_solve_result,
    solver::{Solver, StrategyType},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle-style game engine with a candidate-filtering solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Validity mode: trivial, classic (default), hard
    #[arg(short, long, global = true, default_value = "classic")]
    mode: String,

    /// Guess strategy: lexicographic (default), random
    #[arg(short, long, global = true, default_value = "lexicographic")]
    strategy: String,

    /// Word length
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Maximum number of guesses
    #[arg(short, long, global = true, default_value_t = 6)]
    tries: usize,

    /// Dictionary file, one word per line (omit for every possible word)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one FEEDBACK/FILTER/SINGLE/BATCH request from stdin (default)
    Judge,

    /// Solve a specific secret word
    Solve {
        /// The secret to solve
        word: String,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play interactively against a random or given secret
    Play {
        /// Use this secret instead of a random one
        #[arg(long)]
        secret: Option<String>,
    },

    /// Run the solver against every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn parse_mode(name: &str) -> Result<GameMode> {
    GameMode::from_name(name).with_context(|| format!("unknown mode {name:?}"))
}

fn parse_strategy(name: &str) -> Result<StrategyType> {
    StrategyType::from_name(name).with_context(|| format!("unknown strategy {name:?}"))
}

/// Build the game config from the -l/-t/-d flags
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.dictionary {
        Some(path) => Config::with_words(cli.length, cli.tries, load_from_file(path)?)?,
        None => Config::universe(cli.length, cli.tries)?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mode = parse_mode(&cli.mode)?;
    let strategy = parse_strategy(&cli.strategy)?;

    match cli.command.as_ref().unwrap_or(&Commands::Judge) {
        Commands::Judge => run_judge_command(mode, strategy),
        Commands::Solve { word, verbose } => {
            run_solve_command(&load_config(&cli)?, mode, strategy, word, *verbose)
        }
        Commands::Play { secret } => {
            run_play_command(load_config(&cli)?, mode, secret.as_deref())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(load_config(&cli)?, mode, strategy, *limit)
        }
    }
}

fn run_judge_command(mode: GameMode, strategy: StrategyType) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read request from stdin")?;

    let request = parse_request(&input)?;
    let stdout = io::stdout();
    run_request(&request, mode, strategy, &mut stdout.lock())
}

fn run_solve_command(
    config: &Config,
    mode: GameMode,
    strategy: StrategyType,
    word: &str,
    verbose: bool,
) -> Result<()> {
    let secret = Word::new(word).context("invalid secret")?;
    let mut game = Game::new(config.clone(), mode)?;
    let mut solver = Solver::new(strategy, config)?;

    let result = solve(&mut game, &mut solver, secret)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command(config: Config, mode: GameMode, secret: Option<&str>) -> Result<()> {
    let mut game = Game::new(config, mode)?;
    let secret = match secret {
        Some(text) => Word::new(text).context("invalid secret")?,
        None => random_secret(game.dictionary())?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play(&mut game, secret, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn run_test_all_command(
    config: Config,
    mode: GameMode,
    strategy: StrategyType,
    limit: Option<usize>,
) -> Result<()> {
    let game = Game::new(config.clone(), mode)?;
    let solver = Solver::new(strategy, &config)?;
    let secrets = game
        .dictionary()
        .sorted_words()
        .context("test-all needs a dictionary file or a short word length")?;

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nMode: {mode}");
    println!("Strategy: {}", strategy.name());
    println!();

    let stats = run_test_all(&game, &solver, &secrets, limit);
    print_test_all_statistics(&stats);
    Ok(())
}
