//! Wordle Cafe - CLI
//!
//! Daily Wordle and the cafe letter puzzle, with tools to generate and
//! inspect puzzle sets.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_cafe::{
    commands::{
        check_guess, format_records, run_cafe, run_expand, run_generate, run_schedule, run_simple,
        score_words, write_records,
    },
    config::AppConfig,
    core::Puzzle,
    game::{CafeGames, DailyGame, DailySchedule},
    generator::{PuzzleGenerator, expand_all},
    interactive::{App, run_tui},
    output::{
        print_check_result, print_expand_summary, print_generate_report, print_schedule,
        print_score_result,
    },
    store::MemoryStore,
    wordlists::{
        ANSWERS, Lexicon, PUZZLE_RECORDS, WORDS,
        loader::{load_from_file, load_puzzles, puzzles_from_text, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_cafe",
    about = "Daily Wordle and the cafe letter puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Guess dictionary file (default: built-in list)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Answer catalog file (default: built-in list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Puzzle record file (default: built-in puzzles)
    #[arg(long, global = true)]
    puzzles: Option<PathBuf>,

    /// Seed for reproducible puzzle generation
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI daily game (default)
    Play(DailyArgs),

    /// Daily game in plain text (no TUI)
    Simple(DailyArgs),

    /// Cafe letter puzzle, one customer after another
    Cafe,

    /// Generate a file of random letter puzzles
    Generate {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Output file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how the puzzle set expands into the game rotation
    Expand,

    /// List the daily words for the coming days
    Schedule {
        #[command(flatten)]
        daily: DailyArgs,

        /// Number of days to list
        #[arg(short = 'n', long, default_value = "7")]
        days: usize,
    },

    /// Score a daily guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Validate a cafe guess against one puzzle record
    Check {
        /// The guessed word
        guess: String,

        /// Puzzle record, `FEATURED|ANSWER|L1,...,L12`
        #[arg(short, long)]
        puzzle: String,
    },
}

#[derive(Args, Default)]
struct DailyArgs {
    /// Use this date instead of today (`YYYY-MM-DD`)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Force the word for the chosen date (must be an answer)
    #[arg(long, conflicts_with = "random_word")]
    word: Option<String>,

    /// Force a random answer for the chosen date
    #[arg(long)]
    random_word: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Flags win over the config file
    let wordlists = &mut config.wordlists;
    wordlists.dictionary = cli.dictionary.clone().or(wordlists.dictionary.take());
    wordlists.answers = cli.answers.clone().or(wordlists.answers.take());
    wordlists.puzzles = cli.puzzles.clone().or(wordlists.puzzles.take());

    let mut rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    match cli.command.unwrap_or(Commands::Play(DailyArgs::default())) {
        Commands::Play(args) => {
            let lexicon = load_lexicon(&config)?;
            let game = daily_game(&config, &lexicon, &args, &mut rng)?;
            run_tui(App::new(game, lexicon.dictionary(), lexicon.answers()))?;
        }
        Commands::Simple(args) => {
            let lexicon = load_lexicon(&config)?;
            let game = daily_game(&config, &lexicon, &args, &mut rng)?;
            run_simple(game, lexicon.dictionary())?;
        }
        Commands::Cafe => {
            let lexicon = load_lexicon(&config)?;
            let bases = load_bases(&config)?;
            let rotation = expand_all(&bases, lexicon.answers());
            let games = CafeGames::new(MemoryStore::new(), rotation, lexicon.dictionary())?;
            run_cafe(&games)?;
        }
        Commands::Generate { count, output } => {
            let lexicon = load_lexicon(&config)?;
            let generator = PuzzleGenerator::new(config.generator.clone())?;
            let report = run_generate(&generator, &lexicon, count, &mut rng, output.is_some());

            match &output {
                Some(path) => write_records(path, &report.puzzles)?,
                None => print!("{}", format_records(&report.puzzles)),
            }
            print_generate_report(&report, output.as_deref());
        }
        Commands::Expand => {
            let lexicon = load_lexicon(&config)?;
            let bases = load_bases(&config)?;
            print_expand_summary(&run_expand(&bases, lexicon.answers()));
        }
        Commands::Schedule { daily, days } => {
            let lexicon = load_lexicon(&config)?;
            let (schedule, date) = daily_schedule(&config, &lexicon, &daily, &mut rng)?;
            print_schedule(&run_schedule(&schedule, date, days));
        }
        Commands::Score { guess, target } => {
            print_score_result(&score_words(&guess, &target)?);
        }
        Commands::Check { guess, puzzle } => {
            let lexicon = load_lexicon(&config)?;
            print_check_result(&check_guess(&guess, &puzzle, lexicon.dictionary())?);
        }
    }

    Ok(())
}

/// Build the lexicon from configured files, falling back to the built-in lists
fn load_lexicon(config: &AppConfig) -> Result<Lexicon> {
    let guesses = match &config.wordlists.dictionary {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(WORDS),
    };
    let answers = match &config.wordlists.answers {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(ANSWERS),
    };

    let lexicon = Lexicon::new(guesses, answers)?;
    info!(
        dictionary = lexicon.dictionary().len(),
        answers = lexicon.answers().len(),
        "lexicon ready"
    );
    Ok(lexicon)
}

/// Base puzzles from the configured record file or the built-in set
fn load_bases(config: &AppConfig) -> Result<Vec<Puzzle>> {
    let load = match &config.wordlists.puzzles {
        Some(path) => load_puzzles(path)?,
        None => puzzles_from_text(PUZZLE_RECORDS),
    };

    anyhow::ensure!(
        !load.puzzles.is_empty(),
        "no usable puzzle records ({} skipped)",
        load.skipped
    );
    Ok(load.puzzles)
}

/// Schedule with any forced word applied, and the day it applies to
fn daily_schedule(
    config: &AppConfig,
    lexicon: &Lexicon,
    args: &DailyArgs,
    rng: &mut StdRng,
) -> Result<(DailySchedule, NaiveDate)> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let mut schedule = DailySchedule::new(lexicon.answers().to_vec(), config.daily.start_date)?;

    if let Some(word) = &args.word {
        schedule
            .set_override(date, word)
            .with_context(|| format!("cannot use {word} as the word for {date}"))?;
    } else if args.random_word {
        schedule.override_random(date, rng);
    }

    if let Some((day, word)) = schedule.current_override() {
        info!(%day, %word, "daily word overridden");
    }

    Ok((schedule, date))
}

/// Today's (or the requested day's) game, honoring any forced word
fn daily_game(
    config: &AppConfig,
    lexicon: &Lexicon,
    args: &DailyArgs,
    rng: &mut StdRng,
) -> Result<DailyGame> {
    let (schedule, date) = daily_schedule(config, lexicon, args, rng)?;
    let target = schedule.answer_for(date).clone();
    Ok(DailyGame::with_max_attempts(target, config.daily.max_attempts))
}
