use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use octagon_stats::analysis::aggregate::{aggregate, Dimension, Metric};
use octagon_stats::api::client::OctagonClient;
use octagon_stats::api::models::{find_by_slug, Fighter};
use octagon_stats::config::Config;
use octagon_stats::display::output::{
    display_answer, display_endless_round, display_error, display_fighter_detail,
    display_fighters, display_group_stats, display_info, display_quiz_result, display_quiz_round,
    display_success,
};
use octagon_stats::error::AppError;
use octagon_stats::quiz::engine::{
    build_fixed_rounds, build_random_round, build_rounds, Answered, Progress, QuizSession,
};
use octagon_stats::quiz::pool::{
    nickname_pool, random_quiz_pool, tattoo_pool, QuizItem, DISTRACTOR_COUNT, TATTOO_DISTRACTORS,
};

#[derive(Parser, Debug)]
#[command(name = "Octagon Stats")]
#[command(about = "UFC fighter statistics and trivia from the Octagon API", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every fighter on the roster
    Fighters,
    /// Show one fighter's full profile (slug: lowercase name, dashes for spaces)
    Fighter { slug: String },
    /// Chart the roster along a dimension
    Stats {
        /// Grouping field
        #[arg(short, long, value_enum)]
        dimension: Dimension,

        /// Aggregated value per group (default: count)
        #[arg(short, long, value_enum, default_value = "count")]
        metric: Metric,
    },
    /// Play a trivia quiz
    Quiz {
        #[command(subcommand)]
        variant: QuizVariant,
    },
}

#[derive(Subcommand, Debug)]
enum QuizVariant {
    /// Guess fighter nicknames (10 questions)
    Nickname {
        /// Fix the shuffle for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Guess the kanji behind famous fighter tattoos (3 questions)
    Tattoo {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Endless nickname quiz: keep drawing random fighters until you quit
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env();
    let client = OctagonClient::new(config);

    match args.command {
        Command::Fighters => {
            let fighters = fetch_roster(&client)?;
            display_fighters(&fighters);
        }
        Command::Fighter { slug } => {
            let fighters = fetch_roster(&client)?;
            let fighter = find_by_slug(&fighters, &slug)
                .ok_or_else(|| AppError::FighterNotFound(slug.clone()))?;
            display_fighter_detail(fighter);
        }
        Command::Stats { dimension, metric } => {
            let fighters = fetch_roster(&client)?;
            let stats = aggregate(&fighters, dimension, metric);
            display_group_stats(&stats_title(dimension, metric), &stats, metric);
        }
        Command::Quiz { variant } => match variant {
            QuizVariant::Nickname { seed } => {
                let fighters = fetch_roster(&client)?;
                let mut rng = make_rng(seed);
                let pool = nickname_pool(&fighters, &mut rng)?;
                let rounds = build_rounds(&pool, DISTRACTOR_COUNT, &mut rng);
                display_info(&format!("{} questions. Good luck!", rounds.len()));
                play_quiz(QuizSession::new(rounds), |name| {
                    format!("What is the nickname of {}?", name)
                })?;
            }
            QuizVariant::Tattoo { seed } => {
                display_info("Fetching tattoos from the companion service...");
                let tattoos = client.fetch_tattoos()?;
                let mut rng = make_rng(seed);
                let pool = tattoo_pool(&tattoos)?;
                let rounds = build_fixed_rounds(&pool, &TATTOO_DISTRACTORS, &mut rng);
                display_info(&format!("{} questions. Good luck!", rounds.len()));
                play_quiz(QuizSession::new(rounds), |name| {
                    format!("What is the kanji of {}?", name)
                })?;
            }
            QuizVariant::Random { seed } => {
                let fighters = fetch_roster(&client)?;
                let pool = random_quiz_pool(&fighters)?;
                display_info(&format!(
                    "Endless mode over {} fighters. Type q to stop.",
                    pool.len()
                ));
                play_endless(&pool, make_rng(seed));
            }
        },
    }

    Ok(())
}

fn fetch_roster(client: &OctagonClient) -> Result<Vec<Fighter>, AppError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching fighters from the Octagon API...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.fetch_fighters();
    spinner.finish_and_clear();

    let fighters = result?;
    display_success(&format!("Fetched {} fighters", fighters.len()));
    Ok(fighters)
}

fn stats_title(dimension: Dimension, metric: Metric) -> String {
    let what = match metric {
        Metric::Count => "FIGHTERS",
        Metric::WinRate => "AVERAGE WIN RATE",
    };
    let by = match dimension {
        Dimension::Age => "AGE",
        Dimension::Background => "FIGHTING BACKGROUND",
        Dimension::Country => "BIRTH COUNTRY",
        Dimension::Gym => "GYM",
    };
    format!("{} BY {}", what, by)
}

fn play_quiz(
    mut session: QuizSession,
    question: impl Fn(&str) -> String,
) -> Result<(), AppError> {
    let total = session.len();

    loop {
        let round = match session.current_round() {
            Some(round) => round.clone(),
            None => break,
        };

        display_quiz_round(&round, session.position() + 1, total, &question(&round.item.prompt));

        let choice = match prompt_choice(round.options.len()) {
            Some(choice) => choice,
            None => {
                display_info("Quiz abandoned.");
                return Ok(());
            }
        };

        let answered = match session.submit(&round.options[choice - 1]) {
            Some(answered) => answered,
            None => break,
        };
        display_answer(&answered);

        match session.advance() {
            Progress::Next => {}
            Progress::Complete(score) => {
                display_quiz_result(&score);
                break;
            }
            Progress::Pending => break,
        }
    }

    Ok(())
}

/// One question after another, drawn at random from the whole pool, until
/// the player quits or stdin closes. No score is kept in this mode.
fn play_endless(pool: &[QuizItem], mut rng: StdRng) {
    let mut played = 0usize;
    while let Some(round) = build_random_round(pool, DISTRACTOR_COUNT, &mut rng) {
        display_endless_round(
            &round,
            played + 1,
            &format!("What is the nickname of {}?", round.item.prompt),
        );

        let choice = match prompt_choice(round.options.len()) {
            Some(choice) => choice,
            None => break,
        };

        display_answer(&Answered {
            is_correct: round.options[choice - 1] == round.item.correct_value,
            correct_value: round.item.correct_value.clone(),
        });
        played += 1;
    }

    display_info(&format!("Thanks for playing! {} questions answered.", played));
}

/// Reads a 1-based option number from stdin, reprompting on bad input.
/// Returns None when the player types q or stdin closes.
fn prompt_choice(option_count: usize) -> Option<usize> {
    let stdin = io::stdin();
    loop {
        print!("Your answer (1-{}): ", option_count);
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return None;
        }

        match trimmed.parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => return Some(n),
            _ => println!("Please type a number between 1 and {}.", option_count),
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
