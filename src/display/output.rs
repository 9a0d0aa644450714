use crate::analysis::aggregate::{GroupStat, Metric};
use crate::api::models::Fighter;
use crate::quiz::engine::{Answered, QuizRound, QuizScore};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct FighterRow {
    name: String,
    nickname: String,
    category: String,
    record: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "#")]
    rank: String,
    group: String,
    fighters: String,
    #[tabled(rename = "avg win rate")]
    win_rate: String,
    chart: String,
}

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    number: String,
    question: String,
    result: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_fighters(fighters: &[Fighter]) {
    println!(
        "\n{}",
        format!("🥊 UFC ROSTER ({} fighters)", fighters.len())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<FighterRow> = fighters
        .iter()
        .map(|f| FighterRow {
            name: f.name.clone(),
            nickname: f.nickname.clone(),
            category: f.category.clone(),
            record: format!("{}-{}-{}", f.wins, f.losses, f.draws),
            win_rate: format!("{:.1}%", f.win_rate() * 100.0),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_fighter_detail(fighter: &Fighter) {
    println!("\n{}", fighter.name.bold().cyan());
    if !fighter.nickname.is_empty() {
        println!("{}", format!("({})", fighter.nickname).cyan());
    }
    println!("{}", "=".repeat(40).cyan());

    let inches = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map(|n| format!("{}\" ({:.1} cm)", v, n * 2.54))
            .unwrap_or_else(|_| v.to_string())
    };
    let pounds = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map(|n| format!("{} lbs ({:.1} kg)", v, n / 2.205))
            .unwrap_or_else(|_| v.to_string())
    };

    let fields = [
        ("Category", fighter.category.clone()),
        (
            "Fight Record",
            format!("{}-{}-{}", fighter.wins, fighter.losses, fighter.draws),
        ),
        ("Place of Birth", fighter.place_of_birth.clone()),
        ("Training Facility", fighter.trains_at.clone()),
        ("Age", fighter.age.clone()),
        ("Height", inches(&fighter.height)),
        ("Reach", inches(&fighter.reach)),
        ("Leg Reach", inches(&fighter.leg_reach)),
        ("Weight", pounds(&fighter.weight)),
        ("Octagon Debut", fighter.octagon_debut.clone()),
        ("Fighting Style", fighter.fighting_style.clone()),
        ("Status", fighter.status.clone()),
    ];

    for (label, value) in fields {
        if !value.trim().is_empty() {
            println!("  {:<18} {}", format!("{}:", label).bold(), value);
        }
    }

    if !fighter.img_url.is_empty() {
        println!("  {:<18} {}", "Photo:".bold(), fighter.img_url);
    }
    println!();
}

pub fn display_group_stats(title: &str, stats: &[GroupStat], metric: Metric) {
    println!("\n{}", format!("📊 {}", title).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if stats.is_empty() {
        println!("{}", "No data to chart".yellow());
        return;
    }

    let max_value = stats
        .iter()
        .map(|s| s.metric_value(metric))
        .fold(0.0_f64, f64::max);

    let rows: Vec<StatRow> = stats
        .iter()
        .enumerate()
        .map(|(idx, stat)| StatRow {
            rank: format!("#{}", idx + 1),
            group: stat.key.clone(),
            fighters: stat.count.to_string(),
            win_rate: format!("{:.1}%", stat.average_win_rate * 100.0),
            chart: bar(stat.metric_value(metric), max_value),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

// Horizontal bar scaled against the largest bucket, never empty for a
// non-zero value.
fn bar(value: f64, max_value: f64) -> String {
    if max_value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max_value) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.max(usize::from(value > 0.0)))
}

pub fn display_quiz_round(round: &QuizRound, number: usize, total: usize, question: &str) {
    println!(
        "\n{}",
        format!("Question {}/{}", number, total).bold().cyan()
    );
    println!("{}", question.bold());
    if !round.item.image_url.is_empty() {
        println!("{} {}", "🖼".cyan(), round.item.image_url);
    }
    for (idx, option) in round.options.iter().enumerate() {
        println!("  {}. {}", idx + 1, option);
    }
}

pub fn display_endless_round(round: &QuizRound, number: usize, question: &str) {
    println!("\n{}", format!("Question {}", number).bold().cyan());
    println!("{}", question.bold());
    if !round.item.image_url.is_empty() {
        println!("{} {}", "🖼".cyan(), round.item.image_url);
    }
    for (idx, option) in round.options.iter().enumerate() {
        println!("  {}. {}", idx + 1, option);
    }
}

pub fn display_answer(answered: &Answered) {
    if answered.is_correct {
        println!("{}", "✅ Correct!".green().bold());
    } else {
        println!(
            "{} The answer was {}",
            "❌ Wrong...".red().bold(),
            answered.correct_value.bold()
        );
    }
}

pub fn display_quiz_result(score: &QuizScore) {
    println!("\n{}", "🏁 QUIZ RESULT".bold().cyan());
    println!("{}\n", "=".repeat(40).cyan());

    let rows: Vec<ResultRow> = score
        .outcomes
        .iter()
        .enumerate()
        .map(|(idx, outcome)| ResultRow {
            number: format!("Q{}", idx + 1),
            question: outcome.question.clone(),
            result: if outcome.is_correct {
                "✅".to_string()
            } else {
                "❌".to_string()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    let summary = format!("Score: {} / {}", score.correct, score.total);
    if score.correct == score.total {
        println!("\n{} {}", summary.bold().green(), "Perfect run! 🎉".green());
    } else {
        println!("\n{}", summary.bold());
    }
    println!();
}
