//! Display functions for game state and command results

use super::formatters::{CellKind, cell_glyph, cell_kind, error_bar};
use crate::catalog::Catalog;
use crate::commands::SimulationResult;
use crate::core::Notice;
use crate::game::{RoundView, Statistics};
use colored::{ColoredString, Colorize};

fn colored_cell(c: char) -> ColoredString {
    let text = cell_glyph(c).to_string();
    match cell_kind(c) {
        CellKind::Hidden => text.red(),
        CellKind::Separator => text.yellow(),
        CellKind::Letter => text.bright_green().bold(),
    }
}

/// Print the current state of a round
pub fn print_round(view: &RoundView) {
    println!("{}", "─".repeat(60).cyan());

    let cells: Vec<String> = view
        .display
        .chars()
        .map(|c| colored_cell(c).to_string())
        .collect();
    println!("\n   {}\n", cells.join(" "));

    println!(
        "   Something about \"{}\" with {} letters",
        view.category.bright_cyan(),
        view.letter_count
    );

    if !view.guessed.is_empty() {
        let tags: Vec<String> = view
            .guessed
            .iter()
            .map(|g| {
                let letter = g.letter.to_string();
                if g.was_correct {
                    letter.green().to_string()
                } else {
                    letter.red().strikethrough().to_string()
                }
            })
            .collect();
        println!("   Guessed: {}", tags.join(" "));
    }

    println!(
        "   Errors:  [{}] {}/{}\n",
        error_bar(view.errors_used, view.error_limit).red(),
        view.errors_used,
        view.error_limit
    );
}

/// Print the notice for a submission
pub fn print_notice(notice: Notice) {
    let text = notice.to_string();
    let line = match notice {
        Notice::Found(_) => format!("✅ {}", text.green()),
        Notice::NotFound(_) => format!("❌ {}", text.red()),
        Notice::Duplicate(_) | Notice::InvalidInput | Notice::RoundOver(_) => {
            format!("⚠️  {}", text.yellow())
        }
    };
    println!("{line}\n");
}

/// Print the win or loss banner for a finished round
pub fn print_round_end(view: &RoundView, stats: &Statistics) {
    let answer = view.answer.as_deref().unwrap_or_default();

    println!("{}", "═".repeat(60).bright_cyan());
    if view.is_won {
        println!(
            "{}",
            "    🎉 🥳 🎆  C O N G R A T U L A T I O N S !  🎆 🥳 🎉    "
                .bright_green()
                .bold()
        );
        println!("\n  The word was: {}", answer.bright_yellow().bold());
    } else {
        println!(
            "{}",
            "    💔 😭  Y O U   L O S T !  😭 💔    ".bright_red().bold()
        );
        println!("\n  The word was: {}", answer.bright_yellow().bold());
    }
    println!(
        "\n  Session: {} rounds, {} won ({:.0}%)",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the catalog grouped by category
pub fn print_catalog(catalog: &Catalog) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD CATALOG:".bright_cyan().bold(),
        format!("{} words", catalog.len()).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    let mut current_label = "";
    for group in catalog.groups() {
        let category = group.category();
        if category.label() != current_label {
            current_label = category.label();
            println!("\n📂 {}", current_label.bright_cyan().bold());
        }

        let words: Vec<&str> = group.words().iter().map(|w| w.text()).collect();
        println!(
            "   {:<16} {}",
            format!("{}:", category.subcategory_label()).bright_white(),
            words.join(", ")
        );
    }
    println!();
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Guesser:          {}", result.guesser);
    println!("   Seed:             {}", result.seed);
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!("   Avg. guesses:     {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.won > 0 {
        println!("\n📈 {}", "Errors in won rounds:".bright_cyan().bold());
        let mut rows: Vec<(u32, usize)> = result
            .error_distribution
            .iter()
            .map(|(&errors, &count)| (errors, count))
            .collect();
        rows.sort_unstable();

        for (errors, count) in rows {
            let pct = (count as f64 / result.won as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {errors}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n🧩 {}", "Most lost words:".bright_cyan().bold());
        for (word, losses) in &result.hardest_words {
            println!("   {:<24} {losses}", word.bright_white());
        }
    }
}
