//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::Session;
use crate::output::display::{print_notice, print_round, print_round_end};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Game loop over any line source
fn run_simple_with<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Game - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("Accents don't matter: 'a' also reveals 'ã' and 'á'.\n");
    println!("Commands: 'hint' for a hint, 'new' for a new word, 'quit' to exit\n");

    loop {
        let view = session.view();
        print_round(&view);

        if view.is_over() {
            print_round_end(&view, session.stats());

            let answer = get_user_input(input, "Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase();

            if matches!(answer.as_str(), "yes" | "y") {
                session.restart();
                println!("\n🔄 New word chosen!\n");
                continue;
            }

            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let Some(line) = get_user_input(input, "Letter")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.restart();
                println!("\n🔄 New word chosen!\n");
            }
            "hint" => {
                println!("\n💡 {}\n", view.hint.bright_yellow());
            }
            _ => {
                let notice = session.submit(&line);
                print_notice(notice);
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::{Category, FoodKind, TargetWord};
    use crate::game::GameConfig;
    use std::io::Cursor;

    fn kiwi_session() -> Session {
        let word = TargetWord::new("Kiwi", Category::Food(FoodKind::Fruit)).unwrap();
        Session::new(Catalog::new([word]).unwrap(), GameConfig::default())
    }

    #[test]
    fn plays_round_to_win() {
        let mut session = kiwi_session();
        let mut input = Cursor::new("hint\nk\nI\nx\nw\nno\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.stats().rounds_played, 1);
        assert_eq!(session.stats().rounds_won, 1);
        assert_eq!(session.view().errors_used, 1);
    }

    #[test]
    fn new_command_restarts() {
        let mut session = kiwi_session();
        let mut input = Cursor::new("x\nnew\nquit\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.view().errors_used, 0);
        assert_eq!(session.stats().rounds_played, 0);
    }

    #[test]
    fn play_again_starts_new_round() {
        let mut session = kiwi_session();
        let mut input = Cursor::new("k\ni\nw\nyes\nk\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.stats().rounds_won, 1);
        assert_eq!(session.view().guessed.len(), 1);
    }

    #[test]
    fn end_of_input_stops() {
        let mut session = kiwi_session();
        let mut input = Cursor::new("");
        assert!(run_simple_with(&mut session, &mut input).is_ok());
    }
}
