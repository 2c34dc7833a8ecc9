use clap::Parser;
use std::io::BufRead;

use crate::error::GameError;
use crate::session::{GameView, Outcome, PlayerAction, Session};

/// Word jumble CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited vocabulary file
    #[arg(short = 'i', long = "input")]
    pub vocab_path: Option<String>,

    /// Number of distinct matches needed to win
    #[arg(short = 'c', long = "count")]
    pub success_at_count: Option<usize>,

    /// Seed the jumble shuffle for a reproducible puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-oriented view over any buffered reader: stdin in production, a
/// `Cursor` in tests.
pub struct CliView<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliView<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameView for CliView<R> {
    fn display_session(&mut self, session: &Session) {
        println!("\nJumble: {}", session.jumble());
        println!(
            "Make {} words out of the letters above.",
            session.target_count()
        );
    }

    fn read_action(&mut self) -> Result<Option<PlayerAction>, GameError> {
        println!("\nEnter a word (or 'exit' to quit, or 'next' for a new jumble):");
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            // EOF behaves like quitting
            return Ok(Some(PlayerAction::Exit));
        }
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "" => Ok(None),
            "exit" => Ok(Some(PlayerAction::Exit)),
            "next" => Ok(Some(PlayerAction::NewGame)),
            _ => Ok(Some(PlayerAction::Submit(input.to_string()))),
        }
    }

    fn display_outcome(&mut self, outcome: Outcome, session: &Session) {
        match outcome {
            Outcome::Accepted => {
                println!(
                    "Matched! ({}/{})",
                    session.matches().len(),
                    session.target_count()
                );
                println!("Found so far: {}", session.result().matches);
            }
            Outcome::NotAWord => println!("Not in the word list."),
            Outcome::NotInJumble => println!("The jumble does not have those letters."),
            Outcome::Duplicate => println!("Already found that one."),
        }
    }

    fn display_win(&mut self, session: &Session) {
        println!(
            "You found all {} words. Well done!",
            session.target_count()
        );
    }

    fn display_exit(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_one(input: &str) -> Option<PlayerAction> {
        let mut view = CliView::new(Cursor::new(input));
        view.read_action().unwrap()
    }

    #[test]
    fn test_read_action_exit() {
        assert_eq!(read_one("exit\n"), Some(PlayerAction::Exit));
        assert_eq!(read_one("EXIT\n"), Some(PlayerAction::Exit));
    }

    #[test]
    fn test_read_action_new_game() {
        assert_eq!(read_one("next\n"), Some(PlayerAction::NewGame));
    }

    #[test]
    fn test_read_action_submits_trimmed_text() {
        assert_eq!(
            read_one("  care  \n"),
            Some(PlayerAction::Submit("care".to_string()))
        );
    }

    #[test]
    fn test_read_action_preserves_candidate_case() {
        // Normalization happens in the session, not at the prompt
        assert_eq!(
            read_one("CaRe\n"),
            Some(PlayerAction::Submit("CaRe".to_string()))
        );
    }

    #[test]
    fn test_read_action_blank_line_is_not_actionable() {
        assert_eq!(read_one("\n"), None);
        assert_eq!(read_one("   \n"), None);
    }

    #[test]
    fn test_read_action_eof_exits() {
        assert_eq!(read_one(""), Some(PlayerAction::Exit));
    }

    #[test]
    fn test_cli_structure() {
        let cli = Cli {
            vocab_path: Some("/path/to/words.txt".to_string()),
            success_at_count: Some(5),
            seed: Some(7),
            tui: false,
            debug: false,
        };
        assert_eq!(cli.vocab_path.as_deref(), Some("/path/to/words.txt"));
        assert_eq!(cli.success_at_count, Some(5));
    }
}
