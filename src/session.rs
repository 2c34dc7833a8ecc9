use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::jumble::jumbled;
use crate::letterbag::LetterBag;
use crate::vocab::Vocab;

/// Separator appended to each recorded match; the serialized match list is
/// the plain concatenation of the entries.
pub const MATCH_DELIMITER: &str = " ";

/// One player's game: the jumble they were dealt, how many distinct words
/// they need, and what they have found so far.
#[derive(Debug, Clone)]
pub struct Session {
    jumble: String,
    target_count: usize,
    matches: Vec<String>,
}

/// What happened to a submitted candidate. Every variant is a normal
/// result; rejections carry no error semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    NotAWord,
    NotInJumble,
    Duplicate,
}

/// Snapshot handed to the surface after each submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResult {
    pub matches: String,
    pub found: bool,
}

impl Session {
    pub fn begin(vocab: &Vocab, success_at_count: usize, rng: &mut impl Rng) -> Self {
        let target_count = vocab.len().min(success_at_count);
        let jumble = jumbled(vocab.as_list(), target_count, rng);
        debug!("new session: target {target_count}, jumble {jumble:?}");
        Self {
            jumble,
            target_count,
            matches: Vec::new(),
        }
    }

    /// One state-machine step. The candidate is untrusted input and is
    /// normalized here; the checks run against the stored jumble and the
    /// shared vocabulary.
    pub fn submit(&mut self, vocab: &Vocab, text: &str) -> Outcome {
        let candidate = text.trim().to_lowercase();
        let in_jumble = LetterBag::new(&self.jumble).contains(&candidate);
        let is_word = vocab.has(&candidate);
        let entry = format!("{candidate}{MATCH_DELIMITER}");

        if !is_word {
            debug!("{candidate:?} is not in the word list");
            Outcome::NotAWord
        } else if !in_jumble {
            debug!("{candidate:?} needs letters the jumble does not have");
            Outcome::NotInJumble
        } else if self.matches.contains(&entry) {
            debug!("{candidate:?} was already found");
            Outcome::Duplicate
        } else {
            self.matches.push(entry);
            debug!(
                "{candidate:?} accepted ({}/{})",
                self.matches.len(),
                self.target_count
            );
            Outcome::Accepted
        }
    }

    pub fn result(&self) -> SubmitResult {
        SubmitResult {
            matches: self.matches.concat(),
            found: self.found(),
        }
    }

    pub fn jumble(&self) -> &str {
        &self.jumble
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Matches in the order they were found, each with its trailing
    /// delimiter.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn found(&self) -> bool {
        self.matches.len() >= self.target_count
    }
}

/// Everything the player does, as the surfaces report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Seam between the game loop and its surfaces. The line-oriented CLI and
/// the full-screen TUI both implement this; tests drive the loop through a
/// reader-backed CLI view.
pub trait GameView {
    fn display_session(&mut self, session: &Session);
    /// `Ok(None)` means "nothing actionable yet" and the loop asks again.
    fn read_action(&mut self) -> Result<Option<PlayerAction>, GameError>;
    fn display_outcome(&mut self, outcome: Outcome, session: &Session);
    fn display_win(&mut self, session: &Session);
    fn display_exit(&mut self);
}

/// The interactive loop: deal a session, then apply player actions until
/// the game is won or the player leaves. `NewGame` replaces the session
/// wholesale, matching a reload of the original game's main page.
pub fn play(
    vocab: &Vocab,
    config: &GameConfig,
    rng: &mut impl Rng,
    view: &mut impl GameView,
) -> Result<(), GameError> {
    let mut session = Session::begin(vocab, config.success_at_count, rng);
    view.display_session(&session);

    loop {
        let Some(action) = view.read_action()? else {
            continue;
        };
        match action {
            PlayerAction::Exit => {
                view.display_exit();
                break;
            }
            PlayerAction::NewGame => {
                session = Session::begin(vocab, config.success_at_count, rng);
                view.display_session(&session);
            }
            PlayerAction::Submit(text) => {
                let outcome = session.submit(vocab, &text);
                view.display_outcome(outcome, &session);
                if session.found() {
                    view.display_win(&session);
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn four_word_vocab() -> Vocab {
        Vocab::from_str_list("cat\ncar\ncare\nrace\n")
    }

    // A session with a known jumble, bypassing the random deal.
    fn fixed_session(jumble: &str, target_count: usize) -> Session {
        Session {
            jumble: jumble.to_string(),
            target_count,
            matches: Vec::new(),
        }
    }

    #[test]
    fn test_reject_word_missing_from_vocabulary() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 2);
        assert_eq!(session.submit(&vocab, "acre"), Outcome::NotAWord);
        assert!(session.matches().is_empty());
    }

    #[test]
    fn test_reject_word_not_constructible_from_jumble() {
        let vocab = four_word_vocab();
        // Letters of "care" and "race": no 't' available
        let mut session = fixed_session("ecar race", 2);
        assert_eq!(session.submit(&vocab, "cat"), Outcome::NotInJumble);
        assert!(session.matches().is_empty());
    }

    #[test]
    fn test_accept_then_win_at_target() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 2);

        assert_eq!(session.submit(&vocab, "car"), Outcome::Accepted);
        assert_eq!(session.matches(), &["car ".to_string()]);
        assert!(!session.found());

        assert_eq!(session.submit(&vocab, "care"), Outcome::Accepted);
        assert_eq!(
            session.matches(),
            &["car ".to_string(), "care ".to_string()]
        );
        assert!(session.found());
    }

    #[test]
    fn test_duplicate_submission_is_a_noop() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 3);

        assert_eq!(session.submit(&vocab, "car"), Outcome::Accepted);
        let before = session.result();
        assert_eq!(session.submit(&vocab, "car"), Outcome::Duplicate);
        assert_eq!(session.submit(&vocab, "  CAR  "), Outcome::Duplicate);
        assert_eq!(session.result(), before);
    }

    #[test]
    fn test_found_is_monotonic() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 1);

        assert_eq!(session.submit(&vocab, "car"), Outcome::Accepted);
        assert!(session.found());
        // Further valid words keep the session won
        assert_eq!(session.submit(&vocab, "race"), Outcome::Accepted);
        assert!(session.found());
        assert_eq!(session.submit(&vocab, "car"), Outcome::Duplicate);
        assert!(session.found());
    }

    #[test]
    fn test_candidate_input_is_normalized() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 2);
        assert_eq!(session.submit(&vocab, "  CaRe\n"), Outcome::Accepted);
        assert_eq!(session.matches(), &["care ".to_string()]);
    }

    #[test]
    fn test_empty_candidate_is_not_a_word() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 2);
        assert_eq!(session.submit(&vocab, ""), Outcome::NotAWord);
        assert_eq!(session.submit(&vocab, "   "), Outcome::NotAWord);
    }

    #[test]
    fn test_begin_clamps_target_to_vocab_size() {
        let vocab = Vocab::from_str_list("cat\ncar\ncare\n");
        let mut rng = StdRng::seed_from_u64(5);
        let session = Session::begin(&vocab, 100, &mut rng);
        assert_eq!(session.target_count(), 3);
    }

    #[test]
    fn test_begin_deals_jumble_and_resets_matches() {
        let vocab = four_word_vocab();
        let mut rng = StdRng::seed_from_u64(9);
        let session = Session::begin(&vocab, 2, &mut rng);
        assert_eq!(session.target_count(), 2);
        assert!(!session.jumble().is_empty());
        assert!(session.matches().is_empty());
        assert!(!session.found());
    }

    #[test]
    fn test_result_concatenates_matches() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 2);
        session.submit(&vocab, "car");
        session.submit(&vocab, "care");
        let result = session.result();
        assert_eq!(result.matches, "car care ");
        assert!(result.found);
    }

    #[test]
    fn test_result_serializes_to_wire_shape() {
        let vocab = four_word_vocab();
        let mut session = fixed_session("ecar race", 2);
        session.submit(&vocab, "car");
        let json = serde_json::to_value(session.result()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "matches": "car ", "found": false })
        );
    }
}
