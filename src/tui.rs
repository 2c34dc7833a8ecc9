//! Full-screen terminal interface for the jumble game.
//!
//! Renders the jumble, the found-word list, an input box, and a status
//! line; implements `GameView` so the session loop drives it exactly like
//! the line-oriented CLI.
//!
//! Keys: Enter submits the typed word, Ctrl-N deals a new jumble, Esc or
//! Ctrl-C leaves. The win screen waits for one more key before closing.

use crate::error::GameError;
use crate::session::{GameView, Outcome, PlayerAction, Session};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_INPUT_LEN: usize = 64;

// Style constants for consistent UI
const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const JUMBLE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MATCH_STYLE: Style = Style::new().fg(Color::Green);
const REJECT_STYLE: Style = Style::new().fg(Color::Red);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const HINT_STYLE: Style = Style::new().fg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Accepted,
    NotAWord,
    NotInJumble,
    Duplicate,
    Won,
}

impl Status {
    fn line(self) -> Option<(&'static str, Style)> {
        match self {
            Self::Idle => None,
            Self::Accepted => Some(("Matched!", MATCH_STYLE)),
            Self::NotAWord => Some(("Not in the word list.", REJECT_STYLE)),
            Self::NotInJumble => Some(("The jumble does not have those letters.", REJECT_STYLE)),
            Self::Duplicate => Some(("Already found that one.", HINT_STYLE)),
            Self::Won => Some(("You found them all! Press any key to leave.", WIN_STYLE)),
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Accepted => Self::Accepted,
            Outcome::NotAWord => Self::NotAWord,
            Outcome::NotInJumble => Self::NotInJumble,
            Outcome::Duplicate => Self::Duplicate,
        }
    }
}

pub struct TuiView {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    input: String,
    jumble: String,
    target_count: usize,
    found_words: Vec<String>,
    status: Status,
}

impl TuiView {
    pub fn new() -> Result<Self, GameError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            input: String::new(),
            jumble: String::new(),
            target_count: 0,
            found_words: Vec::new(),
            status: Status::Idle,
        })
    }

    fn sync(&mut self, session: &Session) {
        self.jumble = session.jumble().to_string();
        self.target_count = session.target_count();
        self.found_words = session
            .matches()
            .iter()
            .map(|entry| entry.trim_end().to_string())
            .collect();
    }

    fn draw(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            input,
            jumble,
            target_count,
            found_words,
            status,
        } = self;
        terminal.draw(|frame: &mut Frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            let jumble_line = Line::from(Span::styled(jumble.as_str(), JUMBLE_STYLE));
            frame.render_widget(
                Paragraph::new(jumble_line).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(Span::styled(" Jumble ", TITLE_STYLE)),
                ),
                chunks[0],
            );

            let found: Vec<Line> = found_words
                .iter()
                .map(|word| Line::from(Span::styled(word.as_str(), MATCH_STYLE)))
                .collect();
            frame.render_widget(
                Paragraph::new(found).wrap(Wrap { trim: true }).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" Found {}/{} ", found_words.len(), target_count)),
                ),
                chunks[1],
            );

            frame.render_widget(
                Paragraph::new(input.as_str()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Your word (Enter: submit | Ctrl-N: new jumble | Esc: quit) "),
                ),
                chunks[2],
            );

            if let Some((text, style)) = status.line() {
                frame.render_widget(Paragraph::new(Span::styled(text, style)), chunks[3]);
            }
        })?;
        Ok(())
    }

    fn redraw(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<PlayerAction> {
        match key.code {
            KeyCode::Esc => Some(PlayerAction::Exit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(PlayerAction::Exit)
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(PlayerAction::NewGame)
            }
            KeyCode::Enter => {
                let text = self.input.trim().to_string();
                self.input.clear();
                if text.is_empty() {
                    None
                } else {
                    Some(PlayerAction::Submit(text))
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) if !c.is_control() && self.input.len() < MAX_INPUT_LEN => {
                self.input.push(c);
                None
            }
            _ => {
                debug_log!("Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl GameView for TuiView {
    fn display_session(&mut self, session: &Session) {
        info_log!("TUI: new jumble dealt");
        self.sync(session);
        self.input.clear();
        self.status = Status::Idle;
        self.redraw();
    }

    fn read_action(&mut self) -> Result<Option<PlayerAction>, GameError> {
        loop {
            self.redraw();
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            let key = match event::read()? {
                Event::Key(key) => key,
                other => {
                    debug_log!("Ignoring event: {:?}", other);
                    continue;
                }
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = self.handle_key(key) {
                return Ok(Some(action));
            }
        }
    }

    fn display_outcome(&mut self, outcome: Outcome, session: &Session) {
        self.sync(session);
        self.status = Status::from(outcome);
        self.redraw();
    }

    fn display_win(&mut self, session: &Session) {
        self.sync(session);
        self.input.clear();
        self.status = Status::Won;
        self.redraw();
        if let Err(e) = self.wait_for_key() {
            debug_log!("Input error on win screen: {}", e);
        }
    }

    fn display_exit(&mut self) {
        // Teardown happens in Drop
    }
}

impl Drop for TuiView {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_outcomes() {
        assert_eq!(Status::from(Outcome::Accepted), Status::Accepted);
        assert_eq!(Status::from(Outcome::NotAWord), Status::NotAWord);
        assert_eq!(Status::from(Outcome::NotInJumble), Status::NotInJumble);
        assert_eq!(Status::from(Outcome::Duplicate), Status::Duplicate);
    }

    #[test]
    fn test_status_lines_cover_rejections() {
        assert!(Status::Idle.line().is_none());
        for status in [
            Status::Accepted,
            Status::NotAWord,
            Status::NotInJumble,
            Status::Duplicate,
            Status::Won,
        ] {
            assert!(status.line().is_some());
        }
    }
}
