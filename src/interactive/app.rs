//! TUI application state and logic

use crate::core::Notice;
use crate::game::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub show_hint: bool,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl From<Notice> for MessageStyle {
    fn from(notice: Notice) -> Self {
        match notice {
            Notice::Found(_) => Self::Success,
            Notice::NotFound(_) => Self::Error,
            Notice::InvalidInput | Notice::Duplicate(_) | Notice::RoundOver(_) => Self::Info,
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            show_hint: false,
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.add_message("Welcome! Guess the hidden word letter by letter.", MessageStyle::Info);
        app.add_message("Accents don't matter: 'a' also finds 'ã'.", MessageStyle::Info);
        app
    }

    /// Submit one typed character as a guess
    pub fn submit(&mut self, c: char) {
        let notice = self.session.submit(&c.to_string());
        self.add_message(&notice.to_string(), notice.into());

        let view = self.session.view();
        if view.is_over() {
            self.input_mode = InputMode::RoundOver;
            let answer = view.answer.unwrap_or_default();
            if view.is_won {
                self.add_message(
                    &format!("🎉 Congratulations! The word was {answer}"),
                    MessageStyle::Success,
                );
            } else {
                self.add_message(
                    &format!("💔 You lost! The word was {answer}"),
                    MessageStyle::Error,
                );
            }
            self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_round(&mut self) {
        self.session.restart();
        self.messages.clear();
        self.show_hint = false;
        self.input_mode = InputMode::Playing;
        self.add_message("New word chosen!", MessageStyle::Info);
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Char('r')) if ctrl => self.new_round(),
            (_, KeyCode::Esc) => self.should_quit = true,
            (InputMode::RoundOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::RoundOver, KeyCode::Char('n')) => self.new_round(),
            (InputMode::Playing, KeyCode::Tab) => self.toggle_hint(),
            (InputMode::Playing, KeyCode::Char(c)) if !ctrl => self.submit(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
