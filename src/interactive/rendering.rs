//! TUI rendering with ratatui
//!
//! Layout for the word game: reveal cells, guessed letters, error gauge,
//! hint and message log.

use super::app::{App, InputMode, MessageStyle};
use crate::game::RoundView;
use crate::output::formatters::{CellKind, cell_glyph, cell_kind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let view = app.session.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, &view, main_chunks[0]);
    render_info_panel(f, app, &view, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD GAME - Guess the hidden word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, view: &RoundView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Word
            Constraint::Percentage(50), // Guessed letters
        ])
        .split(area);

    render_word(f, view, chunks[0]);
    render_guessed(f, view, chunks[1]);
}

fn cell_span(c: char) -> Span<'static> {
    let style = match cell_kind(c) {
        CellKind::Hidden => Style::default().fg(Color::DarkGray),
        CellKind::Separator => Style::default().fg(Color::Yellow),
        CellKind::Letter => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {} ", cell_glyph(c)), style)
}

fn render_word(f: &mut Frame, view: &RoundView, area: Rect) {
    let cells: Vec<Span> = view.display.chars().map(cell_span).collect();

    let mut content = vec![
        Line::from(""),
        Line::from(cells).alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!(
            "Something about \"{}\" with {} letters",
            view.category, view.letter_count
        ))
        .alignment(Alignment::Center),
    ];

    if let Some(answer) = &view.answer {
        let (text, color) = if view.is_won {
            (format!("🎉 You got it: {answer}"), Color::Green)
        } else {
            (format!("💔 The word was: {answer}"), Color::Red)
        };
        content.push(Line::from(""));
        content.push(
            Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_guessed(f: &mut Frame, view: &RoundView, area: Rect) {
    let content = if view.guessed.is_empty() {
        Line::from(Span::styled(
            "No letters guessed yet",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let spans: Vec<Span> = view
            .guessed
            .iter()
            .map(|g| {
                let style = if g.was_correct {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::CROSSED_OUT)
                };
                Span::styled(format!(" {} ", g.letter), style)
            })
            .collect();
        Line::from(spans)
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Guessed Letters ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, view: &RoundView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Error gauge
            Constraint::Length(4), // Hint
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_errors(f, view, chunks[0]);
    render_hint(f, app, view, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_errors(f: &mut Frame, view: &RoundView, area: Rect) {
    let ratio = if view.error_limit == 0 {
        0.0
    } else {
        (f64::from(view.errors_used) / f64::from(view.error_limit)).min(1.0)
    };

    let color = if view.is_lost {
        Color::Red
    } else if view.errors_used > 0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Errors ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}/{}", view.errors_used, view.error_limit));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, view: &RoundView, area: Rect) {
    let content = if app.show_hint {
        Line::from(Span::styled(view.hint, Style::default().fg(Color::Yellow)))
    } else {
        Line::from(Span::styled(
            "Press TAB to show a hint",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" 💡 Hint ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.input_mode {
        InputMode::Playing => ("Type a letter to guess it", Color::Yellow),
        InputMode::RoundOver => ("Press 'n' for a new word or 'q' to quit", Color::Green),
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Rounds: {} | Won: {} | Win Rate: {:.0}%",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let limit_text = format!("Error limit: {}", app.session.config().error_limit);
    f.render_widget(
        Paragraph::new(limit_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Playing => "TAB: Hint | Ctrl-R: New Word | Esc: Quit",
        InputMode::RoundOver => "n: New Word | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
