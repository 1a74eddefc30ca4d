//! Terminal UI: layout, status messages, and scene drawing.

pub mod achievements_scene;
pub mod game_scene;
pub mod stats_panel;

use crate::core::instance::Outcome;
use crate::core::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Styling class for the status message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    fn color(&self) -> Color {
        match self {
            MessageKind::Info => Color::Cyan,
            MessageKind::Success => Color::Green,
            MessageKind::Warning => Color::Yellow,
            MessageKind::Error => Color::Red,
        }
    }
}

/// Transient presentation state owned by the event loop. The engine never
/// sees any of this; it is cursor position and feedback text only.
pub struct ViewState {
    /// Balloon id under the keyboard cursor.
    pub cursor: usize,
    pub message: Option<(String, MessageKind)>,
    /// Odd balloons revealed after a wrong guess.
    pub revealed: Vec<usize>,
    /// Outcome of the most recent weighing, drives the scale tilt glyph.
    pub last_outcome: Option<Outcome>,
    /// Score earned by the winning guess, shown until the next game.
    pub last_score: Option<u32>,
    pub show_achievements: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            message: None,
            revealed: Vec::new(),
            last_outcome: None,
            last_score: None,
            show_achievements: false,
        }
    }

    pub fn set_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.message = Some((text.into(), kind));
    }

    /// Clear per-game feedback when a new puzzle starts.
    pub fn reset_for_new_game(&mut self) {
        self.cursor = 0;
        self.revealed.clear();
        self.last_outcome = None;
        self.last_score = None;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level draw: header, game scene, stats panel, message, key help.
pub fn draw_ui(frame: &mut Frame, session: &GameSession, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Game scene + stats
            Constraint::Length(3), // Message line
            Constraint::Length(1), // Key help
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], session);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(chunks[1]);

    game_scene::draw_game_scene(frame, main[0], session, view);
    stats_panel::draw_stats_panel(frame, main[1], session, view);

    draw_message(frame, chunks[2], view);
    draw_help(frame, chunks[3]);

    if view.show_achievements {
        achievements_scene::draw_achievements_overlay(frame, frame.size(), &session.achievements);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, session: &GameSession) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "ODDBALL",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  find the odd balloon  |  "),
        Span::styled(
            session.difficulty().name().to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format_time(session.elapsed_seconds()),
            Style::default().fg(Color::Green),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

fn draw_message(frame: &mut Frame, area: Rect, view: &ViewState) {
    let line = match &view.message {
        Some((text, kind)) => Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(kind.color())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };
    let message = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        " ←/→ move  a/d place left/right  s take off  space select  w weigh  g guess  u undo  r new game  1-4 difficulty  tab achievements  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

/// Format elapsed seconds as MM:SS.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
