//! Stats panel: per-game counters and cross-game progress.

use super::{format_time, ViewState};
use crate::core::session::GameSession;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_stats_panel(frame: &mut Frame, area: Rect, session: &GameSession, view: &ViewState) {
    let instance = session.instance();
    let progress = &session.progress;

    let best = match progress.best_score {
        Some(best) => best.to_string(),
        None => "--".to_string(),
    };

    let mut lines = vec![
        stat_line("Moves", instance.move_count.to_string(), Color::White),
        stat_line("Best", best, Color::Yellow),
        stat_line("Streak", progress.streak.to_string(), Color::Red),
        stat_line(
            "Time",
            format_time(session.elapsed_seconds()),
            Color::Green,
        ),
        Line::from(""),
        stat_line("Games", progress.games_played.to_string(), Color::White),
        stat_line("Wins", progress.wins.to_string(), Color::White),
        stat_line(
            "Badges",
            format!(
                "{}/{}",
                session.achievements.unlocked_count(),
                session.achievements.total_count()
            ),
            Color::Magenta,
        ),
    ];

    if let Some(score) = view.last_score {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Score: {}", score),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Stats "));
    frame.render_widget(panel, area);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<8}", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(color)),
    ])
}
