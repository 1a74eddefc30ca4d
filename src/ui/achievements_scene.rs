//! Achievements overlay: the full table with locked/unlocked markers.

use crate::achievements::data::ALL_ACHIEVEMENTS;
use crate::achievements::types::Achievements;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_achievements_overlay(frame: &mut Frame, area: Rect, achievements: &Achievements) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let mut lines = Vec::new();
    for def in ALL_ACHIEVEMENTS {
        let unlocked = achievements.is_unlocked(def.id);
        let marker = if unlocked { "✓" } else { "·" };
        let name_style = if unlocked {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let description = if def.secret && !unlocked {
            "???"
        } else {
            def.description
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), name_style),
            Span::styled(format!("{} {:<16}", def.icon, def.name), name_style),
            Span::styled(description, Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " tab to close",
        Style::default().fg(Color::DarkGray),
    )));

    let overlay = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Achievements ")
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(overlay, popup);
}

/// Centered sub-rectangle taking the given percentage of each dimension.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
