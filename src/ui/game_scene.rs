//! Main game scene: balloon row, the scale, and the weighing log.

use super::ViewState;
use crate::core::instance::{Outcome, Pan};
use crate::core::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_game_scene(frame: &mut Frame, area: Rect, session: &GameSession, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Balloon row
            Constraint::Length(7), // Scale pans
            Constraint::Min(4),    // Weighing log
        ])
        .split(area);

    draw_balloons(frame, chunks[0], session, view);
    draw_scale(frame, chunks[1], session, view);
    draw_weighing_log(frame, chunks[2], session);
}

/// One span per balloon, styled by cursor / selection / placement / reveal.
fn draw_balloons(frame: &mut Frame, area: Rect, session: &GameSession, view: &ViewState) {
    let instance = session.instance();
    let mut spans: Vec<Span> = Vec::new();

    for id in 0..instance.balloon_count() {
        let mut style = Style::default().fg(Color::White);
        let mut marker = "";

        match instance.placement_of(id) {
            Some(Pan::Left) => {
                marker = "ᴸ";
                style = style.fg(Color::Blue);
            }
            Some(Pan::Right) => {
                marker = "ᴿ";
                style = style.fg(Color::Blue);
            }
            None => {}
        }
        if session.selected() == Some(id) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if view.revealed.contains(&id) {
            style = style.fg(Color::Magenta).add_modifier(Modifier::BOLD);
        }
        if view.cursor == id {
            style = style.add_modifier(Modifier::REVERSED);
        }

        // Player-facing numbering is 1-based
        spans.push(Span::styled(format!(" 🎈{}{} ", id + 1, marker), style));
    }

    let balloons = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Balloons "))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(balloons, area);
}

fn draw_scale(frame: &mut Frame, area: Rect, session: &GameSession, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    draw_pan(frame, chunks[0], session, Pan::Left);
    draw_tilt(frame, chunks[1], view);
    draw_pan(frame, chunks[2], session, Pan::Right);
}

fn draw_pan(frame: &mut Frame, area: Rect, session: &GameSession, pan: Pan) {
    let ids = session.instance().pan(pan);
    let title = match pan {
        Pan::Left => " Left pan ",
        Pan::Right => " Right pan ",
    };

    let content = if ids.is_empty() {
        Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format_id_list(ids),
            Style::default().fg(Color::White),
        ))
    };

    let count = Line::from(Span::styled(
        format!("{} balloon(s)", ids.len()),
        Style::default().fg(Color::DarkGray),
    ));

    let pan_widget = Paragraph::new(vec![content, count])
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(pan_widget, area);
}

fn draw_tilt(frame: &mut Frame, area: Rect, view: &ViewState) {
    let (glyph, color) = match view.last_outcome {
        Some(Outcome::LeftHeavier) => ("◀ ▽", Color::Yellow),
        Some(Outcome::RightHeavier) => ("△ ▶", Color::Yellow),
        Some(Outcome::Balanced) => ("▷ ◁", Color::Green),
        None => ("⚖", Color::DarkGray),
    };
    let tilt = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            glyph,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    frame.render_widget(tilt, area);
}

/// Terminal-styled weighing history, newest last:
/// `001  [1, 2, 3] vs [4, 5, 6]  LEFT_HEAVIER  12:30:45`
fn draw_weighing_log(frame: &mut Frame, area: Rect, session: &GameSession) {
    let items: Vec<ListItem> = session
        .instance()
        .history
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let color = match record.outcome {
                Outcome::LeftHeavier | Outcome::RightHeavier => Color::Yellow,
                Outcome::Balanced => Color::Green,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:03}  ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(
                    "[{}] vs [{}]  ",
                    format_id_list(&record.left),
                    format_id_list(&record.right)
                )),
                Span::styled(record.outcome.label(), Style::default().fg(color)),
                Span::styled(
                    format!("  {}", record.recorded_at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let log = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Weighing log "),
    );
    frame.render_widget(log, area);
}

/// 1-based, comma-separated id list for display.
fn format_id_list(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| (id + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_id_list_is_one_based() {
        assert_eq!(format_id_list(&[0, 1, 2]), "1, 2, 3");
        assert_eq!(format_id_list(&[5]), "6");
        assert_eq!(format_id_list(&[]), "");
    }
}
