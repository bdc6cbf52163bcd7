// Event renderers - list rows and grid cards
//
// Pure presentation: the controller hands these an already-filtered event
// and they draw it. Capacity, schedule, and type chip styling live here so
// every listing shows events the same way.

use super::formatters::{format_date, format_time};
use super::truncate_to_width;
use crate::models::Event;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One-line summary for list view:
/// "Oct 15, 2023 │ Tech       │ AI & Machine Learning Workshop · Computer Lab 201 (32/50)"
pub fn event_line(event: &Event, width: usize) -> String {
    let line = format!(
        "{} │ {:<11} │ {} · {} ({}/{})",
        format_date(event.start_at),
        event.kind.label(),
        event.title,
        event.venue,
        event.registered_count,
        event.capacity,
    );
    truncate_to_width(&line, width)
}

/// Style for a row by its event type, with selection override
pub fn row_style(event: &Event, theme: &Theme, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.event_type_color(event.kind))
    }
}

/// A bordered card for grid view: title, type chip, schedule, venue, seats
pub fn render_card(f: &mut Frame, area: Rect, event: &Event, theme: &Theme, selected: bool) {
    let border_color = if selected { theme.highlight } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(4) as usize;
    let type_color = theme.event_type_color(event.kind);

    let seats = if event.is_full() {
        Span::styled("Full", Style::default().fg(theme.danger))
    } else {
        Span::styled(
            format!("{}/{} registered", event.registered_count, event.capacity),
            Style::default().fg(theme.muted),
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&event.title, inner_width),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("[{}]", event.kind.label()), Style::default().fg(type_color)),
            Span::styled(
                format!(" {}", event.department),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{}  {}",
                format_date(event.start_at),
                format_time(event.start_at)
            ),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            truncate_to_width(&event.venue, inner_width),
            Style::default().fg(theme.muted),
        )),
        Line::from(seats),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;
    use chrono::{TimeZone, Utc};

    #[test]
    fn event_line_shows_schedule_type_and_capacity() {
        let event = Event {
            id: "1".into(),
            title: "AI Workshop".into(),
            description: String::new(),
            department: "Computer Science".into(),
            kind: EventType::Tech,
            start_at: Utc.with_ymd_and_hms(2023, 10, 15, 10, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2023, 10, 15, 16, 0, 0).unwrap(),
            venue: "Lab 201".into(),
            capacity: 50,
            registered_count: 32,
            images: vec![],
            tags: vec![],
            is_published: Some(true),
        };

        let line = event_line(&event, 120);
        assert!(line.contains("Oct 15, 2023"));
        assert!(line.contains("Tech"));
        assert!(line.contains("AI Workshop"));
        assert!(line.contains("(32/50)"));

        // Narrow width truncates with an ellipsis
        let narrow = event_line(&event, 30);
        assert!(narrow.ends_with('…'));
    }
}
