// Modal overlay rendering

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Center a `width` x `height` box inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
        Modal::Confirm { title, .. } => render_confirm(f, app, title),
    }
}

fn render_logs(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered(
        f.area(),
        f.area().width.saturating_sub(8).min(100),
        f.area().height.saturating_sub(6),
    );
    let capacity = area.height.saturating_sub(2) as usize;

    let entries = app.log_buffer.entries();
    let start = entries.len().saturating_sub(capacity);
    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                crate::logging::LogLevel::Error => theme.danger,
                crate::logging::LogLevel::Warn => theme.warning,
                crate::logging::LogLevel::Info => theme.accent,
                _ => theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(format!(" Logs ({}) ", entries.len()));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(theme.foreground));

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![key("  F1-F5 / [ ] "), text("navigate between screens")]),
        Line::from(vec![key("  Esc         "), text("go back")]),
        Line::from(vec![key("  /           "), text("search (on listings)")]),
        Line::from(vec![key("  d / t       "), text("cycle department / type facet")]),
        Line::from(vec![key("  c           "), text("clear filters")]),
        Line::from(vec![key("  ← →         "), text("previous / next page")]),
        Line::from(vec![key("  ↑ ↓         "), text("move selection")]),
        Line::from(vec![key("  Enter       "), text("open selection")]),
        Line::from(vec![key("  L           "), text("sign in")]),
        Line::from(vec![key("  y           "), text("copy row / export")]),
        Line::from(vec![key("  !           "), text("show application logs")]),
        Line::from(vec![key("  q           "), text("quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "  Esc or ? to close",
            Style::default().fg(theme.muted),
        )),
    ];

    let area = centered(f.area(), 52, lines.len() as u16 + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(" Help ");

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_confirm(f: &mut Frame, app: &App, title: &str) {
    let theme = &app.theme;
    let width = (title.len() as u16 + 6).clamp(30, f.area().width.saturating_sub(4));
    let area = centered(f.area(), width, 5);

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(theme.foreground),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.danger).add_modifier(Modifier::BOLD)),
            Span::styled(" confirm   ", Style::default().fg(theme.muted)),
            Span::styled("n", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" cancel", Style::default().fg(theme.muted)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.danger))
        .style(Style::default().bg(theme.background))
        .title(" Confirm ");

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
