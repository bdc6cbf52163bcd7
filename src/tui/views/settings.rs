// Settings tab - appearance and stub-backend knobs
//
// Changes apply immediately to the running app. The config file is the
// durable source; this screen only adjusts the session.

use crate::tui::app::App;
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Rows in the settings list
const OPTIONS: [&str; 3] = ["Theme", "Theme background", "Submission latency"];

#[derive(Debug, Default)]
pub struct SettingsState {
    pub selected: usize,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.dashboard.settings.selected = app.dashboard.settings.selected.saturating_sub(1);
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.dashboard.settings.selected =
                (app.dashboard.settings.selected + 1).min(OPTIONS.len() - 1);
            Handled::Yes
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
            apply(app, key.code);
            Handled::Yes
        }
        _ => Handled::No,
    }
}

fn apply(app: &mut App, key: KeyCode) {
    match app.dashboard.settings.selected {
        0 => {
            if key == KeyCode::Left {
                app.prev_theme();
            } else {
                app.next_theme();
            }
            app.show_toast(format!("✓ Theme: {}", app.theme.name));
        }
        1 => {
            app.use_theme_background = !app.use_theme_background;
        }
        // Latency is informational; the config file owns it
        _ => {}
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(20)])
        .split(area);

    let values = [
        theme.name.to_string(),
        if app.use_theme_background {
            "theme color".to_string()
        } else {
            "terminal default".to_string()
        },
        format!("{} ms", app.config.submit_latency_ms),
    ];

    let items: Vec<ListItem> = OPTIONS
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(idx, (label, value))| {
            let is_selected = idx == app.dashboard.settings.selected;
            let marker = if is_selected { " ▸ " } else { "   " };
            let label_style = if is_selected {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{label:<20}"), label_style),
                Span::styled(value.clone(), Style::default().fg(theme.accent)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Settings "),
    );
    f.render_widget(list, chunks[0]);

    let help_lines = vec![
        Line::from(Span::styled(
            "↑↓ select · ←→/Enter change",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Persistent settings live in the config file:",
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            crate::config::Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unknown>".to_string()),
            Style::default().fg(theme.foreground),
        )),
        Line::from(Span::styled(
            "Edit with: campus-events config --edit",
            Style::default().fg(theme.muted),
        )),
    ];
    let help = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" About "),
    );
    f.render_widget(help, chunks[1]);
}
