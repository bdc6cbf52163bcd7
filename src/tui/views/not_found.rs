// Not Found - catch-all for unknown ids and dead ends

use crate::tui::app::{App, Route};
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    match key.code {
        KeyCode::Enter => {
            app.navigate(Route::Home);
            Handled::Yes
        }
        _ => Handled::No,
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "We couldn't find what you were looking for.",
            Style::default().fg(theme.foreground),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to go home · Esc to go back",
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
