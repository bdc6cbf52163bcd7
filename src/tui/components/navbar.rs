// Navbar - top bar with route tabs and session state

use crate::tui::app::{App, Route};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let active_tab = app.route.nav_tab();

    let mut spans = vec![
        Span::styled(
            " Campus Events ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", Style::default().fg(theme.border)),
    ];

    for tab in Route::NAV_TABS {
        let is_active = active_tab == Some(tab);
        let style = if is_active {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(tab.label(), style));
    }

    // Right side: session state. Width math keeps it right-aligned.
    let session_text = match &app.session {
        Some(user) => format!("{} ({}) ", user.name, user.role.label()),
        None => "Sign In (L) ".to_string(),
    };
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = (area.width as usize)
        .saturating_sub(used + session_text.chars().count() + 2);
    spans.push(Span::raw(" ".repeat(pad)));
    let session_style = if app.session.is_some() {
        Style::default().fg(theme.success)
    } else {
        Style::default().fg(theme.accent)
    };
    spans.push(Span::styled(session_text, session_style));

    let navbar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(navbar, area);
}
