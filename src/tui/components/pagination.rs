// Pagination footer for listing views

use crate::collection::Page;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render "‹ Page 2/3 ›  ·  18 events" centered in `area`
pub fn render<T>(f: &mut Frame, area: Rect, theme: &Theme, page: &Page<T>, noun: &str) {
    let muted = Style::default().fg(theme.muted);
    let can_prev = page.page > 1;
    let can_next = page.page < page.total_pages;

    let arrow = |enabled: bool, symbol: &'static str| {
        if enabled {
            Span::styled(symbol, Style::default().fg(theme.accent))
        } else {
            Span::styled(symbol, muted)
        }
    };

    let line = Line::from(vec![
        arrow(can_prev, "‹"),
        Span::styled(
            format!(" Page {}/{} ", page.page, page.total_pages),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        arrow(can_next, "›"),
        Span::styled(
            format!("  ·  {} {}", page.total_matching, noun),
            muted,
        ),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
