// Presentation components - stateless renderers
//
// Everything here takes already-derived data plus a theme and draws it.
// No filtering, no pagination math, no data access - that all happens in
// the page controllers before these are called.

pub mod chart;
pub mod event_card;
pub mod formatters;
pub mod navbar;
pub mod pagination;
pub mod scrollbar;
pub mod stat_tile;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render a centered section title with a muted subtitle underneath
pub fn render_section_title(f: &mut Frame, area: Rect, theme: &Theme, title: &str, subtitle: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Truncate a line to a display width, appending an ellipsis when cut.
/// Width is measured in terminal columns, not bytes.
pub fn truncate_to_width(line: &str, max_width: usize) -> String {
    if line.width() <= max_width {
        return line.to_string();
    }

    let target = max_width.saturating_sub(1);
    let mut current = 0;
    let mut out = String::new();
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > target {
            break;
        }
        current += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn long_lines_get_an_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        // Each CJK char is 2 columns; 3 chars = 6 columns
        let truncated = truncate_to_width("日本語テスト", 5);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 5);
    }
}
