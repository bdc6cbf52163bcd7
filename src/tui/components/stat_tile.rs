// Stat tiles - the headline number cards on Home and the dashboard overview

use super::formatters::format_number;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatTile {
    pub label: &'static str,
    pub value: u64,
    pub color: Color,
}

impl StatTile {
    pub fn new(label: &'static str, value: u64, color: Color) -> Self {
        Self { label, value, color }
    }
}

/// Render a row of equally sized stat tiles
pub fn render_row(f: &mut Frame, area: Rect, theme: &Theme, tiles: &[StatTile]) {
    if tiles.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = tiles
        .iter()
        .map(|_| Constraint::Ratio(1, tiles.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tile, chunk) in tiles.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                format_number(tile.value),
                Style::default()
                    .fg(tile.color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tile.label,
                Style::default().fg(theme.muted),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.border)),
            );
        f.render_widget(paragraph, *chunk);
    }
}
