// Chart helpers for the analytics tab
//
// Thin wrappers over ratatui's BarChart/Sparkline/Gauge so every chart in
// the dashboard shares titles, borders, and theme colors.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Sparkline},
    Frame,
};

/// Horizontal bar chart of labeled counts
pub fn render_bar_chart(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    data: &[(String, u64)],
    color: Color,
) {
    let bars: Vec<Bar> = data
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .label(label.clone().into())
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme.background)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {title} ")),
        )
        .direction(ratatui::layout::Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

/// Sparkline of a value series (monthly trend)
pub fn render_sparkline(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    values: &[u64],
    color: Color,
) {
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {title} ")),
        )
        .data(values)
        .style(Style::default().fg(color));

    f.render_widget(sparkline, area);
}

/// Labeled percentage gauge (event fill rate)
pub fn render_gauge(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    percent: f64,
    color: Color,
) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {label} ")),
        )
        .gauge_style(Style::default().fg(color).bg(theme.selection))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));

    f.render_widget(gauge, area);
}
