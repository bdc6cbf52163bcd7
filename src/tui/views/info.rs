// About and Contact - static informational screens

use crate::tui::app::App;
use crate::tui::components::scrollbar::render_scrollbar;
use crate::tui::scroll::ScrollState;
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct InfoPage {
    pub scroll: ScrollState,
}

impl InfoPage {
    pub fn reset_scroll(&mut self) {
        self.scroll.reset();
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.info.scroll.scroll_up();
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.info.scroll.scroll_down();
            Handled::Yes
        }
        KeyCode::PageUp => {
            app.info.scroll.page_up();
            Handled::Yes
        }
        KeyCode::PageDown => {
            app.info.scroll.page_down();
            Handled::Yes
        }
        KeyCode::Home => {
            app.info.scroll.scroll_to_top();
            Handled::Yes
        }
        _ => Handled::No,
    }
}

pub fn render_about(f: &mut Frame, area: Rect, app: &mut App) {
    let lines = vec![
        heading(app, "About the Events Portal"),
        Line::from(""),
        body(app, "The Department Events Portal brings every department's workshops, hackathons, seminars, competitions, and cultural festivals into one place."),
        Line::from(""),
        body(app, "Browse the full catalog, filter by department or event type, and register in a couple of keystrokes. Organizers manage their events, track registrations, and watch attendance trends from the admin dashboard."),
        Line::from(""),
        body(app, "Events are run by the student councils:"),
        body(app, "  · COE - College of Engineering"),
        body(app, "  · CEC - Cultural & Extracurricular Council"),
        body(app, "  · CBSA - College of Business Studies & Analytics"),
        body(app, "  · HM - Environmental & Sustainability Sciences"),
        Line::from(""),
        body(app, "Every event lists its venue, schedule, and remaining capacity, so you always know whether there's still a seat."),
    ];
    render_scrolled(f, area, app, " About ", lines);
}

pub fn render_contact(f: &mut Frame, area: Rect, app: &mut App) {
    let lines = vec![
        heading(app, "Contact"),
        Line::from(""),
        body(app, "Questions about an event, registration, or running your own?"),
        Line::from(""),
        body(app, "  Email     events@campus.example.edu"),
        body(app, "  Phone     +1 (555) 012-3456"),
        body(app, "  Office    Student Activities Center, Room 104"),
        Line::from(""),
        body(app, "Office hours are Monday to Friday, 9 AM - 5 PM."),
        Line::from(""),
        body(app, "Organizers: reach out at least three weeks before your event date so we can help with venue booking and promotion."),
    ];
    render_scrolled(f, area, app, " Contact ", lines);
}

fn heading<'a>(app: &App, text: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    ))
}

fn body<'a>(app: &App, text: &'a str) -> Line<'a> {
    Line::from(Span::styled(text, Style::default().fg(app.theme.foreground)))
}

fn render_scrolled(f: &mut Frame, area: Rect, app: &mut App, title: &str, lines: Vec<Line>) {
    let total = lines.len();
    let viewport = area.height.saturating_sub(2) as usize;
    app.info.scroll.update_dimensions(total, viewport);
    let offset = app.info.scroll.offset();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border))
                .title(title.to_string()),
        );
    f.render_widget(paragraph, area);
    render_scrollbar(f, area, total, viewport, offset);
}
