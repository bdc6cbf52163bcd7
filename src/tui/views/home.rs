// Home - hero copy, headline stats, and the next few upcoming events

use crate::models::Event;
use crate::tui::app::{App, Route};
use crate::tui::components::{event_card, stat_tile::StatTile, stat_tile};
use crate::tui::scroll::Selection;
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// How many upcoming events the home screen previews
const UPCOMING_COUNT: usize = 3;

#[derive(Default)]
pub struct HomePage {
    pub selection: Selection,
}

impl HomePage {
    pub fn reset_scroll(&mut self) {
        self.selection.reset();
    }
}

/// Soonest-starting public events, the hero strip below the stats
fn upcoming_events(app: &App) -> Vec<Event> {
    let mut events = app.data.public_events();
    events.sort_by_key(|e| e.start_at);
    events.truncate(UPCOMING_COUNT);
    events
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    let upcoming = upcoming_events(app);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.home.selection.select_prev(upcoming.len());
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.home.selection.select_next(upcoming.len());
            Handled::Yes
        }
        KeyCode::Enter => {
            if let Some(idx) = app.home.selection.selected {
                if let Some(event) = upcoming.get(idx) {
                    let id = event.id.clone();
                    app.open_event(&id);
                    return Handled::Yes;
                }
            }
            // Nothing selected: Enter jumps to the full listing
            app.navigate(Route::Events);
            Handled::Yes
        }
        KeyCode::Char('a') => {
            app.navigate(Route::About);
            Handled::Yes
        }
        KeyCode::Char('o') => {
            app.navigate(Route::Contact);
            Handled::Yes
        }
        KeyCode::Esc => {
            if app.home.selection.selected.is_some() {
                app.home.selection.reset();
                Handled::Yes
            } else {
                Handled::No
            }
        }
        _ => Handled::No,
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let upcoming = upcoming_events(app);
    app.home.selection.clamp(upcoming.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // hero
            Constraint::Length(4), // stat tiles
            Constraint::Min(5),    // upcoming events
            Constraint::Length(2), // footer links
        ])
        .split(area);

    render_hero(f, chunks[0], app);
    render_stats(f, chunks[1], app);
    render_upcoming(f, chunks[2], app, &upcoming);
    render_footer(f, chunks[3], app);
}

fn render_hero(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Department Events Portal",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Workshops, hackathons, seminars, and festivals from every department on campus.",
            Style::default().fg(theme.foreground),
        )),
        Line::from(Span::styled(
            "Press Enter to explore events, or browse the upcoming picks below.",
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let events = app.data.events();
    let departments = app.data.departments();

    let now = chrono::Utc::now();
    let upcoming = events
        .iter()
        .filter(|e| e.is_public() && e.start_at > now)
        .count() as u64;
    let total_seated: u64 = events.iter().map(|e| e.registered_count as u64).sum();

    let tiles = [
        StatTile::new("Events", events.len() as u64, theme.accent),
        StatTile::new("Upcoming", upcoming, theme.warning),
        StatTile::new("Registrations", total_seated, theme.success),
        StatTile::new("Departments", departments.len() as u64, theme.info),
    ];
    stat_tile::render_row(f, area, theme, &tiles);
}

fn render_upcoming(f: &mut Frame, area: Rect, app: &App, upcoming: &[Event]) {
    let theme = &app.theme;
    let width = area.width.saturating_sub(2) as usize;
    let selected = app.home.selection.selected;

    let items: Vec<ListItem> = upcoming
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let line = event_card::event_line(event, width);
            ListItem::new(line).style(event_card::row_style(
                event,
                theme,
                selected == Some(idx),
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Upcoming Events "),
    );
    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled("a", Style::default().fg(theme.accent)),
        Span::styled(" about   ", Style::default().fg(theme.muted)),
        Span::styled("o", Style::default().fg(theme.accent)),
        Span::styled(" contact   ", Style::default().fg(theme.muted)),
        Span::styled("L", Style::default().fg(theme.accent)),
        Span::styled(" sign in", Style::default().fg(theme.muted)),
    ]);
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        area,
    );
}
