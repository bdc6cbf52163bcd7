// Departments - council list with a static partition of events
//
// The council -> events grouping is computed once per render from the label
// mapping; it is a different, simpler derivation than the searchable
// listings and deliberately shares no state with them. Pagination still
// goes through the collection view model.

use crate::collection::{paginate, Page, Predicates};
use crate::models::{Department, Event};
use crate::tui::app::{App, Route};
use crate::tui::components::{self, event_card, pagination};
use crate::tui::scroll::Selection;
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Which panel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeptFocus {
    #[default]
    Councils,
    Events,
}

#[derive(Default)]
pub struct DepartmentsPage {
    pub page: usize,
    pub councils: Selection,
    pub events: Selection,
    pub focus: DeptFocus,
}

impl DepartmentsPage {
    pub fn reset_scroll(&mut self) {
        self.councils.reset();
        self.events.reset();
        self.focus = DeptFocus::Councils;
    }

    fn page_or_first(&self) -> usize {
        self.page.max(1)
    }
}

/// Current page of councils (no filters on this listing)
fn derive_councils(app: &App) -> Page<Department> {
    let councils = app.data.departments();
    paginate(
        &councils,
        &Predicates::new(),
        app.config.departments_page_size,
        app.departments_page.page_or_first(),
    )
}

/// The static event partition for the selected council
fn selected_council_events(app: &App, page: &Page<Department>) -> Vec<Event> {
    let idx = app.departments_page.councils.selected.unwrap_or(0);
    page.items
        .get(idx)
        .map(|dept| app.data.department_events(dept))
        .unwrap_or_default()
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    let page = derive_councils(app);
    let events = selected_council_events(app, &page);

    match key.code {
        KeyCode::Tab => {
            app.departments_page.focus = match app.departments_page.focus {
                DeptFocus::Councils => DeptFocus::Events,
                DeptFocus::Events => DeptFocus::Councils,
            };
            Handled::Yes
        }
        KeyCode::Up | KeyCode::Char('k') => {
            match app.departments_page.focus {
                DeptFocus::Councils => {
                    app.departments_page.councils.select_prev(page.items.len());
                    app.departments_page.events.reset();
                }
                DeptFocus::Events => app.departments_page.events.select_prev(events.len()),
            }
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            match app.departments_page.focus {
                DeptFocus::Councils => {
                    app.departments_page.councils.select_next(page.items.len());
                    app.departments_page.events.reset();
                }
                DeptFocus::Events => app.departments_page.events.select_next(events.len()),
            }
            Handled::Yes
        }
        KeyCode::Left => {
            if app.departments_page.page_or_first() > 1 {
                app.departments_page.page = app.departments_page.page_or_first() - 1;
                app.departments_page.reset_scroll();
            }
            Handled::Yes
        }
        KeyCode::Right => {
            if app.departments_page.page_or_first() < page.total_pages {
                app.departments_page.page = app.departments_page.page_or_first() + 1;
                app.departments_page.reset_scroll();
            }
            Handled::Yes
        }
        KeyCode::Enter => {
            match app.departments_page.focus {
                DeptFocus::Councils => {
                    // Jump to the events listing filtered to this council's
                    // first department label
                    let idx = app.departments_page.councils.selected.unwrap_or(0);
                    if let Some(label) =
                        page.items.get(idx).and_then(|d| d.labels.first()).cloned()
                    {
                        app.events_page.focus_department(&label);
                        app.navigate(Route::Events);
                    }
                }
                DeptFocus::Events => {
                    if let Some(idx) = app.departments_page.events.selected {
                        if let Some(event) = events.get(idx) {
                            let id = event.id.clone();
                            app.open_event(&id);
                        }
                    }
                }
            }
            Handled::Yes
        }
        KeyCode::Esc => {
            if app.departments_page.focus == DeptFocus::Events {
                app.departments_page.focus = DeptFocus::Councils;
                Handled::Yes
            } else {
                Handled::No
            }
        }
        _ => Handled::No,
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let page = derive_councils(app);
    app.departments_page.councils.clamp(page.items.len());
    if app.departments_page.councils.selected.is_none() && !page.items.is_empty() {
        app.departments_page.councils.selected = Some(0);
    }
    let events = selected_council_events(app, &page);
    app.departments_page.events.clamp(events.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(6),    // panels
            Constraint::Length(1), // pagination
        ])
        .split(area);

    components::render_section_title(
        f,
        chunks[0],
        &app.theme,
        "Explore Departments",
        "Learn more about departments and their events.",
    );

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_councils(f, panels[0], app, &page);
    render_events(f, panels[1], app, &events);

    pagination::render(f, chunks[2], &app.theme, &page, "departments");
}

fn render_councils(f: &mut Frame, area: Rect, app: &App, page: &Page<Department>) {
    let theme = &app.theme;
    let focused = app.departments_page.focus == DeptFocus::Councils;
    let selected = app.departments_page.councils.selected;

    let items: Vec<ListItem> = page
        .items
        .iter()
        .enumerate()
        .map(|(idx, dept)| {
            let is_selected = selected == Some(idx);
            let style = if is_selected && focused {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(theme.highlight)
            } else {
                Style::default().fg(theme.foreground)
            };

            let lines = vec![
                Line::from(Span::styled(dept.name.clone(), style)),
                Line::from(Span::styled(
                    components::truncate_to_width(
                        &dept.description,
                        area.width.saturating_sub(4) as usize,
                    ),
                    Style::default().fg(theme.muted),
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let border_color = if focused { theme.highlight } else { theme.border };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(" Councils "),
    );
    f.render_widget(list, area);
}

fn render_events(f: &mut Frame, area: Rect, app: &App, events: &[Event]) {
    let theme = &app.theme;
    let focused = app.departments_page.focus == DeptFocus::Events;
    let selected = app.departments_page.events.selected;
    let width = area.width.saturating_sub(2) as usize;

    let border_color = if focused { theme.highlight } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Events ({}) ", events.len()));

    if events.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No events for this council yet.",
            Style::default().fg(theme.muted),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let line = event_card::event_line(event, width);
            ListItem::new(line).style(event_card::row_style(
                event,
                theme,
                focused && selected == Some(idx),
            ))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
