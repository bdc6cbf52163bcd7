// Events listing - search, facets, pagination
//
// The controller owns the filter state and re-derives its page through the
// collection view model on every change. Anything that narrows or widens
// the match set puts the page back to 1; forgetting that is how a stale
// page 3 ends up rendering an empty grid over a non-empty result.

use crate::collection::{facet_key, paginate, Facet, FacetOption, Page, Predicates};
use crate::config::Config;
use crate::data::DataSource;
use crate::models::Event;
use crate::tui::app::App;
use crate::tui::clipboard;
use crate::tui::components::{self, event_card, pagination};
use crate::tui::layout::Breakpoint;
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

pub struct EventsPage {
    pub query: String,
    pub editing_search: bool,
    pub department: Facet,
    pub kind: Facet,
    pub page: usize,
    pub grid_view: bool,
    pub selection: Selection,
    page_size: usize,
    catalog: Vec<Event>,
}

impl EventsPage {
    pub fn new(config: &Config, data: &dyn DataSource) -> Self {
        let catalog = data.public_events();

        // Department options come from the labels present in the catalog,
        // first-seen order, so the dropdown never drifts from the data
        let mut labels: Vec<String> = Vec::new();
        for event in &catalog {
            if !labels.contains(&event.department) {
                labels.push(event.department.clone());
            }
        }
        let department = Facet::new(
            "All Departments",
            labels.into_iter().map(FacetOption::from_label).collect(),
        );

        let kind = Facet::new(
            "All Types",
            crate::models::EventType::ALL
                .iter()
                .map(|k| FacetOption::new(k.key(), k.label()))
                .collect(),
        );

        Self {
            query: String::new(),
            editing_search: false,
            department,
            kind,
            page: 1,
            grid_view: true,
            selection: Selection::default(),
            page_size: config.events_page_size,
            catalog,
        }
    }

    /// Re-snapshot the catalog (route entry, after registrations)
    pub fn refresh(&mut self, data: &dyn DataSource) {
        self.catalog = data.public_events();
        self.selection.reset();
    }

    /// Derive the current page - pure, run fresh every time it is needed
    pub fn derive(&self) -> Page<Event> {
        let predicates = Predicates::new()
            .search(
                &self.query,
                vec![|e: &Event| e.title.as_str(), |e: &Event| e.description.as_str()],
            )
            .facet(self.department.selected_key(), |e: &Event| {
                facet_key(&e.department)
            })
            .facet(self.kind.selected_key(), |e: &Event| {
                e.kind.key().to_string()
            });

        paginate(&self.catalog, &predicates, self.page_size, self.page)
    }

    /// Every filter mutation funnels through here: back to page 1
    fn filters_changed(&mut self) {
        self.page = 1;
        self.selection.reset();
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.department.clear();
        self.kind.clear();
        self.filters_changed();
    }

    /// Jump-in entry point used by the Departments screen: preselect a
    /// department label and clear everything else
    pub fn focus_department(&mut self, label: &str) {
        self.clear_filters();
        let key = facet_key(label);
        while self.department.selected_key() != Some(key.as_str()) {
            if !self.department.select_next() {
                break;
            }
            if self.department.selected_key().is_none() {
                break; // wrapped without finding the label
            }
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_search
    }

    fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
            self.selection.reset();
        }
    }

    fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.selection.reset();
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    let page = app.events_page.derive();

    if app.events_page.editing_search {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                app.events_page.editing_search = false;
            }
            KeyCode::Backspace => {
                app.events_page.query.pop();
                app.events_page.filters_changed();
            }
            KeyCode::Char(c) => {
                app.events_page.query.push(c);
                app.events_page.filters_changed();
            }
            _ => {}
        }
        return Handled::Yes;
    }

    match key.code {
        KeyCode::Char('/') => {
            app.events_page.editing_search = true;
            Handled::Yes
        }
        KeyCode::Char('d') => {
            app.events_page.department.select_next();
            app.events_page.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('D') => {
            app.events_page.department.select_prev();
            app.events_page.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('t') => {
            app.events_page.kind.select_next();
            app.events_page.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('T') => {
            app.events_page.kind.select_prev();
            app.events_page.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('c') => {
            app.events_page.clear_filters();
            Handled::Yes
        }
        KeyCode::Char('v') => {
            app.events_page.grid_view = !app.events_page.grid_view;
            Handled::Yes
        }
        KeyCode::Left => {
            app.events_page.prev_page();
            Handled::Yes
        }
        KeyCode::Right => {
            app.events_page.next_page(page.total_pages);
            Handled::Yes
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.events_page.selection.select_prev(page.items.len());
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.events_page.selection.select_next(page.items.len());
            Handled::Yes
        }
        KeyCode::Enter => {
            if let Some(idx) = app.events_page.selection.selected {
                if let Some(event) = page.items.get(idx) {
                    let id = event.id.clone();
                    app.open_event(&id);
                }
            }
            Handled::Yes
        }
        KeyCode::Char('y') => {
            if let Some(idx) = app.events_page.selection.selected {
                if let Some(event) = page.items.get(idx) {
                    let line = event_card::event_line(event, usize::MAX);
                    if clipboard::copy_to_clipboard(&line).is_ok() {
                        app.show_toast("✓ Copied to clipboard");
                    } else {
                        app.show_toast("✗ Failed to copy");
                    }
                }
            }
            Handled::Yes
        }
        KeyCode::Esc => {
            // First Esc clears selection, second clears filters, then bubble
            if app.events_page.selection.selected.is_some() {
                app.events_page.selection.reset();
                Handled::Yes
            } else if !app.events_page.query.is_empty()
                || app.events_page.department.is_active()
                || app.events_page.kind.is_active()
            {
                app.events_page.clear_filters();
                Handled::Yes
            } else {
                Handled::No
            }
        }
        _ => Handled::No,
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let page = app.events_page.derive();
    app.events_page.selection.clamp(page.items.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // section title
            Constraint::Length(3), // filter bar
            Constraint::Min(5),    // results
            Constraint::Length(1), // pagination
        ])
        .split(area);

    components::render_section_title(
        f,
        chunks[0],
        &app.theme,
        "Explore Events",
        "Discover and register for upcoming events across all departments.",
    );

    render_filter_bar(f, chunks[1], app, &page);

    if page.is_empty() {
        render_empty_state(f, chunks[2], app);
    } else if app.events_page.grid_view {
        render_grid(f, chunks[2], app, &page);
    } else {
        render_list(f, chunks[2], app, &page);
    }

    pagination::render(f, chunks[3], &app.theme, &page, "events");
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App, page: &Page<Event>) {
    let theme = &app.theme;
    let state = &app.events_page;

    let search_style = if state.editing_search {
        Style::default().fg(theme.highlight)
    } else {
        Style::default().fg(theme.muted)
    };
    let search_text = if state.query.is_empty() && !state.editing_search {
        "Search events… (/)".to_string()
    } else {
        let cursor = if state.editing_search { "▏" } else { "" };
        format!("{}{}", state.query, cursor)
    };

    let facet_style = |active: bool| {
        if active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        }
    };

    let line = Line::from(vec![
        Span::styled(format!(" {search_text}"), search_style),
        Span::styled("  │  ", Style::default().fg(theme.border)),
        Span::styled(
            format!("⌄ {}", state.department.selected_label()),
            facet_style(state.department.is_active()),
        ),
        Span::styled("  │  ", Style::default().fg(theme.border)),
        Span::styled(
            format!("⌄ {}", state.kind.selected_label()),
            facet_style(state.kind.is_active()),
        ),
        Span::styled("  │  ", Style::default().fg(theme.border)),
        Span::styled(
            format!("{} matching", page.total_matching),
            Style::default().fg(theme.foreground),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(if state.editing_search {
            theme.highlight
        } else {
            theme.border
        }));

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_empty_state(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No events found",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try adjusting your filters or search query. Press c to clear filters.",
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

fn render_grid(f: &mut Frame, area: Rect, app: &App, page: &Page<Event>) {
    let columns = match Breakpoint::from_width(area.width) {
        Breakpoint::Wide => 4,
        Breakpoint::Normal => 2,
        Breakpoint::Compact => 1,
    };
    let card_height = 7u16;
    let selected = app.events_page.selection.selected;

    for (row_idx, row_items) in page.items.chunks(columns).enumerate() {
        let y = area.y + (row_idx as u16) * card_height;
        if y + card_height > area.bottom() {
            break; // viewport too short for all rows
        }
        let row_area = Rect::new(area.x, y, area.width, card_height);
        let constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(row_area);

        for (col_idx, event) in row_items.iter().enumerate() {
            let flat_idx = row_idx * columns + col_idx;
            event_card::render_card(
                f,
                cells[col_idx],
                event,
                &app.theme,
                selected == Some(flat_idx),
            );
        }
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &App, page: &Page<Event>) {
    let theme = &app.theme;
    let width = area.width.saturating_sub(2) as usize;
    let selected = app.events_page.selection.selected;

    let items: Vec<ListItem> = page
        .items
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
            .title(format!(" Events (page {}/{}) ", page.page, page.total_pages)),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryDataSource;

    fn page_state() -> EventsPage {
        let config = Config::default();
        let data = InMemoryDataSource::seeded();
        EventsPage::new(&config, &data)
    }

    #[test]
    fn facet_change_resets_to_page_one() {
        let mut state = page_state();
        state.page = 2;

        state.department.select_next();
        state.filters_changed();
        assert_eq!(state.page, 1);

        state.page = 2;
        state.kind.select_next();
        state.filters_changed();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut state = page_state();
        state.query = "block".into();
        state.department.select_next();
        state.kind.select_next();
        state.page = 2;

        state.clear_filters();
        assert!(state.query.is_empty());
        assert_eq!(state.department.selected_key(), None);
        assert_eq!(state.kind.selected_key(), None);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn focus_department_selects_the_matching_option() {
        let mut state = page_state();
        state.focus_department("Cultural Affairs");
        assert_eq!(state.department.selected_key(), Some("cultural-affairs"));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn derive_respects_search_and_facets_together() {
        let mut state = page_state();
        state.query = "workshop".into();
        let hits = state.derive();
        assert!(hits.total_matching >= 2);

        state.focus_department("Computer Science");
        state.query = "workshop".into();
        let narrowed = state.derive();
        assert!(narrowed.total_matching < hits.total_matching);
        assert!(narrowed
            .items
            .iter()
            .all(|e| e.department == "Computer Science"));
    }

    #[test]
    fn page_navigation_clamps_at_bounds() {
        let mut state = page_state();
        let derived = state.derive();

        state.prev_page();
        assert_eq!(state.page, 1);

        state.next_page(derived.total_pages);
        assert_eq!(state.page, derived.total_pages.min(2));
        state.next_page(derived.total_pages);
        assert_eq!(state.page, derived.total_pages);
    }
}
