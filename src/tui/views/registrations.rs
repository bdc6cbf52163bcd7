// Registrations - admin table with search, event/status facets, CSV export
//
// Search covers registrant name and email. The event facet keys on event
// ids (names are labels only), the status facet on the status key. Export
// copies the *filtered* set as CSV to the clipboard, not just the visible
// page.

use crate::collection::{paginate, Facet, FacetOption, Page, Predicates};
use crate::config::Config;
use crate::data::DataSource;
use crate::models::{Registration, RegistrationStatus};
use crate::tui::app::App;
use crate::tui::clipboard;
use crate::tui::components::formatters::format_date;
use crate::tui::components::{pagination, truncate_to_width};
use crate::tui::modal::Modal;
use crate::tui::scroll::Selection;
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub struct RegistrationsPage {
    pub query: String,
    pub editing_search: bool,
    pub event_facet: Facet,
    pub status_facet: Facet,
    pub page: usize,
    pub selection: Selection,
    page_size: usize,
    rows: Vec<Registration>,
}

impl RegistrationsPage {
    pub fn new(config: &Config, data: &dyn DataSource) -> Self {
        let event_facet = Facet::new(
            "All Events",
            data.events()
                .into_iter()
                .map(|e| FacetOption::new(e.id, e.title))
                .collect(),
        );
        let status_facet = Facet::new(
            "All Statuses",
            RegistrationStatus::ALL
                .iter()
                .map(|s| FacetOption::new(s.key(), s.label()))
                .collect(),
        );

        Self {
            query: String::new(),
            editing_search: false,
            event_facet,
            status_facet,
            page: 1,
            selection: Selection::default(),
            page_size: config.admin_page_size,
            rows: data.registrations(),
        }
    }

    pub fn refresh(&mut self, data: &dyn DataSource) {
        self.rows = data.registrations();
    }

    fn predicates(&self) -> Predicates<Registration> {
        Predicates::new()
            .search(
                &self.query,
                vec![
                    |r: &Registration| r.user_name.as_str(),
                    |r: &Registration| r.user_email.as_str(),
                ],
            )
            .facet(self.event_facet.selected_key(), |r: &Registration| {
                r.event_id.clone()
            })
            .facet(self.status_facet.selected_key(), |r: &Registration| {
                r.status.key().to_string()
            })
    }

    pub fn derive(&self) -> Page<Registration> {
        paginate(&self.rows, &self.predicates(), self.page_size, self.page)
    }

    /// Everything matching the current filters, across all pages
    pub fn filtered_rows(&self) -> Vec<Registration> {
        let predicates = self.predicates();
        self.rows
            .iter()
            .filter(|r| predicates.matches(r))
            .cloned()
            .collect()
    }

    fn filters_changed(&mut self) {
        self.page = 1;
        self.selection.reset();
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.event_facet.clear();
        self.status_facet.clear();
        self.filters_changed();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_search
    }
}

/// Escape one CSV field: quote when it contains a comma, quote, or newline
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the filtered registration rows as CSV
pub fn to_csv(rows: &[Registration]) -> String {
    let mut out = String::from("name,email,event,department,year,date,status\n");
    for r in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            csv_escape(&r.user_name),
            csv_escape(&r.user_email),
            csv_escape(&r.event_name),
            csv_escape(&r.department),
            csv_escape(&r.year),
            r.timestamp.format("%Y-%m-%d %H:%M"),
            r.status.key(),
        ));
    }
    out
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    let page = app.dashboard.registrations.derive();

    if app.dashboard.registrations.editing_search {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                app.dashboard.registrations.editing_search = false;
            }
            KeyCode::Backspace => {
                app.dashboard.registrations.query.pop();
                app.dashboard.registrations.filters_changed();
            }
            KeyCode::Char(c) => {
                app.dashboard.registrations.query.push(c);
                app.dashboard.registrations.filters_changed();
            }
            _ => {}
        }
        return Handled::Yes;
    }

    match key.code {
        KeyCode::Char('/') => {
            app.dashboard.registrations.editing_search = true;
            Handled::Yes
        }
        KeyCode::Char('e') => {
            app.dashboard.registrations.event_facet.select_next();
            app.dashboard.registrations.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('E') => {
            app.dashboard.registrations.event_facet.select_prev();
            app.dashboard.registrations.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('s') => {
            app.dashboard.registrations.status_facet.select_next();
            app.dashboard.registrations.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('S') => {
            app.dashboard.registrations.status_facet.select_prev();
            app.dashboard.registrations.filters_changed();
            Handled::Yes
        }
        KeyCode::Char('c') => {
            app.dashboard.registrations.clear_filters();
            Handled::Yes
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.dashboard
                .registrations
                .selection
                .select_prev(page.items.len());
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.dashboard
                .registrations
                .selection
                .select_next(page.items.len());
            Handled::Yes
        }
        KeyCode::Left => {
            if app.dashboard.registrations.page > 1 {
                app.dashboard.registrations.page -= 1;
                app.dashboard.registrations.selection.reset();
            }
            Handled::Yes
        }
        KeyCode::Right => {
            if app.dashboard.registrations.page < page.total_pages {
                app.dashboard.registrations.page += 1;
                app.dashboard.registrations.selection.reset();
            }
            Handled::Yes
        }
        KeyCode::Char('a') => {
            // Mark selected row attended
            if let Some(row) = selected_row(app, &page) {
                match app
                    .data
                    .set_registration_status(&row.id, RegistrationStatus::Attended)
                {
                    Ok(()) => app.show_toast(format!("✓ {} marked attended", row.user_name)),
                    Err(err) => app.show_toast(format!("✗ {err}")),
                }
                let data = app.data.clone();
                app.dashboard.registrations.refresh(data.as_ref());
            }
            Handled::Yes
        }
        KeyCode::Char('x') => {
            if let Some(row) = selected_row(app, &page) {
                app.modal = Some(Modal::confirm_cancel_registration(row.id, row.user_name));
            }
            Handled::Yes
        }
        KeyCode::Char('y') => {
            let rows = app.dashboard.registrations.filtered_rows();
            let csv = to_csv(&rows);
            if clipboard::copy_to_clipboard(&csv).is_ok() {
                app.show_toast(format!("✓ Exported {} rows as CSV", rows.len()));
            } else {
                app.show_toast("✗ Failed to copy");
            }
            Handled::Yes
        }
        KeyCode::Esc => {
            if app.dashboard.registrations.selection.selected.is_some() {
                app.dashboard.registrations.selection.reset();
                Handled::Yes
            } else if !app.dashboard.registrations.query.is_empty()
                || app.dashboard.registrations.event_facet.is_active()
                || app.dashboard.registrations.status_facet.is_active()
            {
                app.dashboard.registrations.clear_filters();
                Handled::Yes
            } else {
                Handled::No
            }
        }
        _ => Handled::No,
    }
}

fn selected_row(app: &App, page: &Page<Registration>) -> Option<Registration> {
    app.dashboard
        .registrations
        .selection
        .selected
        .and_then(|idx| page.items.get(idx).cloned())
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let page = app.dashboard.registrations.derive();
    app.dashboard.registrations.selection.clamp(page.items.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // filter bar
            Constraint::Min(5),    // table
            Constraint::Length(1), // pagination
        ])
        .split(area);

    render_filter_bar(f, chunks[0], app, &page);
    render_table(f, chunks[1], app, &page);
    pagination::render(f, chunks[2], &app.theme, &page, "registrations");
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App, page: &Page<Registration>) {
    let theme = &app.theme;
    let state = &app.dashboard.registrations;

    let search_text = if state.query.is_empty() && !state.editing_search {
        "Search by name or email… (/)".to_string()
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
        Span::styled(
            format!(" {search_text}"),
            if state.editing_search {
                Style::default().fg(theme.highlight)
            } else {
                Style::default().fg(theme.muted)
            },
        ),
        Span::styled("  │  ", Style::default().fg(theme.border)),
        Span::styled(
            format!(
                "⌄ {}",
                truncate_to_width(state.event_facet.selected_label(), 24)
            ),
            facet_style(state.event_facet.is_active()),
        ),
        Span::styled("  │  ", Style::default().fg(theme.border)),
        Span::styled(
            format!("⌄ {}", state.status_facet.selected_label()),
            facet_style(state.status_facet.is_active()),
        ),
        Span::styled("  │  ", Style::default().fg(theme.border)),
        Span::styled(
            format!("{} matching", page.total_matching),
            Style::default().fg(theme.foreground),
        ),
        Span::styled("  │  y:export CSV", Style::default().fg(theme.muted)),
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

fn render_table(f: &mut Frame, area: Rect, app: &App, page: &Page<Registration>) {
    let theme = &app.theme;
    let selected = app.dashboard.registrations.selection.selected;

    let header = Row::new(vec!["Name", "Email", "Event", "Department", "Date", "Status"]).style(
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = page
        .items
        .iter()
        .enumerate()
        .map(|(idx, registration)| {
            let base = if selected == Some(idx) {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
            } else {
                Style::default().fg(theme.foreground)
            };
            Row::new(vec![
                Cell::from(registration.user_name.clone()),
                Cell::from(registration.user_email.clone()),
                Cell::from(truncate_to_width(&registration.event_name, 26)),
                Cell::from(format!(
                    "{} · {}",
                    registration.department, registration.year
                )),
                Cell::from(format_date(registration.timestamp)),
                Cell::from(Span::styled(
                    registration.status.label(),
                    Style::default().fg(theme.registration_status_color(registration.status)),
                )),
            ])
            .style(base)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(28),
            Constraint::Length(24),
            Constraint::Length(13),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Registrations "),
    );

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryDataSource;

    fn state() -> RegistrationsPage {
        let config = Config::default();
        let data = InMemoryDataSource::seeded();
        RegistrationsPage::new(&config, &data)
    }

    fn select_status(page: &mut RegistrationsPage, key: &str) {
        while page.status_facet.selected_key() != Some(key) {
            assert!(page.status_facet.select_next(), "status {key} not found");
        }
        page.filters_changed();
    }

    #[test]
    fn cancelled_filter_returns_one_of_seven() {
        let mut state = state();
        assert_eq!(state.derive().total_matching, 7);

        select_status(&mut state, "cancelled");
        let page = state.derive();
        assert_eq!(page.total_matching, 1);
        assert_eq!(page.items[0].user_name, "David Brown");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn event_facet_keys_on_event_id() {
        let mut state = state();
        state.event_facet.select_next(); // first event in catalog order: id "1"
        state.filters_changed();

        let page = state.derive();
        assert_eq!(page.total_matching, 3);
        assert!(page.items.iter().all(|r| r.event_id == "1"));
    }

    #[test]
    fn search_covers_name_and_email() {
        let mut state = state();
        state.query = "mike.j@".into();
        assert_eq!(state.derive().total_matching, 1);

        state.query = "emily".into();
        assert_eq!(state.derive().total_matching, 1);
    }

    #[test]
    fn csv_export_quotes_awkward_fields() {
        let state = state();
        let csv = to_csv(&state.filtered_rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 8); // header + 7 rows
        assert_eq!(lines[0], "name,email,event,department,year,date,status");
        // The cultural fest title contains quotes and a comma-free dash;
        // quoted fields must double their quotes
        assert!(csv.contains("\"Cultural Fest 2023 - \"\"Harmony\"\"\""));
    }

    #[test]
    fn csv_escape_rules() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
