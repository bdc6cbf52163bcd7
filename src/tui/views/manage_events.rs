// Manage Events - admin table with search, CRUD, and publish toggling
//
// The table searches title + department and pages through the full catalog,
// drafts included. Create/edit opens an inline editor whose save goes
// through the stub backend; delete asks for confirmation first.

use crate::backend::{SubmitError, SubmitKind, Submission};
use crate::collection::{paginate, Page, Predicates};
use crate::config::Config;
use crate::data::{DataSource, EventDraft};
use crate::models::{Event, EventType};
use crate::tui::app::App;
use crate::tui::components::formatters::format_date;
use crate::tui::components::{pagination, truncate_to_width};
use crate::tui::form::{Form, TextField};
use crate::tui::modal::Modal;
use crate::tui::scroll::Selection;
use crate::tui::views::Handled;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Inline create/edit form. `editing_id` is None for a new event.
pub struct EventEditor {
    pub editing_id: Option<String>,
    pub form: Form,
    pub kind: EventType,
    pub is_published: bool,
}

impl EventEditor {
    fn create() -> Self {
        Self {
            editing_id: None,
            form: Self::form_fields(),
            kind: EventType::Workshop,
            is_published: false,
        }
    }

    fn edit(event: &Event) -> Self {
        let mut form = Self::form_fields();
        form.set_value("title", event.title.clone());
        form.set_value("department", event.department.clone());
        form.set_value("venue", event.venue.clone());
        form.set_value("capacity", event.capacity.to_string());
        form.set_value("start", event.start_at.format(DATETIME_FORMAT).to_string());
        form.set_value("end", event.end_at.format(DATETIME_FORMAT).to_string());
        form.set_value("tags", event.tags.join(", "));
        form.set_value("description", event.description.clone());

        Self {
            editing_id: Some(event.id.clone()),
            form,
            kind: event.kind,
            is_published: event.is_published.unwrap_or(false),
        }
    }

    fn form_fields() -> Form {
        Form::new(vec![
            TextField::new("title", "Title"),
            TextField::new("department", "Department"),
            TextField::new("venue", "Venue"),
            TextField::new("capacity", "Capacity"),
            TextField::new("start", "Starts"),
            TextField::new("end", "Ends"),
            TextField::new("tags", "Tags"),
            TextField::new("description", "Description"),
        ])
    }

    fn parse_datetime(&self, field: &'static str) -> Result<DateTime<Utc>, SubmitError> {
        let raw = self.form.value(field);
        NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|_| SubmitError::validation(field, "Use YYYY-MM-DD HH:MM"))
    }

    /// Turn the form into a draft, or a validation error pointing at the
    /// first bad field
    fn build_draft(&self) -> Result<EventDraft, SubmitError> {
        let capacity: u32 = self
            .form
            .value("capacity")
            .trim()
            .parse()
            .map_err(|_| SubmitError::validation("capacity", "Enter a whole number"))?;

        let tags = self
            .form
            .value("tags")
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(EventDraft {
            title: self.form.value("title").to_string(),
            description: self.form.value("description").to_string(),
            department: self.form.value("department").to_string(),
            kind: self.kind,
            start_at: self.parse_datetime("start")?,
            end_at: self.parse_datetime("end")?,
            venue: self.form.value("venue").to_string(),
            capacity,
            tags,
            is_published: Some(self.is_published),
        })
    }
}

pub struct ManageEventsPage {
    pub query: String,
    pub editing_search: bool,
    pub page: usize,
    pub selection: Selection,
    page_size: usize,
    catalog: Vec<Event>,
    pub editor: Option<EventEditor>,
    pending: Option<Submission>,
}

impl ManageEventsPage {
    pub fn new(config: &Config, data: &dyn DataSource) -> Self {
        Self {
            query: String::new(),
            editing_search: false,
            page: 1,
            selection: Selection::default(),
            page_size: config.admin_page_size,
            catalog: data.events(),
            editor: None,
            pending: None,
        }
    }

    pub fn refresh(&mut self, data: &dyn DataSource) {
        self.catalog = data.events();
    }

    pub fn derive(&self) -> Page<Event> {
        let predicates = Predicates::new().search(
            &self.query,
            vec![|e: &Event| e.title.as_str(), |e: &Event| e.department.as_str()],
        );
        paginate(&self.catalog, &predicates, self.page_size, self.page)
    }

    fn filters_changed(&mut self) {
        self.page = 1;
        self.selection.reset();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_search || self.editor.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|s| !s.is_finished())
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Closing the editor drops any in-flight save with it
    pub fn close_editor(&mut self) {
        self.editor = None;
        self.pending = None;
    }

    pub fn set_editor_error(&mut self, err: &SubmitError) {
        if let Some(editor) = &mut self.editor {
            editor.form.set_error(err);
        }
    }

    fn selected_event(&self, page: &Page<Event>) -> Option<Event> {
        self.selection.selected.and_then(|idx| page.items.get(idx).cloned())
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    if app.dashboard.manage.editor.is_some() {
        return handle_editor_key(app, key);
    }

    let page = app.dashboard.manage.derive();

    if app.dashboard.manage.editing_search {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.dashboard.manage.editing_search = false,
            KeyCode::Backspace => {
                app.dashboard.manage.query.pop();
                app.dashboard.manage.filters_changed();
            }
            KeyCode::Char(c) => {
                app.dashboard.manage.query.push(c);
                app.dashboard.manage.filters_changed();
            }
            _ => {}
        }
        return Handled::Yes;
    }

    match key.code {
        KeyCode::Char('/') => {
            app.dashboard.manage.editing_search = true;
            Handled::Yes
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.dashboard.manage.selection.select_prev(page.items.len());
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.dashboard.manage.selection.select_next(page.items.len());
            Handled::Yes
        }
        KeyCode::Left => {
            if app.dashboard.manage.page > 1 {
                app.dashboard.manage.page -= 1;
                app.dashboard.manage.selection.reset();
            }
            Handled::Yes
        }
        KeyCode::Right => {
            if app.dashboard.manage.page < page.total_pages {
                app.dashboard.manage.page += 1;
                app.dashboard.manage.selection.reset();
            }
            Handled::Yes
        }
        KeyCode::Char('n') => {
            app.dashboard.manage.editor = Some(EventEditor::create());
            Handled::Yes
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(event) = app.dashboard.manage.selected_event(&page) {
                app.dashboard.manage.editor = Some(EventEditor::edit(&event));
            }
            Handled::Yes
        }
        KeyCode::Char('p') => {
            if let Some(event) = app.dashboard.manage.selected_event(&page) {
                match app.data.toggle_published(&event.id) {
                    Ok(true) => app.show_toast(format!("✓ Published \"{}\"", event.title)),
                    Ok(false) => app.show_toast(format!("✓ Unpublished \"{}\"", event.title)),
                    Err(err) => app.show_toast(format!("✗ {err}")),
                }
                let data = app.data.clone();
                app.dashboard.refresh(data.as_ref());
            }
            Handled::Yes
        }
        KeyCode::Char('x') => {
            if let Some(event) = app.dashboard.manage.selected_event(&page) {
                app.modal = Some(Modal::confirm_delete_event(event.id, event.title));
            }
            Handled::Yes
        }
        KeyCode::Esc => {
            if app.dashboard.manage.selection.selected.is_some() {
                app.dashboard.manage.selection.reset();
                Handled::Yes
            } else if !app.dashboard.manage.query.is_empty() {
                app.dashboard.manage.query.clear();
                app.dashboard.manage.filters_changed();
                Handled::Yes
            } else {
                Handled::No
            }
        }
        _ => Handled::No,
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) -> Handled {
    // Ctrl-modified keys adjust the non-text settings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let Some(editor) = &mut app.dashboard.manage.editor {
            match key.code {
                KeyCode::Char('t') => {
                    let all = EventType::ALL;
                    let idx = all.iter().position(|k| *k == editor.kind).unwrap_or(0);
                    editor.kind = all[(idx + 1) % all.len()];
                    return Handled::Yes;
                }
                KeyCode::Char('p') => {
                    editor.is_published = !editor.is_published;
                    return Handled::Yes;
                }
                _ => {}
            }
        }
    }

    match key.code {
        KeyCode::Esc => {
            app.dashboard.manage.close_editor();
            Handled::Yes
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(editor) = &mut app.dashboard.manage.editor {
                editor.form.focus_next();
            }
            Handled::Yes
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(editor) = &mut app.dashboard.manage.editor {
                editor.form.focus_prev();
            }
            Handled::Yes
        }
        KeyCode::Backspace => {
            if let Some(editor) = &mut app.dashboard.manage.editor {
                editor.form.backspace();
            }
            Handled::Yes
        }
        KeyCode::Enter => {
            submit_editor(app);
            Handled::Yes
        }
        KeyCode::Char(c) => {
            if let Some(editor) = &mut app.dashboard.manage.editor {
                editor.form.insert_char(c);
            }
            Handled::Yes
        }
        _ => Handled::Yes,
    }
}

fn submit_editor(app: &mut App) {
    if app.dashboard.manage.has_pending() {
        return;
    }
    let Some(editor) = &app.dashboard.manage.editor else {
        return;
    };

    let draft = match editor.build_draft() {
        Ok(draft) => draft,
        Err(err) => {
            app.dashboard.manage.set_editor_error(&err);
            return;
        }
    };

    let fut = app
        .backend
        .save_event(app.data.clone(), editor.editing_id.clone(), draft);
    app.dashboard.manage.pending = Some(Submission::spawn(
        SubmitKind::EventSave,
        app.outcome_tx.clone(),
        fut,
    ));
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let page = app.dashboard.manage.derive();
    app.dashboard.manage.selection.clamp(page.items.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Min(5),    // table
            Constraint::Length(1), // pagination
        ])
        .split(area);

    render_search_bar(f, chunks[0], app, &page);
    render_table(f, chunks[1], app, &page);
    pagination::render(f, chunks[2], &app.theme, &page, "events");

    if app.dashboard.manage.editor.is_some() {
        render_editor(f, app);
    }
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App, page: &Page<Event>) {
    let theme = &app.theme;
    let state = &app.dashboard.manage;

    let search_text = if state.query.is_empty() && !state.editing_search {
        "Search by title or department… (/)".to_string()
    } else {
        let cursor = if state.editing_search { "▏" } else { "" };
        format!("{}{}", state.query, cursor)
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
            format!("{} matching", page.total_matching),
            Style::default().fg(theme.foreground),
        ),
        Span::styled(
            "  │  n:new  e:edit  p:publish  x:delete",
            Style::default().fg(theme.muted),
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

fn render_table(f: &mut Frame, area: Rect, app: &App, page: &Page<Event>) {
    let theme = &app.theme;
    let now = Utc::now();
    let selected = app.dashboard.manage.selection.selected;

    let header = Row::new(vec!["Title", "Department", "Date", "Seats", "Status"]).style(
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = page
        .items
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let status = event.status(now);
            let base = if selected == Some(idx) {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
            } else {
                Style::default().fg(theme.foreground)
            };
            Row::new(vec![
                Cell::from(truncate_to_width(&event.title, 34)),
                Cell::from(event.department.clone()),
                Cell::from(format_date(event.start_at)),
                Cell::from(format!("{}/{}", event.registered_count, event.capacity)),
                Cell::from(Span::styled(
                    status.label(),
                    Style::default().fg(theme.event_status_color(status)),
                )),
            ])
            .style(base)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(22),
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Manage Events "),
    );

    f.render_widget(table, area);
}

fn render_editor(f: &mut Frame, app: &App) {
    let Some(editor) = &app.dashboard.manage.editor else {
        return;
    };
    let theme = &app.theme;

    let title = match &editor.editing_id {
        Some(_) => " Edit Event ",
        None => " Create Event ",
    };

    let height = (editor.form.len() as u16) + 9;
    let width = 60u16.min(f.area().width.saturating_sub(4));
    let x = f.area().x + (f.area().width - width) / 2;
    let y = f.area().y + (f.area().height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height.min(f.area().height));

    let mut lines = Vec::new();
    for (idx, field) in editor.form.fields().iter().enumerate() {
        let focused = idx == editor.form.focused;
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if editor.form.field_has_error(field.name) {
            Style::default().fg(theme.danger)
        } else if focused {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.muted)
        };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<12}", field.label), label_style),
            Span::styled(
                format!("{}{}", field.display_value(), cursor),
                Style::default().fg(theme.foreground),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Type        ", Style::default().fg(theme.muted)),
        Span::styled(
            editor.kind.label(),
            Style::default().fg(theme.event_type_color(editor.kind)),
        ),
        Span::styled("  (Ctrl+T)", Style::default().fg(theme.muted)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Published   ", Style::default().fg(theme.muted)),
        if editor.is_published {
            Span::styled("yes", Style::default().fg(theme.success))
        } else {
            Span::styled("no", Style::default().fg(theme.danger))
        },
        Span::styled("  (Ctrl+P)", Style::default().fg(theme.muted)),
    ]));

    lines.push(Line::from(""));
    match &editor.form.error {
        Some(err) => lines.push(Line::from(Span::styled(
            format!("  ✗ {}", err.message),
            Style::default().fg(theme.danger),
        ))),
        None => lines.push(Line::from(Span::styled(
            if app.dashboard.manage.has_pending() {
                format!("  {} Saving…", app.spinner_char())
            } else {
                "  Enter save · Tab next field · Esc cancel".to_string()
            },
            Style::default().fg(theme.muted),
        ))),
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(title);

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemoryDataSource;

    fn state() -> ManageEventsPage {
        let config = Config::default();
        let data = InMemoryDataSource::seeded();
        ManageEventsPage::new(&config, &data)
    }

    #[test]
    fn admin_table_includes_drafts() {
        let page = state().derive();
        assert_eq!(page.total_matching, 8);
        assert_eq!(page.total_pages, 2); // 8 events, page size 5
    }

    #[test]
    fn search_matches_title_or_department() {
        let mut manage = state();
        manage.query = "robotics".into();
        assert_eq!(manage.derive().total_matching, 1);

        manage.query = "computer science".into();
        assert_eq!(manage.derive().total_matching, 2);
    }

    #[test]
    fn search_change_resets_page() {
        let mut manage = state();
        manage.page = 2;
        manage.query.push('a');
        manage.filters_changed();
        assert_eq!(manage.page, 1);
    }

    #[test]
    fn editor_round_trips_an_event() {
        let data = InMemoryDataSource::seeded();
        let event = data.event("1").unwrap();
        let editor = EventEditor::edit(&event);

        let draft = editor.build_draft().expect("seed event should parse");
        assert_eq!(draft.title, event.title);
        assert_eq!(draft.capacity, event.capacity);
        assert_eq!(draft.start_at, event.start_at);
        assert_eq!(draft.kind, event.kind);
    }

    #[test]
    fn editor_rejects_bad_capacity_and_dates() {
        let mut editor = EventEditor::create();
        editor.form.set_value("title", "X");
        editor.form.set_value("capacity", "lots");
        editor.form.set_value("start", "2024-03-01 10:00");
        editor.form.set_value("end", "2024-03-01 12:00");
        assert!(matches!(
            editor.build_draft().unwrap_err(),
            SubmitError::Validation { field: "capacity", .. }
        ));

        editor.form.set_value("capacity", "20");
        editor.form.set_value("start", "March 1st");
        assert!(matches!(
            editor.build_draft().unwrap_err(),
            SubmitError::Validation { field: "start", .. }
        ));
    }
}
