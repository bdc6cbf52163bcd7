// Profile - user details with edit mode and their registrations table

use crate::backend::{SubmitError, SubmitKind, Submission};
use crate::data::DataSource;
use crate::models::{Registration, User};
use crate::tui::app::App;
use crate::tui::components::formatters::format_date;
use crate::tui::components::truncate_to_width;
use crate::tui::form::{Form, TextField};
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

pub struct ProfilePage {
    user: User,
    registrations: Vec<Registration>,
    pub editing: bool,
    pub form: Form,
    pub selection: Selection,
    pending: Option<Submission>,
}

impl ProfilePage {
    pub fn new(data: &dyn DataSource) -> Self {
        let user = data.current_user();
        let registrations = data.registrations_for_user(&user.id);
        Self {
            form: Self::form_for(&user),
            user,
            registrations,
            editing: false,
            selection: Selection::default(),
            pending: None,
        }
    }

    fn form_for(user: &User) -> Form {
        Form::new(vec![
            TextField::new("name", "Name").with_value(user.name.clone()),
            TextField::new("email", "Email").with_value(user.email.clone()),
            TextField::new("department", "Department").with_value(user.department.clone()),
            TextField::new("year", "Year").with_value(user.year.clone()),
            TextField::new("bio", "Bio").with_value(user.bio.clone()),
        ])
    }

    /// Route-entry refresh: new snapshot, edit mode dropped
    pub fn reload(&mut self, data: &dyn DataSource) {
        self.user = data.current_user();
        self.registrations = data.registrations_for_user(&self.user.id);
        self.form = Self::form_for(&self.user);
        self.editing = false;
        self.pending = None;
        self.selection.reset();
    }

    /// Called after a successful save lands
    pub fn finish_edit(&mut self, data: &dyn DataSource) {
        self.reload(data);
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|s| !s.is_finished())
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn set_form_error(&mut self, err: &SubmitError) {
        self.form.set_error(err);
    }

    fn edited_user(&self) -> User {
        User {
            id: self.user.id.clone(),
            name: self.form.value("name").to_string(),
            email: self.form.value("email").to_string(),
            role: self.user.role,
            department: self.form.value("department").to_string(),
            year: self.form.value("year").to_string(),
            bio: self.form.value("bio").to_string(),
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    if app.profile_page.editing {
        return handle_edit_key(app, key);
    }

    match key.code {
        KeyCode::Char('e') => {
            app.profile_page.editing = true;
            Handled::Yes
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let count = app.profile_page.registrations.len();
            app.profile_page.selection.select_prev(count);
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let count = app.profile_page.registrations.len();
            app.profile_page.selection.select_next(count);
            Handled::Yes
        }
        KeyCode::Enter => {
            if let Some(idx) = app.profile_page.selection.selected {
                if let Some(row) = app.profile_page.registrations.get(idx) {
                    let id = row.event_id.clone();
                    app.open_event(&id);
                }
            }
            Handled::Yes
        }
        KeyCode::Esc => {
            if app.profile_page.selection.selected.is_some() {
                app.profile_page.selection.reset();
                Handled::Yes
            } else {
                Handled::No
            }
        }
        _ => Handled::No,
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) -> Handled {
    match key.code {
        KeyCode::Esc => {
            // Discard edits, drop any in-flight save
            let data = app.data.clone();
            app.profile_page.reload(data.as_ref());
            Handled::Yes
        }
        KeyCode::Tab | KeyCode::Down => {
            app.profile_page.form.focus_next();
            Handled::Yes
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.profile_page.form.focus_prev();
            Handled::Yes
        }
        KeyCode::Backspace => {
            app.profile_page.form.backspace();
            Handled::Yes
        }
        KeyCode::Enter => {
            submit_profile(app);
            Handled::Yes
        }
        KeyCode::Char(c) => {
            app.profile_page.form.insert_char(c);
            Handled::Yes
        }
        _ => Handled::Yes,
    }
}

fn submit_profile(app: &mut App) {
    if app.profile_page.has_pending() {
        return;
    }
    let user = app.profile_page.edited_user();
    let fut = app.backend.save_profile(app.data.clone(), user);
    app.profile_page.pending = Some(Submission::spawn(
        SubmitKind::ProfileSave,
        app.outcome_tx.clone(),
        fut,
    ));
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let count = app.profile_page.registrations.len();
    app.profile_page.selection.clamp(count);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(area);

    render_details(f, chunks[0], app);
    render_registrations(f, chunks[1], app);
}

fn render_details(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.profile_page;

    let mut lines = Vec::new();
    if state.editing {
        for (idx, field) in state.form.fields().iter().enumerate() {
            let focused = idx == state.form.focused;
            let marker = if focused { "▸ " } else { "  " };
            let label_style = if state.form.field_has_error(field.name) {
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
            lines.push(Line::from(""));
        }
        match &state.form.error {
            Some(err) => lines.push(Line::from(Span::styled(
                format!("✗ {}", err.message),
                Style::default().fg(theme.danger),
            ))),
            None => lines.push(Line::from(Span::styled(
                if state.has_pending() {
                    format!("{} Saving…", app.spinner_char())
                } else {
                    "Enter save · Esc discard".to_string()
                },
                Style::default().fg(theme.muted),
            ))),
        }
    } else {
        let label = |t: &'static str| Span::styled(format!("  {t:<12}"), Style::default().fg(theme.muted));
        lines.push(Line::from(Span::styled(
            format!("  {}", state.user.name),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                state.user.role.label(),
                Style::default().fg(theme.accent),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label("Email"),
            Span::styled(state.user.email.clone(), Style::default().fg(theme.foreground)),
        ]));
        lines.push(Line::from(vec![
            label("Department"),
            Span::styled(
                state.user.department.clone(),
                Style::default().fg(theme.foreground),
            ),
        ]));
        lines.push(Line::from(vec![
            label("Year"),
            Span::styled(state.user.year.clone(), Style::default().fg(theme.foreground)),
        ]));
        lines.push(Line::from(""));
        for bio_line in state.user.bio.split('\n') {
            lines.push(Line::from(Span::styled(
                format!("  {bio_line}"),
                Style::default().fg(theme.muted),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  e to edit profile",
            Style::default().fg(theme.accent),
        )));
    }

    let title = if state.editing { " Edit Profile " } else { " Profile " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(if state.editing {
            theme.highlight
        } else {
            theme.border
        }))
        .title(title);

    f.render_widget(
        Paragraph::new(lines)
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(block),
        area,
    );
}

fn render_registrations(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.profile_page;
    let selected = state.selection.selected;

    let header = Row::new(vec!["Event", "Date", "Department", "Status"]).style(
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .registrations
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
                Cell::from(truncate_to_width(&registration.event_name, 30)),
                Cell::from(format_date(registration.timestamp)),
                Cell::from(registration.department.clone()),
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
            Constraint::Min(24),
            Constraint::Length(13),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" My Registrations ({}) ", state.registrations.len())),
    );

    f.render_widget(table, area);
}
