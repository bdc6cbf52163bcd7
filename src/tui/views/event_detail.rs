// Event detail - full description, schedule sidebar, registration flow
//
// The event is looked up by id when the route opens (App::open_event);
// unknown ids never reach this screen. Registering opens a small form whose
// submission is spawned through the stub backend - closing the form or
// leaving the screen aborts an in-flight submission.

use crate::backend::{SubmitError, SubmitKind, Submission};
use crate::data::RegistrationForm;
use crate::models::Event;
use crate::tui::app::App;
use crate::tui::clipboard;
use crate::tui::components::event_card;
use crate::tui::components::formatters::{format_long_date, format_time};
use crate::tui::components::scrollbar::render_scrollbar;
use crate::tui::form::{Form, TextField};
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::ScrollState;
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Default)]
pub struct EventDetailPage {
    event: Option<Event>,
    pub scroll: ScrollState,
    pub form: Option<Form>,
    pending: Option<Submission>,
}

impl EventDetailPage {
    pub fn load(&mut self, event: Event) {
        self.event = Some(event);
        self.scroll.reset();
    }

    pub fn event_id(&self) -> Option<String> {
        self.event.as_ref().map(|e| e.id.clone())
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|s| !s.is_finished())
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Closing the form drops any in-flight submission with it
    pub fn close_form(&mut self) {
        self.form = None;
        self.pending = None;
    }

    pub fn set_form_error(&mut self, err: &SubmitError) {
        if let Some(form) = &mut self.form {
            form.set_error(err);
        }
    }

    fn open_form(&mut self, prefill: Option<&crate::models::User>) {
        let mut form = Form::new(vec![
            TextField::new("name", "Full name"),
            TextField::new("email", "Email"),
            TextField::new("department", "Department"),
            TextField::new("year", "Year"),
        ]);
        if let Some(user) = prefill {
            form.set_value("name", user.name.clone());
            form.set_value("email", user.email.clone());
            form.set_value("department", user.department.clone());
            form.set_value("year", user.year.clone());
        }
        self.form = Some(form);
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    if app.detail.form.is_some() {
        return handle_form_key(app, key);
    }

    match key.code {
        KeyCode::Char('r') => {
            match app.detail.event.as_ref() {
                Some(event) if event.is_full() => {
                    app.show_toast("✗ This event is full");
                }
                Some(_) => {
                    let session = app.session.clone();
                    app.detail.open_form(session.as_ref());
                }
                None => {}
            }
            Handled::Yes
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.detail.scroll.scroll_up();
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.detail.scroll.scroll_down();
            Handled::Yes
        }
        KeyCode::PageUp => {
            app.detail.scroll.page_up();
            Handled::Yes
        }
        KeyCode::PageDown => {
            app.detail.scroll.page_down();
            Handled::Yes
        }
        KeyCode::Home => {
            app.detail.scroll.scroll_to_top();
            Handled::Yes
        }
        KeyCode::Char('y') => {
            if let Some(event) = &app.detail.event {
                let line = event_card::event_line(event, usize::MAX);
                if clipboard::copy_to_clipboard(&line).is_ok() {
                    app.show_toast("✓ Copied to clipboard");
                } else {
                    app.show_toast("✗ Failed to copy");
                }
            }
            Handled::Yes
        }
        _ => Handled::No,
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) -> Handled {
    match key.code {
        KeyCode::Esc => {
            app.detail.close_form();
            Handled::Yes
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = &mut app.detail.form {
                form.focus_next();
            }
            Handled::Yes
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = &mut app.detail.form {
                form.focus_prev();
            }
            Handled::Yes
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.detail.form {
                form.backspace();
            }
            Handled::Yes
        }
        KeyCode::Enter => {
            submit_registration(app);
            Handled::Yes
        }
        KeyCode::Char(c) => {
            if let Some(form) = &mut app.detail.form {
                form.insert_char(c);
            }
            Handled::Yes
        }
        _ => Handled::Yes, // Form captures everything while open
    }
}

fn submit_registration(app: &mut App) {
    if app.detail.has_pending() {
        return; // Already submitting
    }
    let Some(event_id) = app.detail.event_id() else {
        return;
    };
    let Some(form) = &app.detail.form else {
        return;
    };

    let registration = RegistrationForm {
        name: form.value("name").to_string(),
        email: form.value("email").to_string(),
        department: form.value("department").to_string(),
        year: form.value("year").to_string(),
    };

    let fut =
        app.backend
            .register_for_event(app.data.clone(), event_id, registration);
    app.detail.pending = Some(Submission::spawn(
        SubmitKind::EventRegistration,
        app.outcome_tx.clone(),
        fut,
    ));
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(event) = app.detail.event.clone() else {
        return;
    };

    let bp = Breakpoint::from_width(area.width);
    if bp.at_least(Breakpoint::Normal) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(36)])
            .split(area);
        render_description(f, chunks[0], app, &event);
        render_sidebar(f, chunks[1], app, &event);
    } else {
        render_description(f, area, app, &event);
    }

    if app.detail.form.is_some() {
        render_form(f, app, &event);
    }
}

fn render_description(f: &mut Frame, area: Rect, app: &mut App, event: &Event) {
    let theme = &app.theme;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            event.title.clone(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("[{}] ", event.kind.label()),
                Style::default().fg(theme.event_type_color(event.kind)),
            ),
            Span::styled(event.department.clone(), Style::default().fg(theme.muted)),
        ]),
        Line::from(""),
    ];
    for paragraph in event.description.split('\n') {
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            Style::default().fg(theme.foreground),
        )));
    }
    if !event.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            event
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join("  "),
            Style::default().fg(theme.info),
        )));
    }

    // Estimate wrapped height so the scrollbar tracks reality
    let wrapped_total: usize = lines
        .iter()
        .map(|l| {
            let w: usize = l.spans.iter().map(|s| s.content.width()).sum();
            (w.max(1)).div_ceil(inner_width)
        })
        .sum();
    let viewport = area.height.saturating_sub(2) as usize;
    app.detail.scroll.update_dimensions(wrapped_total, viewport);
    let offset = app.detail.scroll.offset();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border))
                .title(" Event "),
        );
    f.render_widget(paragraph, area);
    render_scrollbar(f, area, wrapped_total, viewport, offset);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App, event: &Event) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let label = |t: &'static str| Span::styled(t, Style::default().fg(theme.muted));
    let value = |t: String| Span::styled(t, Style::default().fg(theme.foreground));

    let seats_line = if event.is_full() {
        Span::styled("Full - registration closed", Style::default().fg(theme.danger))
    } else {
        Span::styled(
            format!("{} seats left", event.seats_left()),
            Style::default().fg(theme.success),
        )
    };

    let lines = vec![
        Line::from(vec![label("Date    "), value(format_long_date(event.start_at))]),
        Line::from(vec![
            label("Time    "),
            value(format!(
                "{} - {}",
                format_time(event.start_at),
                format_time(event.end_at)
            )),
        ]),
        Line::from(vec![label("Venue   "), value(event.venue.clone())]),
        Line::from(vec![
            label("Seats   "),
            value(format!("{}/{}", event.registered_count, event.capacity)),
        ]),
        Line::from(seats_line),
        Line::from(""),
        Line::from(Span::styled(
            "r to register",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Details "),
    );
    f.render_widget(info, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Capacity "),
        )
        .gauge_style(Style::default().fg(theme.accent).bg(theme.selection))
        .ratio((event.fill_percent() / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", event.fill_percent()));
    f.render_widget(gauge, chunks[1]);
}

fn render_form(f: &mut Frame, app: &App, event: &Event) {
    let Some(form) = &app.detail.form else {
        return;
    };
    let theme = &app.theme;

    let height = (form.len() as u16) * 2 + 5;
    let width = 46u16.min(f.area().width.saturating_sub(4));
    let x = f.area().x + (f.area().width - width) / 2;
    let y = f.area().y + (f.area().height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height.min(f.area().height));

    let mut lines = vec![Line::from(Span::styled(
        format!("Register for {}", event.title),
        Style::default().fg(theme.foreground),
    ))];

    for (idx, field) in form.fields().iter().enumerate() {
        let focused = idx == form.focused;
        let marker = if focused { "▸ " } else { "  " };
        let field_style = if form.field_has_error(field.name) {
            Style::default().fg(theme.danger)
        } else if focused {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.muted)
        };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<10}", field.label), field_style),
            Span::styled(
                format!("{}{}", field.display_value(), cursor),
                Style::default().fg(theme.foreground),
            ),
        ]));
    }

    lines.push(Line::from(""));
    match &form.error {
        Some(err) => lines.push(Line::from(Span::styled(
            format!("✗ {}", err.message),
            Style::default().fg(theme.danger),
        ))),
        None => lines.push(Line::from(Span::styled(
            if app.detail.has_pending() {
                format!("{} Submitting…", app.spinner_char())
            } else {
                "Enter submit · Tab next field · Esc cancel".to_string()
            },
            Style::default().fg(theme.muted),
        ))),
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(" Registration ");

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
