// Auth screens - login, signup, forgot password
//
// Forms submit through the stub backend: local validation can fail (and the
// UI shows it inline), the simulated network call always succeeds after the
// configured latency. Successful login/signup installs the profile user as
// the session.

use crate::backend::{SubmitError, SubmitKind, Submission};
use crate::tui::app::{App, Route};
use crate::tui::form::{Form, TextField};
use crate::tui::views::Handled;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct AuthPages {
    pub login: Form,
    pub signup: Form,
    pub forgot: Form,
    pending: Option<Submission>,
}

impl Default for AuthPages {
    fn default() -> Self {
        Self {
            login: Form::new(vec![
                TextField::new("email", "Email"),
                TextField::masked("password", "Password"),
            ]),
            signup: Form::new(vec![
                TextField::new("name", "Full name"),
                TextField::new("email", "Email"),
                TextField::masked("password", "Password"),
                TextField::masked("confirm", "Confirm password"),
            ]),
            forgot: Form::new(vec![TextField::new("email", "Email")]),
            pending: None,
        }
    }
}

impl AuthPages {
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|s| !s.is_finished())
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn reset_forms(&mut self) {
        self.login.clear();
        self.signup.clear();
        self.forgot.clear();
    }

    pub fn set_error(&mut self, kind: SubmitKind, err: &SubmitError) {
        match kind {
            SubmitKind::Login => self.login.set_error(err),
            SubmitKind::Signup => self.signup.set_error(err),
            SubmitKind::PasswordReset => self.forgot.set_error(err),
            _ => {}
        }
    }

    fn form_for_route(&mut self, route: Route) -> Option<&mut Form> {
        match route {
            Route::Login => Some(&mut self.login),
            Route::Signup => Some(&mut self.signup),
            Route::ForgotPassword => Some(&mut self.forgot),
            _ => None,
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    let route = app.route;
    match key.code {
        KeyCode::Esc => {
            app.auth.clear_pending();
            app.go_back();
            Handled::Yes
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.auth.form_for_route(route) {
                form.focus_next();
            }
            Handled::Yes
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.auth.form_for_route(route) {
                form.focus_prev();
            }
            Handled::Yes
        }
        KeyCode::Backspace => {
            if let Some(form) = app.auth.form_for_route(route) {
                form.backspace();
            }
            Handled::Yes
        }
        KeyCode::Enter => {
            submit(app);
            Handled::Yes
        }
        // Screen switches: ^S to sign up, ^F forgot, ^L login
        KeyCode::Char(c)
            if key
                .modifiers
                .contains(crossterm::event::KeyModifiers::CONTROL) =>
        {
            match c {
                's' => app.navigate(Route::Signup),
                'f' => app.navigate(Route::ForgotPassword),
                'l' => app.navigate(Route::Login),
                _ => {}
            }
            Handled::Yes
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.auth.form_for_route(route) {
                form.insert_char(c);
            }
            Handled::Yes
        }
        _ => Handled::Yes,
    }
}

fn submit(app: &mut App) {
    if app.auth.has_pending() {
        return;
    }

    let backend = app.backend;
    let tx = app.outcome_tx.clone();
    let submission = match app.route {
        Route::Login => {
            let email = app.auth.login.value("email").to_string();
            let password = app.auth.login.value("password").to_string();
            Submission::spawn(SubmitKind::Login, tx, backend.login(email, password))
        }
        Route::Signup => {
            let name = app.auth.signup.value("name").to_string();
            let email = app.auth.signup.value("email").to_string();
            let password = app.auth.signup.value("password").to_string();
            let confirm = app.auth.signup.value("confirm").to_string();
            Submission::spawn(
                SubmitKind::Signup,
                tx,
                backend.signup(name, email, password, confirm),
            )
        }
        Route::ForgotPassword => {
            let email = app.auth.forgot.value("email").to_string();
            Submission::spawn(
                SubmitKind::PasswordReset,
                tx,
                backend.request_password_reset(email),
            )
        }
        _ => return,
    };
    app.auth.pending = Some(submission);
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let route = app.route;
    let pending = app.auth.has_pending();
    let spinner = app.spinner_char();

    let (title, subtitle, footer): (&str, &str, &str) = match route {
        Route::Login => (
            "Welcome back",
            "Log in to your account to continue",
            "^S sign up · ^F forgot password · Esc back",
        ),
        Route::Signup => (
            "Create an account",
            "Join to register for events across campus",
            "^L log in instead · Esc back",
        ),
        _ => (
            "Reset your password",
            "We'll send a reset link to your email",
            "^L back to log in · Esc back",
        ),
    };

    let Some(form) = app.auth.form_for_route(route) else {
        return;
    };

    let height = (form.len() as u16) * 2 + 9;
    let width = 48u16.min(area.width.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height.saturating_sub(height).min(area.height) / 2;
    let card = Rect::new(x, y, width, height.min(area.height));

    let mut lines = vec![
        Line::from(Span::styled(
            "Campus Events",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(theme.muted),
        )),
    ];

    for (idx, field) in form.fields().iter().enumerate() {
        let focused = idx == form.focused;
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if form.field_has_error(field.name) {
            Style::default().fg(theme.danger)
        } else if focused {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.muted)
        };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<18}", field.label), label_style),
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
        None if pending => lines.push(Line::from(Span::styled(
            format!("{spinner} Submitting…"),
            Style::default().fg(theme.accent),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Enter submit · Tab next field",
            Style::default().fg(theme.muted),
        ))),
    }
    lines.push(Line::from(Span::styled(
        footer.to_string(),
        Style::default().fg(theme.muted),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(block),
        card,
    );
}
