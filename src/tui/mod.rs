// TUI - terminal lifecycle and the event loop
//
// Handles terminal setup/teardown, the tokio event loop (keyboard input,
// render ticks, submission outcomes), and the layered key dispatch:
// Modal -> text entry -> global keys -> active view.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod form;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod views;

use crate::backend::SubmitOutcome;
use crate::config::Config;
use crate::data::DataSource;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Route};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{ConfirmAction, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use views::Handled;

/// Run the TUI until the user quits
pub async fn run_tui(
    config: Config,
    data: Arc<dyn DataSource>,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Outcome channel: spawned submissions report back here
    let (outcome_tx, mut outcome_rx) = mpsc::channel(32);
    let mut app = App::new(config, data, log_buffer, outcome_tx);

    let result = run_event_loop(&mut terminal, &mut app, &mut outcome_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// The loop waits on three things at once: terminal input, the render tick,
/// and finished submissions.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcome_rx: &mut mpsc::Receiver<SubmitOutcome>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for spinners and toast expiry
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Finished submissions
            Some(outcome) = outcome_rx.recv() => {
                app.handle_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered dispatch: Modal -> text entry -> global keys -> active view
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if handle_modal_input(app, &key_event) {
        return;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // While a form or search box is capturing text, the view gets the raw
    // stream - no debounce, no global shortcuts
    if app.in_text_entry() {
        views::handle_key(app, key_event);
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    // Navigation keys go through the InputHandler for hold-to-repeat
    if !app.handle_key_press(key_event.code) {
        return;
    }

    if views::handle_key(app, key_event) == Handled::Yes {
        return;
    }

    // Unconsumed Esc walks back through visited routes
    if key_event.code == KeyCode::Esc {
        app.go_back();
    }
}

/// Mouse wheel scrolls the active view
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let key = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
        MouseEventKind::ScrollDown => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
        _ => return,
    };
    if !app.in_text_entry() && app.modal.is_none() {
        views::handle_key(app, key);
    }
}

/// Modal input - returns true if the modal absorbed the event
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process releases so the InputHandler doesn't see stuck keys
    // after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
        ModalAction::Confirm => {
            let confirmed = app.modal.take();
            if let Some(modal::Modal::Confirm { action, .. }) = confirmed {
                apply_confirm(app, action);
            }
        }
    }

    true
}

/// Execute a confirmed destructive action
fn apply_confirm(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::DeleteEvent { event_id } => {
            match app.data.delete_event(&event_id) {
                Ok(()) => app.show_toast("✓ Event deleted"),
                Err(err) => app.show_toast(format!("✗ {err}")),
            }
            let data = app.data.clone();
            app.dashboard.refresh(data.as_ref());
            app.events_page.refresh(data.as_ref());
        }
        ConfirmAction::CancelRegistration { registration_id } => {
            match app.data.set_registration_status(
                &registration_id,
                crate::models::RegistrationStatus::Cancelled,
            ) {
                Ok(()) => app.show_toast("✓ Registration cancelled"),
                Err(err) => app.show_toast(format!("✗ {err}")),
            }
            let data = app.data.clone();
            app.dashboard.refresh(data.as_ref());
        }
    }
}

/// Global keys - view switching, help, quit. Returns true if handled.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::help());
            }
            true
        }
        KeyCode::Char('!') => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::logs());
            }
            true
        }
        // Direct route selection
        KeyCode::F(1) => switch_tab(app, key, 0),
        KeyCode::F(2) => switch_tab(app, key, 1),
        KeyCode::F(3) => switch_tab(app, key, 2),
        KeyCode::F(4) => switch_tab(app, key, 3),
        KeyCode::F(5) => switch_tab(app, key, 4),
        // Bracket keys cycle through the navbar tabs
        KeyCode::Char(']') => {
            if app.handle_key_press(key) {
                cycle_tab(app, 1);
            }
            true
        }
        KeyCode::Char('[') => {
            if app.handle_key_press(key) {
                cycle_tab(app, -1);
            }
            true
        }
        // Session toggle
        KeyCode::Char('L') => {
            if app.handle_key_press(key) {
                if app.session.is_some() {
                    app.session = None;
                    app.show_toast("✓ Signed out");
                } else {
                    app.navigate(Route::Login);
                }
            }
            true
        }
        _ => false,
    }
}

fn switch_tab(app: &mut App, key: KeyCode, idx: usize) -> bool {
    if app.handle_key_press(key) {
        app.navigate(Route::NAV_TABS[idx]);
    }
    true
}

fn cycle_tab(app: &mut App, step: isize) {
    let tabs = Route::NAV_TABS;
    let current = app
        .route
        .nav_tab()
        .and_then(|tab| tabs.iter().position(|t| *t == tab))
        .unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(tabs.len() as isize) as usize;
    app.navigate(tabs[next]);
}
