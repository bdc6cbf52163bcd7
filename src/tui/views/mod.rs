// Views - screen-level state and rendering
//
// Each route has a module owning its controller state (search text, facet
// selections, current page, selection) and a render function. The draw
// entry point builds the shared shell (navbar, content slot, status bar)
// and dispatches to the active route, then layers modal and toast overlays
// on top.

mod analytics;
mod auth;
mod dashboard;
mod departments;
mod event_detail;
mod events;
mod home;
mod info;
mod manage_events;
mod modal;
mod not_found;
mod profile;
mod registrations;
mod settings;

pub use auth::AuthPages;
pub use dashboard::DashboardPage;
pub use departments::DepartmentsPage;
pub use event_detail::EventDetailPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use info::InfoPage;
pub use manage_events::ManageEventsPage;
pub use profile::ProfilePage;
pub use registrations::RegistrationsPage;

use crate::tui::app::{App, Route};
use crate::tui::components;
use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Result of offering a key to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The view consumed the event
    Yes,
    /// Not handled, bubble up to the app
    No,
}

/// Main render function, called every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    if app.use_theme_background {
        let bg = Block::default().style(Style::default().bg(app.theme.background));
        f.render_widget(bg, f.area());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // navbar
            Constraint::Min(8),    // content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::navbar::render(f, chunks[0], app);

    let content = chunks[1];
    match app.route {
        Route::Home => home::render(f, content, app),
        Route::Events => events::render(f, content, app),
        Route::EventDetail => event_detail::render(f, content, app),
        Route::Departments => departments::render(f, content, app),
        Route::Dashboard => dashboard::render(f, content, app),
        Route::Profile => profile::render(f, content, app),
        Route::About => info::render_about(f, content, app),
        Route::Contact => info::render_contact(f, content, app),
        Route::Login | Route::Signup | Route::ForgotPassword => auth::render(f, content, app),
        Route::NotFound => not_found::render(f, content, app),
    }

    components::status_bar::render(f, chunks[2], app);

    // Overlays: modal above content, toast above everything
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
    app.clear_expired_toast();
}

/// Offer a key to the active view. Called after global keys had their turn.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    match app.route {
        Route::Home => home::handle_key(app, key),
        Route::Events => events::handle_key(app, key),
        Route::EventDetail => event_detail::handle_key(app, key),
        Route::Departments => departments::handle_key(app, key),
        Route::Dashboard => dashboard::handle_key(app, key),
        Route::Profile => profile::handle_key(app, key),
        Route::About | Route::Contact => info::handle_key(app, key),
        Route::Login | Route::Signup | Route::ForgotPassword => auth::handle_key(app, key),
        Route::NotFound => not_found::handle_key(app, key),
    }
}
